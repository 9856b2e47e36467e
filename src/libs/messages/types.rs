#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleCalculator,
    ConfigModuleBreaks,
    PromptSelectModules,
    PromptWeeklyTarget,
    PromptDayStart,
    PromptBreakMode,
    PromptFlatBreakMinutes,

    // === RESULT MESSAGES ===
    ResultsHeader,
    BreaksTitle(usize), // interval count
    TargetReached,

    // === FORM MESSAGES ===
    FormHeader,
    PromptSelectField,
    PromptBreakAction,
    PromptBreakRow,
    PromptHours(String),   // field label
    PromptMinutes(String), // field label
    PromptSeconds(String), // field label
    BreakRowAdded(usize), // row count
    BreakRowRemoved(usize), // row number
    BreakRowNotRemovable,
    FieldRequired(String), // field label

    // === INPUT VALIDATION MESSAGES ===
    InvalidTimeOfDay(String),
    InvalidBreakInterval(String),
}
