//! Display implementation for worktime application messages.
//!
//! Converts structured [`Message`] values into the text shown to users.
//! Keeping every user-facing string in one place keeps wording consistent
//! across the commands and makes the message set reviewable at a glance.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file removed".to_string(),
            Message::ConfigFileNotFound => "No configuration file found".to_string(),
            Message::ConfigModuleCalculator => "Calculator settings".to_string(),
            Message::ConfigModuleBreaks => "Break settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptWeeklyTarget => "Weekly target hours".to_string(),
            Message::PromptDayStart => "Day start time (HH:MM:SS, leave empty to skip)".to_string(),
            Message::PromptBreakMode => "Default break entry mode".to_string(),
            Message::PromptFlatBreakMinutes => "Default break total in minutes".to_string(),

            // === RESULT MESSAGES ===
            Message::ResultsHeader => "Work time summary".to_string(),
            Message::BreaksTitle(count) => format!("Breaks entered: {}", count),
            Message::TargetReached => "Weekly target reached".to_string(),

            // === FORM MESSAGES ===
            Message::FormHeader => "Work time calculator".to_string(),
            Message::PromptSelectField => "Choose a field to edit".to_string(),
            Message::PromptBreakAction => "Breaks".to_string(),
            Message::PromptBreakRow => "Break row".to_string(),
            Message::PromptHours(label) => format!("{} hours", label),
            Message::PromptMinutes(label) => format!("{} minutes", label),
            Message::PromptSeconds(label) => format!("{} seconds", label),
            Message::BreakRowAdded(count) => format!("Break row added ({} total)", count),
            Message::BreakRowRemoved(number) => format!("Break row {} removed", number),
            Message::BreakRowNotRemovable => "The first break row cannot be removed".to_string(),
            Message::FieldRequired(label) => format!("{} cannot be empty", label),

            // === INPUT VALIDATION MESSAGES ===
            Message::InvalidTimeOfDay(details) => format!("Invalid time of day: {}", details),
            Message::InvalidBreakInterval(text) => {
                format!("Invalid break interval '{}' (expected HH:MM:SS-HH:MM:SS)", text)
            }
        };
        write!(f, "{}", text)
    }
}
