//! In-memory form state with recompute-on-mutation semantics.
//!
//! Every setter sanitizes its input, revalidates the touched field and
//! recomputes the calculator output, so the displayed results are always
//! consistent with the current field values. Recomputation is pure and
//! idempotent; there is no other side effect.
//!
//! Time values are entered through triple-field inputs ([`TimeField`]):
//! separate hours, minutes and seconds components, each filtered down to
//! digits. A minutes or seconds value above 59 is dropped silently, the
//! way the keystroke filter of a form input would refuse it. Empty
//! components read as "00".

use crate::libs::breaks::{BreakInterval, BreakMode, BreakSpec};
use crate::libs::calculator::{self, CalculatorInput, CalculatorOutput};
use crate::libs::codec;
use crate::libs::config::{BreaksConfig, CalculatorConfig};
use crate::libs::messages::Message;
use chrono::{Duration, NaiveTime};

/// One component of a triple-field time input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeComponent {
    Hours,
    Minutes,
    Seconds,
}

/// Which bound of a break row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakBound {
    Start,
    End,
}

/// A single `HH:MM:SS` input split into hours, minutes and seconds.
#[derive(Debug, Clone)]
pub struct TimeField {
    label: String,
    nullable: bool,
    hours: String,
    minutes: String,
    seconds: String,
    error: Option<String>,
}

impl TimeField {
    pub fn new(label: &str, nullable: bool) -> Self {
        let mut field = Self {
            label: label.to_string(),
            nullable,
            hours: String::new(),
            minutes: String::new(),
            seconds: String::new(),
            error: None,
        };
        field.validate();
        field
    }

    /// Creates a field pre-filled from "HH:MM:SS" text.
    pub fn with_value(label: &str, nullable: bool, text: &str) -> Self {
        let mut parts = text.splitn(3, ':');
        let mut field = Self {
            label: label.to_string(),
            nullable,
            hours: codec::sanitize_digits(parts.next().unwrap_or("")),
            minutes: codec::sanitize_digits(parts.next().unwrap_or("")),
            seconds: codec::sanitize_digits(parts.next().unwrap_or("")),
            error: None,
        };
        field.validate();
        field
    }

    /// Applies a raw edit to one component.
    ///
    /// Non-digit characters are stripped. A minutes or seconds value above
    /// 59 is refused and the previous value kept; returns `false` in that
    /// case.
    pub fn set(&mut self, component: TimeComponent, raw: &str) -> bool {
        let digits = codec::sanitize_digits(raw);

        if !matches!(component, TimeComponent::Hours) {
            if let Ok(value) = digits.parse::<u32>() {
                if value > 59 {
                    return false;
                }
            }
        }

        match component {
            TimeComponent::Hours => self.hours = digits,
            TimeComponent::Minutes => self.minutes = digits,
            TimeComponent::Seconds => self.seconds = digits,
        }
        self.validate();
        true
    }

    pub fn hours(&self) -> &str {
        &self.hours
    }

    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    pub fn seconds(&self) -> &str {
        &self.seconds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty() && self.minutes.is_empty() && self.seconds.is_empty()
    }

    /// The field as "HH:MM:SS" text, empty components reading as "00".
    pub fn text(&self) -> String {
        format!(
            "{}:{}:{}",
            self.component_or_default(&self.hours),
            self.component_or_default(&self.minutes),
            self.component_or_default(&self.seconds)
        )
    }

    fn component_or_default<'a>(&self, component: &'a str) -> &'a str {
        if component.is_empty() {
            "00"
        } else {
            component
        }
    }

    /// The field value as a duration.
    pub fn duration(&self) -> Duration {
        codec::parse_duration(&self.text())
    }

    /// The field value as a wall-clock time, `None` when empty.
    ///
    /// Overflowing hours are folded into the 24-hour cycle rather than
    /// rejected.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        if self.is_empty() {
            return None;
        }
        let seconds = self.duration().num_seconds().rem_euclid(24 * 3600);
        NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)
    }

    /// Revalidates the field; the only error class is a required field
    /// left empty.
    pub fn validate(&mut self) -> bool {
        if !self.nullable && self.is_empty() {
            self.error = Some(Message::FieldRequired(self.label.clone()).to_string());
            return false;
        }
        self.error = None;
        true
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// One break entry: start and end edited independently.
///
/// A row with an empty start or end is incomplete and skipped during
/// computation.
#[derive(Debug, Clone)]
pub struct BreakRow {
    pub start: TimeField,
    pub end: TimeField,
}

impl BreakRow {
    fn new() -> Self {
        Self {
            start: TimeField::new("Break start", true),
            end: TimeField::new("Break end", true),
        }
    }

    pub fn interval(&self) -> Option<BreakInterval> {
        if self.start.is_empty() || self.end.is_empty() {
            return None;
        }
        Some(BreakInterval::new(self.start.time_of_day()?, self.end.time_of_day()?))
    }
}

/// The calculator form: all entered values plus the current output.
#[derive(Debug, Clone)]
pub struct FormState {
    weekly_target: String,
    time_worked: TimeField,
    break_mode: BreakMode,
    flat_break_minutes: String,
    breaks: Vec<BreakRow>,
    start_time: TimeField,
    output: CalculatorOutput,
}

impl FormState {
    /// Builds the initial form from the configured defaults.
    pub fn new(calculator: &CalculatorConfig, breaks: &BreaksConfig) -> Self {
        let start_time = match &calculator.day_start {
            Some(text) => TimeField::with_value("Start time", true, text),
            None => TimeField::new("Start time", true),
        };
        let mut form = Self {
            weekly_target: format_target(calculator.weekly_target_hours),
            time_worked: TimeField::with_value("Time worked", false, "00:00:00"),
            break_mode: breaks.mode,
            flat_break_minutes: breaks.flat_minutes.to_string(),
            breaks: vec![BreakRow::new()],
            start_time,
            output: CalculatorOutput {
                remaining: Duration::zero(),
                overtime: Duration::zero(),
                go_home: None,
            },
        };
        form.recompute();
        form
    }

    pub fn weekly_target(&self) -> &str {
        &self.weekly_target
    }

    /// Weekly target as hours; empty or malformed text reads as zero.
    pub fn weekly_target_hours(&self) -> f64 {
        self.weekly_target.parse().unwrap_or(0.0)
    }

    /// Sets the weekly target, keeping digits and the first decimal point.
    pub fn set_weekly_target(&mut self, raw: &str) {
        let mut seen_point = false;
        self.weekly_target = raw
            .chars()
            .filter(|c| {
                if *c == '.' && !seen_point {
                    seen_point = true;
                    true
                } else {
                    c.is_ascii_digit()
                }
            })
            .collect();
        self.recompute();
    }

    pub fn worked(&self) -> &TimeField {
        &self.time_worked
    }

    pub fn set_worked(&mut self, component: TimeComponent, raw: &str) -> bool {
        let changed = self.time_worked.set(component, raw);
        self.recompute();
        changed
    }

    pub fn start_time(&self) -> &TimeField {
        &self.start_time
    }

    pub fn set_start_time(&mut self, component: TimeComponent, raw: &str) -> bool {
        let changed = self.start_time.set(component, raw);
        self.recompute();
        changed
    }

    pub fn break_mode(&self) -> BreakMode {
        self.break_mode
    }

    pub fn set_break_mode(&mut self, mode: BreakMode) {
        self.break_mode = mode;
        self.recompute();
    }

    pub fn flat_break_minutes(&self) -> &str {
        &self.flat_break_minutes
    }

    pub fn set_flat_break_minutes(&mut self, raw: &str) {
        self.flat_break_minutes = codec::sanitize_digits(raw);
        self.recompute();
    }

    pub fn breaks(&self) -> &[BreakRow] {
        &self.breaks
    }

    pub fn add_break(&mut self) {
        self.breaks.push(BreakRow::new());
        self.recompute();
    }

    /// Removes a break row. The first row is fixed and cannot be removed.
    pub fn remove_break(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.breaks.len() {
            return false;
        }
        self.breaks.remove(index);
        self.recompute();
        true
    }

    pub fn set_break(&mut self, index: usize, bound: BreakBound, component: TimeComponent, raw: &str) -> bool {
        let Some(row) = self.breaks.get_mut(index) else {
            return false;
        };
        let field = match bound {
            BreakBound::Start => &mut row.start,
            BreakBound::End => &mut row.end,
        };
        let changed = field.set(component, raw);
        self.recompute();
        changed
    }

    /// The break specification in the active mode; incomplete interval
    /// rows are skipped.
    pub fn break_spec(&self) -> BreakSpec {
        match self.break_mode {
            BreakMode::Flat => BreakSpec::Flat {
                minutes: self.flat_break_minutes.parse().unwrap_or(0),
            },
            BreakMode::Intervals => BreakSpec::Intervals(self.breaks.iter().filter_map(BreakRow::interval).collect()),
        }
    }

    /// Inline validation messages for required fields left empty.
    pub fn errors(&self) -> Vec<String> {
        [&self.time_worked, &self.start_time]
            .into_iter()
            .filter_map(|field| field.error().map(str::to_string))
            .collect()
    }

    pub fn output(&self) -> &CalculatorOutput {
        &self.output
    }

    /// Recomputes the output from the current field values.
    fn recompute(&mut self) {
        self.output = calculator::compute(&CalculatorInput {
            weekly_target_hours: self.weekly_target_hours(),
            worked: self.time_worked.duration(),
            breaks: self.break_spec(),
            day_start: self.start_time.time_of_day(),
        });
    }
}

/// Renders the target for the text field without a trailing ".0".
fn format_target(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{}", hours)
    }
}
