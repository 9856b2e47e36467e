//! `HH:MM:SS` parsing and formatting utilities.
//!
//! This module is the single point where textual time values are converted
//! to and from the time types used by the calculator. It is used by the
//! form state for field sanitization, by the command layer for flag
//! parsing, and by the view layer for rendering results.
//!
//! ## Two parsing layers
//!
//! - **Lenient** ([`parse_duration`]): mirrors the form input behavior.
//!   Missing components default to zero, non-digit characters are stripped
//!   before conversion, and no error is ever produced. The input layer is
//!   responsible for keeping minutes and seconds in range.
//! - **Strict** ([`parse_time_of_day`]): used for wall-clock values coming
//!   from CLI flags, where a typed error message is the right response to
//!   malformed input.
//!
//! ## Format specifications
//!
//! Durations follow the "HH:MM:SS" pattern with every field zero-padded to
//! two digits. The hours field is not capped at 24, so a full work week
//! formats as "45:00:00". Negative durations format as "00:00:00".
//! Wall-clock times use the same pattern on a 24-hour clock.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the strict wall-clock parsing layer.
///
/// The lenient duration parser never fails; these errors only surface for
/// values that must denote a valid time of day, such as the day-start flag
/// or the bounds of a break interval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeCodecError {
    #[error("'{0}' is not a valid time of day (expected HH:MM:SS)")]
    InvalidTimeOfDay(String),

    #[error("hours out of range in '{0}' (24-hour clock, 0-23)")]
    HoursOutOfRange(String),

    #[error("minutes and seconds in '{0}' must be 59 or less")]
    MinutesSecondsOutOfRange(String),
}

/// Strips every character that is not an ASCII digit.
///
/// This is the keystroke filter of the form layer: malformed numeric text
/// is coerced rather than rejected.
pub fn sanitize_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Leniently parses a duration from "HH:MM:SS" text.
///
/// Splits on `:`; missing components default to zero and non-digit
/// characters are stripped from each component before conversion. The
/// result is never negative.
///
/// # Examples
///
/// ```rust
/// use worktime::libs::codec::parse_duration;
/// use chrono::Duration;
///
/// assert_eq!(parse_duration("40:00:00"), Duration::hours(40));
/// assert_eq!(parse_duration("1:30"), Duration::minutes(90));
/// assert_eq!(parse_duration(""), Duration::zero());
/// ```
pub fn parse_duration(text: &str) -> Duration {
    let mut parts = text.splitn(3, ':');
    let hours = numeric_component(parts.next());
    let minutes = numeric_component(parts.next());
    let seconds = numeric_component(parts.next());

    Duration::seconds(hours.saturating_mul(3600).saturating_add(minutes.saturating_mul(60)).saturating_add(seconds))
}

/// Converts one colon-separated component to a number, coercing silently.
fn numeric_component(part: Option<&str>) -> i64 {
    part.map(sanitize_digits).and_then(|digits| digits.parse().ok()).unwrap_or(0)
}

/// Strictly parses a wall-clock time of day from "HH:MM:SS" text.
///
/// Missing components default to zero ("9" parses as 09:00:00), but every
/// present component must be numeric, hours must be below 24 and minutes
/// and seconds must be 59 or less.
///
/// # Errors
///
/// Returns a [`TimeCodecError`] describing the first violated rule.
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime, TimeCodecError> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 3 {
        return Err(TimeCodecError::InvalidTimeOfDay(text.to_string()));
    }

    let mut components = [0u32; 3];
    for (index, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        components[index] = part.parse().map_err(|_| TimeCodecError::InvalidTimeOfDay(text.to_string()))?;
    }

    let [hours, minutes, seconds] = components;
    if hours > 23 {
        return Err(TimeCodecError::HoursOutOfRange(text.to_string()));
    }
    if minutes > 59 || seconds > 59 {
        return Err(TimeCodecError::MinutesSecondsOutOfRange(text.to_string()));
    }

    NaiveTime::from_hms_opt(hours, minutes, seconds).ok_or_else(|| TimeCodecError::InvalidTimeOfDay(text.to_string()))
}

/// Formats a duration as a zero-padded "HH:MM:SS" string.
///
/// Hours are not capped at 24, so whole-week durations render naturally.
/// Negative durations are clamped to "00:00:00".
///
/// # Examples
///
/// ```rust
/// use worktime::libs::codec::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(45)), "45:00:00");
/// assert_eq!(format_duration(&(Duration::hours(5) + Duration::minutes(30))), "05:30:00");
/// assert_eq!(format_duration(&Duration::seconds(-90)), "00:00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Formats a wall-clock time as "HH:MM:SS" on a 24-hour clock.
pub fn format_time_of_day(time: &NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// Represents a formatted break row for display purposes.
///
/// All values are pre-formatted strings, suitable for direct use with the
/// table renderer and for serialization without custom formatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedBreak {
    /// The sequential row number, starting from 1.
    pub id: i32,
    /// The formatted start time (e.g., "12:00:00").
    pub start: String,
    /// The formatted end time (e.g., "12:30:00").
    pub end: String,
    /// The formatted break duration (e.g., "00:30:00").
    pub duration: String,
}
