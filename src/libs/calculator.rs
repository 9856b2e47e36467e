//! Work-time calculation over weekly totals.
//!
//! This module provides the centralized calculation that maps entered time
//! values to the three reported figures: remaining weekly work time,
//! overtime, and the projected go-home time.
//!
//! ## Calculation Formula
//!
//! ```text
//! adjusted  = max(worked - breaks, 0)
//! remaining = max(target - adjusted, 0)
//! overtime  = max(adjusted - target, 0)
//! go_home   = day_start + remaining      (wall-clock, wraps past midnight)
//! ```
//!
//! Remaining and overtime are mutually exclusive: at most one of them is
//! nonzero, and both are zero exactly when the adjusted worked time meets
//! the target. Negative intermediate values are clamped to zero at every
//! step, so breaks exceeding the worked time never propagate a negative
//! duration.

use crate::libs::breaks::BreakSpec;
use chrono::{Duration, NaiveTime};

/// The entered values a computation runs over.
#[derive(Debug, Clone)]
pub struct CalculatorInput {
    /// Weekly target in hours. Fractional values are supported; values
    /// at or below zero behave as a zero target.
    pub weekly_target_hours: f64,
    /// Total time worked this week.
    pub worked: Duration,
    /// Break specification, in either entry mode.
    pub breaks: BreakSpec,
    /// Today's start time; enables the go-home projection.
    pub day_start: Option<NaiveTime>,
}

/// The computed results for a set of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorOutput {
    /// Work time still owed toward the weekly target.
    pub remaining: Duration,
    /// Work time in excess of the weekly target.
    pub overtime: Duration,
    /// Projected go-home time; only present when a day start was given.
    pub go_home: Option<NaiveTime>,
}

/// Computes remaining time, overtime and the go-home projection.
///
/// Pure and re-entrant; the form layer calls this after every input
/// mutation.
///
/// # Examples
///
/// ```rust
/// use worktime::libs::breaks::BreakSpec;
/// use worktime::libs::calculator::{compute, CalculatorInput};
/// use chrono::Duration;
///
/// let output = compute(&CalculatorInput {
///     weekly_target_hours: 45.0,
///     worked: Duration::hours(40),
///     breaks: BreakSpec::Flat { minutes: 30 },
///     day_start: None,
/// });
/// assert_eq!(output.remaining, Duration::hours(5) + Duration::minutes(30));
/// assert_eq!(output.overtime, Duration::zero());
/// ```
pub fn compute(input: &CalculatorInput) -> CalculatorOutput {
    let worked = input.worked.num_seconds().max(0);
    let break_total = input.breaks.total().num_seconds().max(0);

    // Breaks longer than the worked time yield zero, never negative.
    let adjusted = (worked - break_total).max(0);
    let target = (input.weekly_target_hours.max(0.0) * 3600.0).round() as i64;

    let remaining = (target - adjusted).max(0);
    let overtime = (adjusted - target).max(0);

    // Wall-clock addition; only the resulting time of day is reported.
    let go_home = input
        .day_start
        .map(|start| start.overflowing_add_signed(Duration::seconds(remaining)).0);

    CalculatorOutput {
        remaining: Duration::seconds(remaining),
        overtime: Duration::seconds(overtime),
        go_home,
    }
}
