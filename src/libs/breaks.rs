//! Break model: explicit intervals, flat totals, and display formatting.

use crate::libs::codec::{self, FormattedBreak};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single break period within the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakInterval {
    /// Wall-clock time the break started.
    pub start: NaiveTime,
    /// Wall-clock time the break ended.
    pub end: NaiveTime,
}

impl BreakInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Length of the break. An end time earlier than the start time means
    /// the break wrapped past midnight.
    pub fn duration(&self) -> Duration {
        let span = self.end.signed_duration_since(self.start);
        if span < Duration::zero() {
            span + Duration::days(1)
        } else {
            span
        }
    }
}

/// How the user enters break time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakMode {
    /// One total figure, in minutes.
    #[default]
    Flat,
    /// A list of explicit start/end intervals.
    Intervals,
}

impl fmt::Display for BreakMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A break specification in one of the two supported entry modes.
///
/// Both modes reduce to a single total via [`BreakSpec::total`], so the
/// calculator handles them identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakSpec {
    Flat { minutes: u64 },
    Intervals(Vec<BreakInterval>),
}

impl BreakSpec {
    /// Total break duration across the specification.
    pub fn total(&self) -> Duration {
        match self {
            BreakSpec::Flat { minutes } => Duration::minutes(*minutes as i64),
            BreakSpec::Intervals(intervals) => intervals.iter().fold(Duration::zero(), |acc, interval| acc + interval.duration()),
        }
    }

    pub fn mode(&self) -> BreakMode {
        match self {
            BreakSpec::Flat { .. } => BreakMode::Flat,
            BreakSpec::Intervals(_) => BreakMode::Intervals,
        }
    }
}

/// A trait for formatting a collection of [`BreakInterval`] instances.
pub trait BreakGroup {
    /// Formats the intervals into [`FormattedBreak`] rows for display.
    fn format(&self) -> Vec<FormattedBreak>;
}

impl BreakGroup for Vec<BreakInterval> {
    fn format(&self) -> Vec<FormattedBreak> {
        self.iter()
            .enumerate()
            .map(|(index, interval)| FormattedBreak {
                id: (index + 1) as i32,
                start: codec::format_time_of_day(&interval.start),
                end: codec::format_time_of_day(&interval.end),
                duration: codec::format_duration(&interval.duration()),
            })
            .collect()
    }
}
