//! One-shot computation from command-line flags.
//!
//! Accepts the same inputs as the interactive form: a weekly target
//! (falling back to the configured default), the time worked so far,
//! breaks in either entry mode, and an optional day-start time for the
//! go-home projection.

use crate::libs::breaks::{BreakInterval, BreakSpec};
use crate::libs::calculator::{self, CalculatorInput};
use crate::libs::codec;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalcArgs {
    #[arg(long, short = 't', help = "Weekly target hours (falls back to the configured default)")]
    target: Option<f64>,

    #[arg(long, short = 'w', default_value = "00:00:00", help = "Time worked this week (HH:MM:SS)")]
    worked: String,

    #[arg(long, short = 'm', conflicts_with = "breaks", help = "Total break time in minutes")]
    break_minutes: Option<u64>,

    #[arg(
        long = "break",
        short = 'b',
        value_name = "START-END",
        help = "Break interval as HH:MM:SS-HH:MM:SS; may be repeated"
    )]
    breaks: Vec<String>,

    #[arg(long, short = 's', help = "Day start time (HH:MM:SS, 24-hour clock)")]
    start: Option<String>,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let config = Config::read()?;
    let calculator_config = config.calculator.unwrap_or_default();

    let breaks = if !args.breaks.is_empty() {
        let intervals = args.breaks.iter().map(|spec| parse_interval(spec)).collect::<Result<Vec<_>>>()?;
        BreakSpec::Intervals(intervals)
    } else {
        BreakSpec::Flat {
            minutes: args.break_minutes.unwrap_or(0),
        }
    };

    // The flag wins over the configured habitual start time
    let day_start = match args.start.as_deref().or(calculator_config.day_start.as_deref()) {
        Some(text) => Some(codec::parse_time_of_day(text).map_err(|e| msg_error_anyhow!(Message::InvalidTimeOfDay(e.to_string())))?),
        None => None,
    };

    let input = CalculatorInput {
        weekly_target_hours: args.target.unwrap_or(calculator_config.weekly_target_hours),
        worked: codec::parse_duration(&args.worked),
        breaks,
        day_start,
    };
    let output = calculator::compute(&input);

    if let BreakSpec::Intervals(intervals) = &input.breaks {
        msg_print!(Message::BreaksTitle(intervals.len()));
        View::breaks(intervals)?;
    }

    msg_print!(Message::ResultsHeader);
    View::results(&output)?;

    if output.remaining == Duration::zero() && output.overtime == Duration::zero() {
        msg_success!(Message::TargetReached);
    }
    Ok(())
}

/// Parses a "HH:MM:SS-HH:MM:SS" interval flag.
fn parse_interval(spec: &str) -> Result<BreakInterval> {
    let (start, end) = spec
        .split_once('-')
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidBreakInterval(spec.to_string())))?;

    Ok(BreakInterval::new(
        codec::parse_time_of_day(start.trim()).map_err(|e| msg_error_anyhow!(Message::InvalidTimeOfDay(e.to_string())))?,
        codec::parse_time_of_day(end.trim()).map_err(|e| msg_error_anyhow!(Message::InvalidTimeOfDay(e.to_string())))?,
    ))
}
