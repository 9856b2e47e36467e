use crate::libs::breaks::{BreakGroup, BreakInterval};
use crate::libs::calculator::CalculatorOutput;
use crate::libs::codec;
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn results(output: &CalculatorOutput) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["REMAINING TIME", codec::format_duration(&output.remaining)]);
        if output.overtime > Duration::zero() {
            table.add_row(row!["OVERTIME", codec::format_duration(&output.overtime)]);
        }
        if let Some(go_home) = output.go_home {
            table.add_row(row!["GO HOME TIME", codec::format_time_of_day(&go_home)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn breaks(breaks: &Vec<BreakInterval>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "DURATION"]);
        for entry in breaks.format() {
            table.add_row(row![entry.id, entry.start, entry.end, entry.duration]);
        }
        table.printstd();

        Ok(())
    }
}
