//! Interactive calculator form.
//!
//! A prompt-driven rendition of the calculator form: pick a field, edit
//! it, and the results re-render immediately. The form state recomputes
//! after every mutation, so what is displayed always reflects the current
//! inputs. Required fields left empty surface their validation message
//! inline above the results.

use crate::libs::breaks::BreakMode;
use crate::libs::config::Config;
use crate::libs::form::{BreakBound, FormState, TimeComponent, TimeField};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let calculator_config = config.calculator.unwrap_or_default();
    let breaks_config = config.breaks.unwrap_or_default();
    let mut form = FormState::new(&calculator_config, &breaks_config);

    msg_print!(Message::FormHeader, true);
    loop {
        render(&form)?;

        let fields = vec![
            format!("Weekly target [{}]", form.weekly_target()),
            format!("Time worked [{}]", form.worked().text()),
            format!("Breaks [{}]", describe_breaks(&form)),
            format!("Start time [{}]", start_label(&form)),
            "Done".to_string(),
        ];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectField.to_string())
            .items(&fields)
            .default(0)
            .interact()?;

        match choice {
            0 => edit_target(&mut form)?,
            1 => edit_worked(&mut form)?,
            2 => edit_breaks(&mut form)?,
            3 => edit_start(&mut form)?,
            _ => break,
        }
    }
    Ok(())
}

/// Inline validation messages, then the current results.
fn render(form: &FormState) -> Result<()> {
    for error in form.errors() {
        msg_error!(error);
    }
    View::results(form.output())
}

fn describe_breaks(form: &FormState) -> String {
    match form.break_mode() {
        BreakMode::Flat => format!("flat, {} min", form.flat_break_minutes()),
        BreakMode::Intervals => format!("{} interval(s)", form.breaks().len()),
    }
}

fn start_label(form: &FormState) -> String {
    if form.start_time().is_empty() {
        "not set".to_string()
    } else {
        form.start_time().text()
    }
}

fn edit_target(form: &mut FormState) -> Result<()> {
    let target: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWeeklyTarget.to_string())
        .default(form.weekly_target().to_string())
        .allow_empty(true)
        .interact_text()?;
    form.set_weekly_target(&target);
    Ok(())
}

fn edit_worked(form: &mut FormState) -> Result<()> {
    let (hours, minutes, seconds) = prompt_components(form.worked())?;
    form.set_worked(TimeComponent::Hours, &hours);
    form.set_worked(TimeComponent::Minutes, &minutes);
    form.set_worked(TimeComponent::Seconds, &seconds);
    Ok(())
}

fn edit_start(form: &mut FormState) -> Result<()> {
    let (hours, minutes, seconds) = prompt_components(form.start_time())?;
    form.set_start_time(TimeComponent::Hours, &hours);
    form.set_start_time(TimeComponent::Minutes, &minutes);
    form.set_start_time(TimeComponent::Seconds, &seconds);
    Ok(())
}

/// Prompts for the three components of a time field, current values as
/// defaults. Out-of-range minutes and seconds are dropped by the field
/// setters, not here.
fn prompt_components(field: &TimeField) -> Result<(String, String, String)> {
    let label = field.label().to_string();

    let hours: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptHours(label.clone()).to_string())
        .default(field.hours().to_string())
        .allow_empty(true)
        .interact_text()?;
    let minutes: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMinutes(label.clone()).to_string())
        .default(field.minutes().to_string())
        .allow_empty(true)
        .interact_text()?;
    let seconds: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSeconds(label).to_string())
        .default(field.seconds().to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok((hours, minutes, seconds))
}

fn edit_breaks(form: &mut FormState) -> Result<()> {
    match form.break_mode() {
        BreakMode::Flat => {
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBreakAction.to_string())
                .items(&[
                    format!("Edit flat minutes [{}]", form.flat_break_minutes()),
                    "Switch to interval mode".to_string(),
                    "Back".to_string(),
                ])
                .default(0)
                .interact()?;
            match choice {
                0 => {
                    let minutes: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptFlatBreakMinutes.to_string())
                        .default(form.flat_break_minutes().to_string())
                        .allow_empty(true)
                        .interact_text()?;
                    form.set_flat_break_minutes(&minutes);
                }
                1 => form.set_break_mode(BreakMode::Intervals),
                _ => {}
            }
        }
        BreakMode::Intervals => {
            let row_count = form.breaks().len();
            let mut items: Vec<String> = form
                .breaks()
                .iter()
                .enumerate()
                .map(|(index, row)| format!("Row {} [{} - {}]", index + 1, row.start.text(), row.end.text()))
                .collect();
            items.push("Add row".to_string());
            items.push("Remove row".to_string());
            items.push("Switch to flat mode".to_string());
            items.push("Back".to_string());

            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBreakAction.to_string())
                .items(&items)
                .default(0)
                .interact()?;

            if choice < row_count {
                edit_break_row(form, choice)?;
            } else if choice == row_count {
                form.add_break();
                msg_print!(Message::BreakRowAdded(form.breaks().len()));
            } else if choice == row_count + 1 {
                let number: usize = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptBreakRow.to_string())
                    .default(row_count)
                    .interact_text()?;
                if form.remove_break(number.wrapping_sub(1)) {
                    msg_print!(Message::BreakRowRemoved(number));
                } else {
                    msg_warning!(Message::BreakRowNotRemovable);
                }
            } else if choice == row_count + 2 {
                form.set_break_mode(BreakMode::Flat);
            }
        }
    }
    Ok(())
}

fn edit_break_row(form: &mut FormState, index: usize) -> Result<()> {
    let (hours, minutes, seconds) = prompt_components(&form.breaks()[index].start)?;
    form.set_break(index, BreakBound::Start, TimeComponent::Hours, &hours);
    form.set_break(index, BreakBound::Start, TimeComponent::Minutes, &minutes);
    form.set_break(index, BreakBound::Start, TimeComponent::Seconds, &seconds);

    let (hours, minutes, seconds) = prompt_components(&form.breaks()[index].end)?;
    form.set_break(index, BreakBound::End, TimeComponent::Hours, &hours);
    form.set_break(index, BreakBound::End, TimeComponent::Minutes, &minutes);
    form.set_break(index, BreakBound::End, TimeComponent::Seconds, &seconds);

    Ok(())
}
