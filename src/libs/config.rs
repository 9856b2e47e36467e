//! Configuration management for the worktime application.
//!
//! Handles the persisted defaults the calculator starts from: the weekly
//! target, an optional habitual day-start time, and the preferred break
//! entry mode. Settings can be edited programmatically or through the
//! interactive setup wizard.
//!
//! ## Configuration Structure
//!
//! The configuration is modular; each section is optional and omitted from
//! the file when unset:
//!
//! - **Calculator**: weekly target hours and the default day-start time
//! - **Breaks**: default break entry mode and flat minute total
//!
//! ## Storage
//!
//! Settings are stored as JSON in the platform application data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\worktime\config.json`
//! - **macOS**: `~/Library/Application Support/worktime/config.json`
//! - **Linux**: `~/.local/share/worktime/config.json`
//!
//! A missing file is not an error; reading falls back to defaults so the
//! tool works without any setup.

use super::data_storage::DataStorage;
use crate::libs::breaks::BreakMode;
use crate::libs::codec;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Calculator defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalculatorConfig {
    /// Weekly target in hours. Fractional values are allowed.
    pub weekly_target_hours: f64,

    /// Habitual day-start time as "HH:MM:SS", pre-filling the form's
    /// start-time field when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_start: Option<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            weekly_target_hours: 45.0,
            day_start: None,
        }
    }
}

/// Break entry defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BreaksConfig {
    /// Break entry mode the form starts in.
    pub mode: BreakMode,

    /// Default total break time in minutes for the flat mode.
    pub flat_minutes: u64,
}

impl Default for BreaksConfig {
    fn default() -> Self {
        BreaksConfig {
            mode: BreakMode::Flat,
            flat_minutes: 30,
        }
    }
}

/// Main configuration container for the application.
///
/// Every section is optional; `skip_serializing_if` keeps unset sections
/// out of the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Calculator defaults (weekly target, day start).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculator: Option<CalculatorConfig>,

    /// Break entry defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaks: Option<BreaksConfig>,
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file.
    ///
    /// Returns `true` when a file existed and was deleted.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Presents the available modules as a multi-select, then prompts for
    /// each selected module's settings with the current values as
    /// defaults. The returned configuration still has to be saved.
    pub fn init() -> Result<Self> {
        // Existing values become the wizard defaults
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![
            ConfigModule {
                key: "calculator".to_string(),
                name: "Calculator".to_string(),
            },
            ConfigModule {
                key: "breaks".to_string(),
                name: "Breaks".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "calculator" => {
                    let default = config.calculator.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleCalculator);

                    let weekly_target_hours: f64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptWeeklyTarget.to_string())
                        .default(default.weekly_target_hours)
                        .interact_text()?;

                    // Empty input clears the habitual day start
                    let day_start: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDayStart.to_string())
                        .default(default.day_start.clone().unwrap_or_default())
                        .allow_empty(true)
                        .validate_with(|input: &String| -> Result<(), String> {
                            if input.is_empty() {
                                return Ok(());
                            }
                            codec::parse_time_of_day(input).map(|_| ()).map_err(|e| e.to_string())
                        })
                        .interact_text()?;

                    config.calculator = Some(CalculatorConfig {
                        weekly_target_hours,
                        day_start: if day_start.is_empty() { None } else { Some(day_start) },
                    });
                }
                "breaks" => {
                    let default = config.breaks.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleBreaks);

                    let mode_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptBreakMode.to_string())
                        .items(&["Flat minute total", "Explicit intervals"])
                        .default(match default.mode {
                            BreakMode::Flat => 0,
                            BreakMode::Intervals => 1,
                        })
                        .interact()?;

                    let flat_minutes: u64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptFlatBreakMinutes.to_string())
                        .default(default.flat_minutes)
                        .interact_text()?;

                    config.breaks = Some(BreaksConfig {
                        mode: if mode_index == 0 { BreakMode::Flat } else { BreakMode::Intervals },
                        flat_minutes,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
