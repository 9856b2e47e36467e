//! Core library modules for the worktime application.
//!
//! Serves as the main entry point for all worktime library components.
//!
//! ## Features
//!
//! - **Time Codec**: `HH:MM:SS` parsing, sanitization and formatting
//! - **Break Model**: flat totals and wrap-around interval arithmetic
//! - **Calculator**: remaining time, overtime and go-home projection
//! - **Form State**: reactive recompute-on-mutation input handling
//! - **Infrastructure**: configuration, messaging, console rendering
//!
//! ## Usage
//!
//! ```rust
//! use worktime::libs::breaks::BreakSpec;
//! use worktime::libs::calculator::{compute, CalculatorInput};
//! use worktime::libs::codec;
//!
//! let output = compute(&CalculatorInput {
//!     weekly_target_hours: 40.0,
//!     worked: codec::parse_duration("42:00:00"),
//!     breaks: BreakSpec::Flat { minutes: 0 },
//!     day_start: None,
//! });
//! assert_eq!(codec::format_duration(&output.overtime), "02:00:00");
//! ```

pub mod breaks;
pub mod calculator;
pub mod codec;
pub mod config;
pub mod data_storage;
pub mod form;
pub mod messages;
pub mod view;
