//! # Worktime - Weekly Work-Time Calculator
//!
//! A command-line utility for computing remaining weekly work time,
//! overtime, and the projected "go home" time from entered time values.
//!
//! ## Features
//!
//! - **Time Arithmetic**: `HH:MM:SS` parsing and formatting, duration
//!   sums and differences across midnight boundaries
//! - **Two Break Modes**: a flat minute total or explicit start/end
//!   intervals, handled identically downstream
//! - **Go-Home Projection**: day start plus remaining time as wall-clock
//!   arithmetic
//! - **Interactive Form**: a prompt-driven form that recomputes after
//!   every change
//! - **Configured Defaults**: weekly target, day start and break mode
//!   persisted in a platform config file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktime::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
