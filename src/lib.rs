//! taskline - a one-line grammar for tasks and time logs
//!
//! This crate parses single lines of task-manager and time-tracker text
//! into structured records and formats records back into their one
//! canonical spelling.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TasklineError;
pub use parser::{
    format_log, format_todo, parse_log, parse_log_at, parse_todo, parse_todo_at, LogEntry, Mode,
    TodoTask,
};
