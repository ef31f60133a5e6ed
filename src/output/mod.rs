//! Output formatting for taskline.
//!
//! Parsed records render either as pretty labeled lines or as JSON.
//! The canonical one-line spelling lives with the parser, not here.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TasklineError;
use crate::parser::{LogEntry, TodoTask};

pub use json::{format_log_json, format_todo_json, to_json};
pub use pretty::{format_log_pretty, format_todo_pretty};

/// Format a todo record based on output format.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_todo(task: &TodoTask, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_todo_pretty(task)),
        OutputFormat::Json => format_todo_json(task),
    }
}

/// Format a log record based on output format.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_log(entry: &LogEntry, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_log_pretty(entry)),
        OutputFormat::Json => format_log_json(entry),
    }
}
