//! JSON output formatting for taskline.

use serde::Serialize;

use crate::error::TasklineError;
use crate::parser::{LogEntry, TodoTask};

/// Format a todo record as JSON.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_todo_json(task: &TodoTask) -> Result<String, TasklineError> {
    to_json(task)
}

/// Format a log record as JSON.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_log_json(entry: &LogEntry) -> Result<String, TasklineError> {
    to_json(entry)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TasklineError> {
    Ok(serde_json::to_string_pretty(value)?)
}
