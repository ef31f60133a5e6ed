//! Line parsing for taskline.
//!
//! One line of text in, one structured record out, and back again. Both
//! modes share a marker vocabulary:
//!
//! - `@project` - project reference
//! - `+tag` - labels (repeatable)
//! - `~2h30m` - estimated duration
//!
//! Todo lines may open with a date (`2025-03-01`, `today`, `tomorrow`,
//! `friday`) or a recurrence phrase (`daily`, `weekdays`, `Mon,Wed,Fri`,
//! `every monday`, `every 2w`, `after 2w`), and may carry `$bucket`,
//! `window:09:00-17:00`, and `after:1,2` markers.
//!
//! Log lines may open with a timestamp (`09:15`, `2025-01-10 09:15:30`)
//! and one lifecycle marker (`@end`, `@pause`, `@abandon`, `@resume`,
//! `@prev`, `@<id>`), and may carry `(45m)` measured durations, `^1`-`^9`
//! priorities, `->paused`-style suffixes, and `# remark` trailers.
//!
//! Anything that fails its marker shape stays title text; a recognized
//! marker with an out-of-range body is an error. Formatting a parsed
//! record yields the one canonical spelling of the line, and parsing
//! that spelling reproduces the record.

mod log;
mod todo;
mod token;
mod tokenizer;

pub use log::{format_log, EntryState, LogEntry, StateSuffix};
pub use todo::{format_todo, TodoTask};
pub use token::{Mode, Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};

use chrono::{Local, NaiveDate};

use crate::error::TasklineError;

/// Parse a task-manager line against today's date.
///
/// # Errors
///
/// Returns `TasklineError::Parse` for empty input, a missing title, or
/// a recognized marker with an invalid body.
pub fn parse_todo(input: &str) -> Result<TodoTask, TasklineError> {
    parse_todo_at(input, Local::now().date_naive())
}

/// Parse a task-manager line against an explicit reference date.
///
/// The reference date anchors relative date words (`today`, `tomorrow`,
/// weekday names) and recurrence anchors.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskline::parser::parse_todo_at;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let task = parse_todo_at("tomorrow deploy app @web +infra ~2h", day).unwrap();
/// assert_eq!(task.title, "deploy app");
/// assert_eq!(task.date, NaiveDate::from_ymd_opt(2025, 1, 7));
/// assert_eq!(task.project.as_deref(), Some("web"));
/// assert_eq!(task.duration, Some(120));
/// ```
///
/// # Errors
///
/// Returns `TasklineError::Parse` for empty input, a missing title, or
/// a recognized marker with an invalid body.
pub fn parse_todo_at(input: &str, today: NaiveDate) -> Result<TodoTask, TasklineError> {
    let trimmed = input.trim();
    let tokens = tokenize(trimmed, Mode::Todo)?;
    todo::extract(&tokens, trimmed, today)
}

/// Parse a time-tracker line against today's date.
///
/// # Errors
///
/// Returns `TasklineError::Parse` for empty input or a recognized
/// marker with an invalid body.
pub fn parse_log(input: &str) -> Result<LogEntry, TasklineError> {
    parse_log_at(input, Local::now().date_naive())
}

/// Parse a time-tracker line against an explicit reference date.
///
/// A bare `HH:MM` timestamp lands on the reference date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskline::parser::parse_log_at;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let entry = parse_log_at("09:15 fix login bug @backend +bugfix", day).unwrap();
/// assert_eq!(entry.title, "fix login bug");
/// assert_eq!(entry.project.as_deref(), Some("backend"));
/// ```
///
/// # Errors
///
/// Returns `TasklineError::Parse` for empty input or a recognized
/// marker with an invalid body.
pub fn parse_log_at(input: &str, today: NaiveDate) -> Result<LogEntry, TasklineError> {
    let trimmed = input.trim();
    let tokens = tokenize(trimmed, Mode::Log)?;
    log::extract(&tokens, trimmed, today)
}
