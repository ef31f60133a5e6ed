//! Parse command implementations.
//!
//! Both line modes share the same flow: parse against the reference
//! date, then render the record, or just its canonical spelling when
//! `--canonical` is given.

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::TasklineError;
use crate::output;
use crate::parser;

/// Execute the todo parse command.
///
/// # Errors
///
/// Returns an error if the line fails to parse or serialization fails.
pub fn todo(args: &ParseArgs, format: OutputFormat) -> Result<String, TasklineError> {
    let task = match args.date {
        Some(day) => parser::parse_todo_at(&args.text, day),
        None => parser::parse_todo(&args.text),
    }?;

    if args.canonical {
        return Ok(parser::format_todo(&task));
    }
    output::format_todo(&task, format)
}

/// Execute the log parse command.
///
/// # Errors
///
/// Returns an error if the line fails to parse or serialization fails.
pub fn log(args: &ParseArgs, format: OutputFormat) -> Result<String, TasklineError> {
    let entry = match args.date {
        Some(day) => parser::parse_log_at(&args.text, day),
        None => parser::parse_log(&args.text),
    }?;

    if args.canonical {
        return Ok(parser::format_log(&entry));
    }
    output::format_log(&entry, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args(text: &str, canonical: bool) -> ParseArgs {
        ParseArgs {
            text: text.to_string(),
            canonical,
            date: NaiveDate::from_ymd_opt(2025, 1, 6),
        }
    }

    #[test]
    fn test_todo_canonical_output() {
        let output = todo(&args("  buy   milk @home", true), OutputFormat::Pretty).unwrap();
        assert_eq!(output, "buy milk @home");
    }

    #[test]
    fn test_todo_json_output() {
        let output = todo(&args("buy milk", false), OutputFormat::Json).unwrap();
        assert!(output.contains("\"title\": \"buy milk\""));
    }

    #[test]
    fn test_log_canonical_output() {
        let output = log(&args("12:45 @end", true), OutputFormat::Pretty).unwrap();
        assert_eq!(output, "12:45 @end");
    }

    #[test]
    fn test_parse_failure_propagates() {
        let result = todo(&args("after lunch tidy up", false), OutputFormat::Pretty);
        assert!(result.is_err());
    }
}
