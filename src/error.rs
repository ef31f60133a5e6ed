//! Error types for taskline.

use thiserror::Error;

/// Errors that can occur during parsing, configuration, or output.
#[derive(Debug, Error)]
pub enum TasklineError {
    /// A line could not be parsed. The message names the offending
    /// fragment; soft failures never surface here because they fall back
    /// to plain title text instead.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Shell completion generation failed.
    #[error("Shell error: {0}")]
    Shell(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
