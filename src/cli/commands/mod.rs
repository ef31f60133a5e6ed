//! Command implementations for taskline.
//!
//! This module contains the implementation of all CLI commands.

mod parse;
mod shell;

pub use parse::{log, todo};
pub use shell::completions;
