//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell,
//! and elvish.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TasklineError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TasklineError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate_to(&mut buf, shell, &mut cmd)?;
    String::from_utf8(buf).map_err(|e| TasklineError::Shell(format!("UTF-8 error: {e}")))
}

fn generate_to<W: Write>(
    buf: &mut W,
    shell: Shell,
    cmd: &mut clap::Command,
) -> Result<(), TasklineError> {
    clap_complete::generate(shell, cmd, "taskline", buf);
    Ok(())
}
