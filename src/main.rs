use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taskline::cli::args::{Cli, Commands};
use taskline::cli::commands;
use taskline::config::Config;
use taskline::error::TasklineError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TasklineError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Todo(args) => commands::todo(&args, format)?,
        Commands::Log(args) => commands::log(&args, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
