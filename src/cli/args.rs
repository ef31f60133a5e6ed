use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "Parse one-line todo tasks and time-log entries")]
#[command(long_about = "taskline - a one-line grammar for tasks and time logs

Turns a single line of text into a structured record and back again.
Todo lines describe tasks for a task manager; log lines describe
entries for a time tracker. Formatting a parsed record produces the
canonical spelling of the same line.

QUICK START:
  taskline todo \"tomorrow submit report @work +writing ~1h30m\"
  taskline todo \"every monday review inbox $ops\"
  taskline log \"09:15 fix login bug @backend +bugfix\"
  taskline log \"12:45 @end\"

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting
  --canonical        Just the canonical one-line spelling

For more information on a specific command, run:
  taskline <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for parsed records
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for parsed records.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a task-manager line
    ///
    /// Reads one line of todo text, extracts its metadata markers, and
    /// prints the structured record. The title is whatever text reaches
    /// no marker rule; malformed marker bodies stay in the title rather
    /// than failing the parse.
    ///
    /// # Examples
    ///
    ///   taskline todo "buy milk"
    ///   taskline todo "tomorrow submit report @work +writing ~1h30m"
    ///   taskline todo "weekdays standup @team window:09:00-10:00"
    ///   taskline todo "pay rent $bills after:3,7" --canonical
    ///
    /// # Supported Patterns
    ///
    ///   Dates:        2025-03-01, today, tomorrow, friday (line start)
    ///   Recurrence:   daily, weekly, monthly, weekdays, Mon,Wed,Fri,
    ///                 every monday, every 2w, after 2w (line start)
    ///   Project:      @name
    ///   Tags:         +tag1 +tag2
    ///   Duration:     ~2h, ~30m, ~1h30m
    ///   Bucket:       $name
    ///   Window:       window:09:00-17:00
    ///   Dependencies: after:1,2,3
    #[command(alias = "t")]
    Todo(ParseArgs),

    /// Parse a time-tracker line
    ///
    /// Reads one line of log text and prints the structured record. A
    /// leading clock time stamps the entry on the reference date; a
    /// leading `@` marker drives the tracker lifecycle instead of
    /// starting a new entry.
    ///
    /// # Examples
    ///
    ///   taskline log "09:15 fix login bug @backend +bugfix"
    ///   taskline log "2025-01-10 09:15:30 standup @team"
    ///   taskline log "12:45 @end"
    ///   taskline log "@resume" --output json
    ///
    /// # Supported Patterns
    ///
    ///   Timestamp:  09:15, 09:15:30, 2025-01-10 09:15 (line start)
    ///   Lifecycle:  @end, @pause, @abandon, @resume, @prev, @42
    ///   Project:    @name
    ///   Tags:       +tag1 +tag2
    ///   Durations:  ~1h estimated, (45m) measured
    ///   Priority:   ^1 through ^9
    ///   Suffix:     ->paused, ->completed, ->abandoned
    ///   Remark:     # free text to end of line
    #[command(alias = "l")]
    Log(ParseArgs),

    /// Generate shell completions
    ///
    /// Generates completion scripts for bash, zsh, fish, PowerShell,
    /// or elvish.
    ///
    /// # Examples
    ///
    ///   taskline completions bash > /etc/bash_completion.d/taskline
    ///   taskline completions zsh > ~/.zfunc/_taskline
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments shared by the todo and log parse commands.
#[derive(Args)]
pub struct ParseArgs {
    /// The line to parse
    pub text: String,

    /// Print only the canonical formatted line
    #[arg(long)]
    pub canonical: bool,

    /// Reference date for relative words (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_todo_command() {
        let cli = Cli::try_parse_from(["taskline", "todo", "buy milk tomorrow"]).unwrap();
        if let Commands::Todo(args) = cli.command {
            assert_eq!(args.text, "buy milk tomorrow");
            assert!(!args.canonical);
        } else {
            panic!("Expected Todo command");
        }
    }

    #[test]
    fn test_cli_todo_alias() {
        let cli = Cli::try_parse_from(["taskline", "t", "buy milk"]).unwrap();
        assert!(matches!(cli.command, Commands::Todo(_)));
    }

    #[test]
    fn test_cli_log_command() {
        let cli = Cli::try_parse_from(["taskline", "log", "09:15 standup"]).unwrap();
        if let Commands::Log(args) = cli.command {
            assert_eq!(args.text, "09:15 standup");
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn test_cli_log_alias() {
        let cli = Cli::try_parse_from(["taskline", "l", "@end"]).unwrap();
        assert!(matches!(cli.command, Commands::Log(_)));
    }

    #[test]
    fn test_cli_output_format_defaults_to_config() {
        let cli = Cli::try_parse_from(["taskline", "todo", "x"]).unwrap();
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["taskline", "--output", "json", "todo", "x"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short() {
        let cli = Cli::try_parse_from(["taskline", "todo", "x", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_canonical_flag() {
        let cli = Cli::try_parse_from(["taskline", "todo", "x", "--canonical"]).unwrap();
        if let Commands::Todo(args) = cli.command {
            assert!(args.canonical);
        } else {
            panic!("Expected Todo command");
        }
    }

    #[test]
    fn test_cli_reference_date() {
        let cli =
            Cli::try_parse_from(["taskline", "todo", "x", "--date", "2025-01-06"]).unwrap();
        if let Commands::Todo(args) = cli.command {
            assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 1, 6));
        } else {
            panic!("Expected Todo command");
        }
    }

    #[test]
    fn test_cli_invalid_reference_date_is_rejected() {
        let result = Cli::try_parse_from(["taskline", "todo", "x", "--date", "not-a-date"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_completions_command() {
        let cli = Cli::try_parse_from(["taskline", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Bash }
        ));
    }

    #[test]
    fn test_cli_missing_text_is_rejected() {
        assert!(Cli::try_parse_from(["taskline", "todo"]).is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
