//! Time-tracker records.
//!
//! A log line reads `[timestamp] [@marker] title [markers...]`. Unlike
//! a todo line the title may be empty: a bare `@end` or a lone
//! timestamp is a complete entry.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::{format_duration, parse_clock, parse_duration};
use crate::error::TasklineError;
use crate::parser::token::{Token, TokenKind};

/// Lifecycle marker opening a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// `@end` closes the running entry.
    End,
    /// `@pause` suspends the running entry.
    Pause,
    /// `@abandon` discards the running entry.
    Abandon,
}

impl std::fmt::Display for EntryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::End => "end",
            Self::Pause => "pause",
            Self::Abandon => "abandon",
        };
        write!(f, "{label}")
    }
}

/// `->` suffix describing how the entry finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateSuffix {
    Paused,
    Completed,
    Abandoned,
}

impl std::fmt::Display for StateSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        };
        write!(f, "{label}")
    }
}

/// A parsed time-tracker line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The entry title with all metadata stripped. Empty for pure
    /// marker lines.
    pub title: String,
    /// `@project` reference. First occurrence wins.
    #[serde(default)]
    pub project: Option<String>,
    /// `+tag` labels in the order written.
    #[serde(default)]
    pub tags: Vec<String>,
    /// `~` estimated duration in minutes. First occurrence wins.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Leading timestamp. A bare time of day lands on the reference
    /// date.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    /// Leading lifecycle marker.
    #[serde(default)]
    pub state: Option<EntryState>,
    /// Leading resume target: `resume`, `prev`, or an entry id.
    #[serde(default)]
    pub resume: Option<String>,
    /// `(...)` measured duration in minutes.
    #[serde(default)]
    pub explicit_duration: Option<u32>,
    /// `^1` through `^9` priority.
    #[serde(default)]
    pub priority: Option<u8>,
    /// `->` suffix state.
    #[serde(default)]
    pub state_suffix: Option<StateSuffix>,
    /// `# ` trailing remark.
    #[serde(default)]
    pub remark: Option<String>,
    /// The trimmed input line as given.
    #[serde(default)]
    pub raw: String,
}

/// Fold scanner tokens into a log record.
pub(crate) fn extract(
    tokens: &[Token],
    raw: &str,
    today: NaiveDate,
) -> Result<LogEntry, TasklineError> {
    let mut entry = LogEntry {
        title: String::new(),
        project: None,
        tags: Vec::new(),
        duration: None,
        timestamp: None,
        state: None,
        resume: None,
        explicit_duration: None,
        priority: None,
        state_suffix: None,
        remark: None,
        raw: raw.to_string(),
    };

    let mut title_parts: Vec<String> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Description => title_parts.push(token.value.clone()),
            TokenKind::Timestamp => {
                entry.timestamp = Some(parse_timestamp(&token.value, today)?);
            },
            TokenKind::End => entry.state = Some(EntryState::End),
            TokenKind::Pause => entry.state = Some(EntryState::Pause),
            TokenKind::Abandon => entry.state = Some(EntryState::Abandon),
            TokenKind::Resume => entry.resume = Some(token.value.clone()),
            TokenKind::Project => {
                if entry.project.is_none() {
                    entry.project = Some(token.value.clone());
                }
            },
            TokenKind::Tag => entry.tags.push(token.value.clone()),
            TokenKind::Duration => {
                if entry.duration.is_none() {
                    entry.duration = Some(parse_duration(&token.value).ok_or_else(|| {
                        TasklineError::Parse(format!("invalid duration: {}", token.value))
                    })?);
                }
            },
            TokenKind::ExplicitDuration => {
                if entry.explicit_duration.is_none() {
                    entry.explicit_duration =
                        Some(parse_duration(&token.value).ok_or_else(|| {
                            TasklineError::Parse(format!("invalid duration: {}", token.value))
                        })?);
                }
            },
            TokenKind::Priority => {
                if entry.priority.is_none() {
                    entry.priority = token.value.parse().ok();
                }
            },
            TokenKind::StateSuffix => {
                if entry.state_suffix.is_none() {
                    entry.state_suffix = match token.value.as_str() {
                        "paused" => Some(StateSuffix::Paused),
                        "completed" => Some(StateSuffix::Completed),
                        _ => Some(StateSuffix::Abandoned),
                    };
                }
            },
            TokenKind::Remark => {
                if entry.remark.is_none() {
                    entry.remark = Some(token.value.clone());
                }
            },
            _ => {},
        }
    }

    entry.title = title_parts.join(" ");
    Ok(entry)
}

/// Parse a timestamp token: a bare `HH:MM[:SS]` lands on the reference
/// date, a `YYYY-MM-DD` prefix pins the date explicitly.
fn parse_timestamp(value: &str, today: NaiveDate) -> Result<NaiveDateTime, TasklineError> {
    let (date, clock) = match value.split_once(' ') {
        Some((date_str, clock_str)) => {
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map_err(|_| TasklineError::Parse(format!("invalid date: {date_str}")))?;
            (date, clock_str)
        },
        None => (today, value),
    };

    Ok(NaiveDateTime::new(date, parse_time_of_day(clock)?))
}

/// Parse `HH:MM[:SS]` with range validation on every component.
fn parse_time_of_day(value: &str) -> Result<NaiveTime, TasklineError> {
    match value.match_indices(':').nth(1) {
        Some((idx, _)) => {
            let seconds: u32 = value[idx + 1..]
                .parse()
                .map_err(|_| TasklineError::Parse(format!("invalid time: {value}")))?;
            let time = parse_clock(&value[..idx])?;
            time.with_second(seconds)
                .ok_or_else(|| TasklineError::Parse(format!("invalid time: {value}")))
        },
        None => parse_clock(value),
    }
}

/// Render a log record as its canonical line.
///
/// Field order is fixed: timestamp, marker, title, project, tags,
/// estimated duration, measured duration, priority, suffix, remark.
/// Timestamps re-emit as time of day only, so a date-pinned entry
/// round-trips to the same-day spelling.
#[must_use]
pub fn format_log(entry: &LogEntry) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(ts) = entry.timestamp {
        parts.push(format_timestamp(ts));
    }
    if let Some(state) = entry.state {
        parts.push(format!("@{state}"));
    } else if let Some(resume) = &entry.resume {
        parts.push(format!("@{resume}"));
    }
    if !entry.title.is_empty() {
        parts.push(entry.title.clone());
    }
    if let Some(project) = &entry.project {
        parts.push(format!("@{project}"));
    }
    for tag in &entry.tags {
        parts.push(format!("+{tag}"));
    }
    if let Some(minutes) = entry.duration {
        parts.push(format!("~{}", format_duration(minutes)));
    }
    if let Some(minutes) = entry.explicit_duration {
        parts.push(format!("({})", format_duration(minutes)));
    }
    if let Some(priority) = entry.priority {
        parts.push(format!("^{priority}"));
    }
    if let Some(suffix) = entry.state_suffix {
        parts.push(format!("->{suffix}"));
    }
    if let Some(remark) = &entry.remark {
        parts.push(format!("# {remark}"));
    }

    parts.join(" ")
}

fn format_timestamp(ts: NaiveDateTime) -> String {
    if ts.second() == 0 {
        ts.format("%H:%M").to_string()
    } else {
        ts.format("%H:%M:%S").to_string()
    }
}
