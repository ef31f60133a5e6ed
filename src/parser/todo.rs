//! Task-manager records.
//!
//! A todo line reads `[date | recurrence] title [markers...]`. The
//! extractor folds scanner tokens into a [`TodoTask`] and probes the
//! first description token for a leading recurrence phrase or date word.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    format_date, format_duration, format_recurrence, parse_date_word, parse_duration,
    parse_recurrence, parse_time_window, Recurrence, TimeWindow,
};
use crate::error::TasklineError;
use crate::parser::token::{Token, TokenKind};

/// A parsed task-manager line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTask {
    /// The task title with all metadata stripped.
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
    /// Leading literal date. Mutually exclusive with `recurrence`.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// `$bucket` label. First occurrence wins.
    #[serde(default)]
    pub bucket: Option<String>,
    /// Leading recurrence rule. Mutually exclusive with `date`.
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    /// `window:` daily scheduling window. First occurrence wins.
    #[serde(default)]
    pub window: Option<TimeWindow>,
    /// `after:` dependency ids in the order written.
    #[serde(default)]
    pub dependencies: Option<Vec<u32>>,
    /// The trimmed input line as given.
    #[serde(default)]
    pub raw: String,
}

/// Fold scanner tokens into a todo record.
pub(crate) fn extract(
    tokens: &[Token],
    raw: &str,
    today: NaiveDate,
) -> Result<TodoTask, TasklineError> {
    let mut task = TodoTask {
        title: String::new(),
        project: None,
        tags: Vec::new(),
        duration: None,
        date: None,
        bucket: None,
        recurrence: None,
        window: None,
        dependencies: None,
        raw: raw.to_string(),
    };

    let mut title_parts: Vec<String> = Vec::new();
    let mut first_description = true;

    for token in tokens {
        match token.kind {
            TokenKind::Description => {
                let text = if first_description {
                    first_description = false;
                    strip_leading_schedule(&token.value, &mut task, today)?
                } else {
                    token.value.clone()
                };
                if !text.is_empty() {
                    title_parts.push(text);
                }
            },
            TokenKind::Project => {
                if task.project.is_none() {
                    task.project = Some(token.value.clone());
                }
            },
            TokenKind::Tag => task.tags.push(token.value.clone()),
            TokenKind::Duration => {
                if task.duration.is_none() {
                    task.duration = Some(parse_duration(&token.value).ok_or_else(|| {
                        TasklineError::Parse(format!("invalid duration: {}", token.value))
                    })?);
                }
            },
            TokenKind::Bucket => {
                if task.bucket.is_none() {
                    task.bucket = Some(token.value.clone());
                }
            },
            TokenKind::Window => {
                if task.window.is_none() {
                    task.window = Some(parse_time_window(&token.value)?);
                }
            },
            TokenKind::Dependencies => {
                if task.dependencies.is_none() {
                    task.dependencies = Some(parse_dependency_ids(&token.value)?);
                }
            },
            _ => {},
        }
    }

    task.title = title_parts.join(" ");
    if task.title.is_empty() {
        return Err(TasklineError::Parse("missing title".to_string()));
    }

    Ok(task)
}

/// Probe the first description token for a leading recurrence phrase or
/// a single leading date word, returning the words left for the title.
fn strip_leading_schedule(
    text: &str,
    task: &mut TodoTask,
    today: NaiveDate,
) -> Result<String, TasklineError> {
    let words: Vec<&str> = text.split(' ').collect();

    if let Some((recurrence, consumed)) = parse_recurrence(&words, today)? {
        task.recurrence = Some(recurrence);
        return Ok(words[consumed..].join(" "));
    }

    if let Some(first) = words.first() {
        if let Some(date) = parse_date_word(first, today)? {
            task.date = Some(date);
            return Ok(words[1..].join(" "));
        }
    }

    Ok(text.to_string())
}

/// Parse the comma list of an `after:` marker. Ids are positive.
fn parse_dependency_ids(value: &str) -> Result<Vec<u32>, TasklineError> {
    let mut ids = Vec::new();
    for part in value.split(',') {
        let id: u32 = part
            .parse()
            .map_err(|_| TasklineError::Parse(format!("invalid dependency id: {part}")))?;
        if id == 0 {
            return Err(TasklineError::Parse(format!(
                "invalid dependency id: {part}"
            )));
        }
        ids.push(id);
    }
    Ok(ids)
}

/// Render a todo record as its canonical line.
///
/// Field order is fixed: schedule, title, project, tags, duration,
/// bucket, window, dependencies. Parsing the result reproduces the
/// record (with `raw` updated to the canonical line).
#[must_use]
pub fn format_todo(task: &TodoTask) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(recurrence) = &task.recurrence {
        parts.push(format_recurrence(recurrence));
    } else if let Some(date) = task.date {
        parts.push(format_date(date));
    }

    if !task.title.is_empty() {
        parts.push(task.title.clone());
    }
    if let Some(project) = &task.project {
        parts.push(format!("@{project}"));
    }
    for tag in &task.tags {
        parts.push(format!("+{tag}"));
    }
    if let Some(minutes) = task.duration {
        parts.push(format!("~{}", format_duration(minutes)));
    }
    if let Some(bucket) = &task.bucket {
        parts.push(format!("${bucket}"));
    }
    if let Some(window) = &task.window {
        parts.push(format!("window:{window}"));
    }
    if let Some(ids) = &task.dependencies {
        let list: Vec<String> = ids.iter().map(ToString::to_string).collect();
        parts.push(format!("after:{}", list.join(",")));
    }

    parts.join(" ")
}
