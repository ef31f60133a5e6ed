//! Human-readable output formatting for taskline.

use colored::Colorize;

use crate::core::{format_date, format_duration, format_recurrence};
use crate::parser::{LogEntry, TodoTask};

/// Format a todo record as indented, labeled lines.
#[must_use]
pub fn format_todo_pretty(task: &TodoTask) -> String {
    let mut output = format!("{}\n", task.title.bold());

    if let Some(recurrence) = &task.recurrence {
        output.push_str(&format!(
            "  {}: {}\n",
            "Repeats".dimmed(),
            format_recurrence(recurrence)
        ));
    }
    if let Some(date) = task.date {
        output.push_str(&format!("  {}: {}\n", "Date".dimmed(), format_date(date)));
    }
    if let Some(project) = &task.project {
        output.push_str(&format!("  {}: {}\n", "Project".dimmed(), project));
    }
    if !task.tags.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Tags".dimmed(),
            task.tags.join(", ")
        ));
    }
    if let Some(minutes) = task.duration {
        output.push_str(&format!(
            "  {}: {}\n",
            "Estimate".dimmed(),
            format_duration(minutes)
        ));
    }
    if let Some(bucket) = &task.bucket {
        output.push_str(&format!("  {}: {}\n", "Bucket".dimmed(), bucket));
    }
    if let Some(window) = &task.window {
        output.push_str(&format!("  {}: {}\n", "Window".dimmed(), window));
    }
    if let Some(ids) = &task.dependencies {
        let list: Vec<String> = ids.iter().map(ToString::to_string).collect();
        output.push_str(&format!("  {}: {}\n", "After".dimmed(), list.join(", ")));
    }

    output
}

/// Format a log record as indented, labeled lines. Marker-only entries
/// use the marker as their headline.
#[must_use]
pub fn format_log_pretty(entry: &LogEntry) -> String {
    let headline = if entry.title.is_empty() {
        match (entry.state, &entry.resume) {
            (Some(state), _) => format!("@{state}"),
            (None, Some(resume)) => format!("@{resume}"),
            (None, None) => String::new(),
        }
    } else {
        entry.title.clone()
    };

    let mut output = format!("{}\n", headline.bold());

    if let Some(ts) = entry.timestamp {
        output.push_str(&format!(
            "  {}: {}\n",
            "At".dimmed(),
            ts.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    if let Some(state) = entry.state {
        output.push_str(&format!("  {}: {state}\n", "Marker".dimmed()));
    }
    if let Some(resume) = &entry.resume {
        output.push_str(&format!("  {}: {resume}\n", "Resume".dimmed()));
    }
    if let Some(project) = &entry.project {
        output.push_str(&format!("  {}: {project}\n", "Project".dimmed()));
    }
    if !entry.tags.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Tags".dimmed(),
            entry.tags.join(", ")
        ));
    }
    if let Some(minutes) = entry.duration {
        output.push_str(&format!(
            "  {}: {}\n",
            "Estimate".dimmed(),
            format_duration(minutes)
        ));
    }
    if let Some(minutes) = entry.explicit_duration {
        output.push_str(&format!(
            "  {}: {}\n",
            "Measured".dimmed(),
            format_duration(minutes)
        ));
    }
    if let Some(priority) = entry.priority {
        output.push_str(&format!("  {}: {priority}\n", "Priority".dimmed()));
    }
    if let Some(suffix) = entry.state_suffix {
        output.push_str(&format!("  {}: {suffix}\n", "Finished".dimmed()));
    }
    if let Some(remark) = &entry.remark {
        output.push_str(&format!("  {}: {remark}\n", "Remark".dimmed()));
    }

    output
}
