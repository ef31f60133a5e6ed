//! Recurrence prefixes.
//!
//! A todo line may open with a recurrence phrase instead of a date:
//!
//! - Shorthand: `daily`, `weekly`, `monthly`, `weekdays`
//! - Weekday sets: `Mon,Wed,Fri` (comma-joined, no spaces)
//! - Calendar rules: `every monday`, `every 2w`
//! - Completion rules: `after 2w` (anchored to when the prior run finishes)
//!
//! Any phrase may carry a trailing time of day: `daily 08:00`.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use serde::{Deserialize, Serialize};

use crate::core::date::{weekday_index, WEEKDAY_ABBREVS, WEEKDAY_NAMES};
use crate::core::timewindow::parse_clock;
use crate::error::TasklineError;

static INTERVAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)([dwm])$").unwrap_or_else(|e| panic!("Invalid interval regex: {e}"))
});

static TIME_OF_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}:\d{2}$").unwrap_or_else(|e| panic!("Invalid time-of-day regex: {e}"))
});

/// How the next occurrence of a recurring task is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceMode {
    /// Recurs on fixed calendar dates regardless of completion.
    Calendar,
    /// Recurs a fixed interval after the prior occurrence completes.
    Completion,
}

/// The recurrence family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
    Interval,
}

/// Unit of an interval rule such as `every 2w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Days,
    Weeks,
    Months,
}

impl IntervalUnit {
    const fn suffix(self) -> char {
        match self {
            Self::Days => 'd',
            Self::Weeks => 'w',
            Self::Months => 'm',
        }
    }
}

/// A parsed recurrence rule.
///
/// `anchor` is set only for calendar-mode rules. `interval` and `unit`
/// are set only for interval rules. `day_of_week` (a single `every
/// <weekday>` day) and `days_of_week` (an explicit ascending set) are
/// mutually exclusive; indices run Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub mode: RecurrenceMode,
    pub kind: RecurrenceKind,
    #[serde(default)]
    pub interval: Option<u32>,
    #[serde(default)]
    pub unit: Option<IntervalUnit>,
    #[serde(default)]
    pub day_of_week: Option<u8>,
    #[serde(default)]
    pub days_of_week: Option<Vec<u8>>,
    #[serde(default)]
    pub time_of_day: Option<NaiveTime>,
    #[serde(default)]
    pub anchor: Option<NaiveDate>,
}

impl Recurrence {
    fn calendar(kind: RecurrenceKind, anchor: NaiveDate) -> Self {
        Self {
            mode: RecurrenceMode::Calendar,
            kind,
            interval: None,
            unit: None,
            day_of_week: None,
            days_of_week: None,
            time_of_day: None,
            anchor: Some(anchor),
        }
    }
}

/// Probe the leading words of a title for a recurrence phrase.
///
/// Returns the parsed rule and the number of words consumed, or
/// `Ok(None)` when the first word opens no recurrence phrase (the caller
/// may then try a date word or keep the text as title). Once a keyword
/// such as `every` or `after` has matched, a malformed continuation is
/// an error rather than title text.
///
/// # Errors
///
/// Returns `TasklineError::Parse` for a recognized keyword with an
/// invalid continuation, a non-positive interval count, or an
/// out-of-range trailing time of day.
pub fn parse_recurrence(
    words: &[&str],
    today: NaiveDate,
) -> Result<Option<(Recurrence, usize)>, TasklineError> {
    let Some(first) = words.first() else {
        return Ok(None);
    };
    let lower = first.to_lowercase();

    let base = match lower.as_str() {
        "daily" => Some((Recurrence::calendar(RecurrenceKind::Daily, today), 1)),
        "weekly" => Some((Recurrence::calendar(RecurrenceKind::Weekly, today), 1)),
        "monthly" => Some((Recurrence::calendar(RecurrenceKind::Monthly, today), 1)),
        "weekdays" => {
            let mut rec = Recurrence::calendar(RecurrenceKind::Weekly, today);
            rec.days_of_week = Some(vec![1, 2, 3, 4, 5]);
            Some((rec, 1))
        },
        "every" => Some(parse_every(words, today)?),
        "after" => Some(parse_after(words)?),
        _ => parse_weekday_set(&lower, today).map(|rec| (rec, 1)),
    };

    match base {
        Some((rec, consumed)) => attach_time_of_day(rec, consumed, words).map(Some),
        None => Ok(None),
    }
}

fn parse_every(words: &[&str], today: NaiveDate) -> Result<(Recurrence, usize), TasklineError> {
    let Some(second) = words.get(1) else {
        return Err(TasklineError::Parse(
            "expected weekday or interval after 'every'".to_string(),
        ));
    };
    let lower = second.to_lowercase();

    if let Some(day) = weekday_index(&lower) {
        let mut rec = Recurrence::calendar(RecurrenceKind::Weekly, today);
        rec.day_of_week = Some(day);
        return Ok((rec, 2));
    }

    if let Some((count, unit)) = parse_interval(&lower)? {
        let mut rec = Recurrence::calendar(RecurrenceKind::Interval, today);
        rec.interval = Some(count);
        rec.unit = Some(unit);
        return Ok((rec, 2));
    }

    Err(TasklineError::Parse(format!(
        "invalid recurrence pattern: every {second}"
    )))
}

fn parse_after(words: &[&str]) -> Result<(Recurrence, usize), TasklineError> {
    let Some(second) = words.get(1) else {
        return Err(TasklineError::Parse(
            "expected interval after 'after'".to_string(),
        ));
    };
    let lower = second.to_lowercase();

    match parse_interval(&lower)? {
        Some((count, unit)) => {
            let rec = Recurrence {
                mode: RecurrenceMode::Completion,
                kind: RecurrenceKind::Interval,
                interval: Some(count),
                unit: Some(unit),
                day_of_week: None,
                days_of_week: None,
                time_of_day: None,
                anchor: None,
            };
            Ok((rec, 2))
        },
        None => Err(TasklineError::Parse(format!(
            "invalid recurrence pattern: after {second}"
        ))),
    }
}

/// Parse `<N>(d|w|m)`. A word of another shape returns `None`; a zero
/// count is an error because the interval shape has already committed
/// the word.
fn parse_interval(word: &str) -> Result<Option<(u32, IntervalUnit)>, TasklineError> {
    let Some(caps) = INTERVAL_PATTERN.captures(word) else {
        return Ok(None);
    };

    let count: u32 = caps
        .get(1)
        .map_or("", |m| m.as_str())
        .parse()
        .map_err(|_| TasklineError::Parse(format!("invalid recurrence interval: {word}")))?;
    if count == 0 {
        return Err(TasklineError::Parse(format!(
            "invalid recurrence interval: {word}"
        )));
    }

    let unit = match caps.get(2).map_or("", |m| m.as_str()) {
        "d" => IntervalUnit::Days,
        "w" => IntervalUnit::Weeks,
        _ => IntervalUnit::Months,
    };

    Ok(Some((count, unit)))
}

/// Parse a comma-joined weekday list such as `Mon,Wed,Fri`. A bare
/// weekday word is left for the date grammar, so at least one comma is
/// required; any non-weekday part disqualifies the whole word.
fn parse_weekday_set(word: &str, today: NaiveDate) -> Option<Recurrence> {
    if !word.contains(',') {
        return None;
    }

    let mut days = Vec::new();
    for part in word.split(',') {
        days.push(weekday_index(part)?);
    }
    days.sort_unstable();
    days.dedup();

    let mut rec = Recurrence::calendar(RecurrenceKind::Weekly, today);
    rec.days_of_week = Some(days);
    Some(rec)
}

fn attach_time_of_day(
    mut rec: Recurrence,
    consumed: usize,
    words: &[&str],
) -> Result<(Recurrence, usize), TasklineError> {
    if let Some(next) = words.get(consumed) {
        if TIME_OF_DAY_PATTERN.is_match(next) {
            rec.time_of_day = Some(parse_clock(next)?);
            return Ok((rec, consumed + 1));
        }
    }
    Ok((rec, consumed))
}

/// Render a recurrence rule in its canonical spelling.
#[must_use]
pub fn format_recurrence(rec: &Recurrence) -> String {
    let mut out = match rec.kind {
        RecurrenceKind::Daily => "daily".to_string(),
        RecurrenceKind::Monthly => "monthly".to_string(),
        RecurrenceKind::Weekly => format_weekly(rec),
        RecurrenceKind::Interval => {
            let count = rec.interval.unwrap_or(1);
            let unit = rec.unit.unwrap_or(IntervalUnit::Days).suffix();
            match rec.mode {
                RecurrenceMode::Calendar => format!("every {count}{unit}"),
                RecurrenceMode::Completion => format!("after {count}{unit}"),
            }
        },
    };

    if let Some(time) = rec.time_of_day {
        out.push(' ');
        out.push_str(&time.format("%H:%M").to_string());
    }
    out
}

fn format_weekly(rec: &Recurrence) -> String {
    if let Some(days) = &rec.days_of_week {
        if days == &[1, 2, 3, 4, 5] {
            return "weekdays".to_string();
        }
        let labels: Vec<&str> = days
            .iter()
            .map(|d| WEEKDAY_ABBREVS[usize::from(*d) % 7])
            .collect();
        return labels.join(",");
    }

    if let Some(day) = rec.day_of_week {
        return format!("every {}", WEEKDAY_NAMES[usize::from(day) % 7]);
    }

    "weekly".to_string()
}
