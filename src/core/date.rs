//! Calendar date words.
//!
//! A todo line may open with a single date word: an ISO date, `today`,
//! `tomorrow`, or a weekday name meaning the next occurrence of that
//! weekday. All date words are case-insensitive.

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TasklineError;

static ISO_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

/// Full weekday names indexed Sunday = 0 through Saturday = 6.
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Three-letter weekday labels indexed Sunday = 0 through Saturday = 6.
pub(crate) const WEEKDAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse a single date word against a reference date.
///
/// Recognizes ISO `YYYY-MM-DD`, `today`, `tomorrow`, and weekday names
/// (full or abbreviated). A weekday resolves to the next strictly future
/// occurrence: naming the reference date's own weekday lands seven days
/// out, never on the reference date itself.
///
/// Unrecognized words return `Ok(None)` so the caller can keep them as
/// title text. An ISO-shaped word with an impossible calendar date is an
/// error rather than title text.
///
/// # Errors
///
/// Returns `TasklineError::Parse` for an ISO-shaped word that is not a
/// real calendar date, such as `2025-13-01`.
pub fn parse_date_word(word: &str, today: NaiveDate) -> Result<Option<NaiveDate>, TasklineError> {
    let lower = word.to_lowercase();

    if ISO_DATE_PATTERN.is_match(&lower) {
        let date = NaiveDate::parse_from_str(&lower, "%Y-%m-%d")
            .map_err(|_| TasklineError::Parse(format!("invalid date: {word}")))?;
        return Ok(Some(date));
    }

    match lower.as_str() {
        "today" => return Ok(Some(today)),
        "tomorrow" => return Ok(Some(today + Duration::days(1))),
        _ => {},
    }

    if let Some(day) = weekday_index(&lower) {
        return Ok(Some(next_weekday(today, day)));
    }

    Ok(None)
}

/// Render a date in canonical ISO form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Weekday index for a lowercase (possibly abbreviated) weekday name,
/// Sunday = 0 through Saturday = 6.
pub(crate) fn weekday_index(word: &str) -> Option<u8> {
    match word {
        "sunday" | "sun" => Some(0),
        "monday" | "mon" => Some(1),
        "tuesday" | "tues" | "tue" => Some(2),
        "wednesday" | "wed" => Some(3),
        "thursday" | "thurs" | "thur" | "thu" => Some(4),
        "friday" | "fri" => Some(5),
        "saturday" | "sat" => Some(6),
        _ => None,
    }
}

/// The next strictly future date falling on `target` (Sunday = 0).
pub(crate) fn next_weekday(today: NaiveDate, target: u8) -> NaiveDate {
    let current = i64::from(today.weekday().num_days_from_sunday());
    let mut days_ahead = (i64::from(target) - current).rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }
    today + Duration::days(days_ahead)
}
