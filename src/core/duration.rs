//! Duration shorthand parsing and formatting.
//!
//! Durations are written as `2h`, `30m`, or `1h30m` and carried through
//! records as whole minutes. Decimals and signs are not part of the
//! shorthand, so `2.5h` and `-30m` are not durations.

use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?$")
        .unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

/// Parse a duration shorthand into total minutes.
///
/// Accepts `<N>h`, `<N>m`, and `<N>h<N>m`. Returns `None` when the input
/// is not a duration shorthand or the total would overflow, so callers
/// can decide between falling back to plain text and reporting an error.
#[must_use]
pub fn parse_duration(input: &str) -> Option<u32> {
    if input.is_empty() {
        return None;
    }

    let caps = DURATION_PATTERN.captures(input)?;
    let hours: u32 = match caps.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    hours.checked_mul(60)?.checked_add(minutes)
}

/// Render minutes in canonical duration shorthand.
///
/// Hours are split out of the total, zero components are omitted, and a
/// zero total renders as `0m`. Non-canonical spellings normalize through
/// a parse/format cycle: `90m` parses to 90 minutes and renders `1h30m`.
#[must_use]
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, 0) => "0m".to_string(),
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}m"),
    }
}
