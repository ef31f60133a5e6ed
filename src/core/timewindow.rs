//! Daily time windows.
//!
//! A window is written `HH:MM-HH:MM` and bounds the hours of day a task
//! may be scheduled into. Windows may wrap through midnight: `18:00-08:00`
//! covers evening and early morning.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TasklineError;

/// A daily window of wall-clock time.
///
/// When `end` is at or before `start` the window wraps through midnight;
/// an identical pair denotes the full 24-hour cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive start of the window.
    pub start: NaiveTime,
    /// Exclusive end of the window.
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Whether this window wraps through midnight.
    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        minute_of_day(self.end) <= minute_of_day(self.start)
    }

    /// Whether `time` falls inside the window. The start is inclusive and
    /// the end exclusive; a wrapping window contains times at or after its
    /// start or before its end.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        let t = minute_of_day(time);
        let start = minute_of_day(self.start);
        let end = minute_of_day(self.end);

        if self.crosses_midnight() {
            t >= start || t < end
        } else {
            t >= start && t < end
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse a clock time (`H:MM` or `HH:MM`) with range validation.
///
/// # Errors
///
/// Returns `TasklineError::Parse` for a malformed time or an
/// out-of-range hour or minute.
pub fn parse_clock(input: &str) -> Result<NaiveTime, TasklineError> {
    let invalid = || TasklineError::Parse(format!("invalid time: {input}"));

    let (hour_str, minute_str) = input.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_str.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Parse a `HH:MM-HH:MM` window body into a validated window.
///
/// # Errors
///
/// Returns `TasklineError::Parse` when either half is malformed or out
/// of range.
pub fn parse_time_window(input: &str) -> Result<TimeWindow, TasklineError> {
    let (start_str, end_str) = input
        .split_once('-')
        .ok_or_else(|| TasklineError::Parse(format!("invalid time window: {input}")))?;

    Ok(TimeWindow {
        start: parse_clock(start_str)?,
        end: parse_clock(end_str)?,
    })
}
