//! Core grammars shared by both line modes.
//!
//! Each sub-grammar is a pair of free functions over plain values:
//! durations in minutes, calendar dates, recurrence rules, and daily
//! time windows. Parsing is strict about ranges and shapes; formatting
//! produces the one canonical spelling of each value.

mod date;
mod duration;
mod recurrence;
mod timewindow;

pub use date::{format_date, parse_date_word};
pub use duration::{format_duration, parse_duration};
pub use recurrence::{
    format_recurrence, parse_recurrence, IntervalUnit, Recurrence, RecurrenceKind, RecurrenceMode,
};
pub use timewindow::{parse_clock, parse_time_window, TimeWindow};
