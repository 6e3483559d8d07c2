//! Time-of-day helpers.
//!
//! ## Summary
//! The engine works in whole minutes since midnight. These helpers convert
//! between `chrono::NaiveTime` and that representation and parse the `HH:MM`
//! strings used by configuration and seed files.

use chrono::{NaiveTime, Timelike};

use crate::constants::{MINUTES_PER_DAY, TIME_FORMAT};
use crate::error::{CoreError, CoreResult};

/// Minutes elapsed since midnight. Seconds are truncated.
#[must_use]
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

/// Builds a time-of-day from minutes since midnight.
///
/// Returns `None` for values at or beyond 24:00.
#[must_use]
pub fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    if minutes >= MINUTES_PER_DAY {
        return None;
    }
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// ## Summary
/// Parses an `HH:MM` (or `HH:MM:SS`) time-of-day string.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the string is not a valid time.
pub fn parse_time(value: &str) -> CoreResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| CoreError::ParseError(format!("invalid time {trimmed:?}: {e}")))
}

/// Formats a time-of-day as `HH:MM`.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
