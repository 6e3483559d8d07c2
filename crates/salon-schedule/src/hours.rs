//! Working-hours calendar.
//!
//! ## Summary
//! Maps a calendar date to its open interval. The mapping depends only on the
//! day of the week and is read from a seven-entry table built once at startup.
//! Holidays and other exceptions are not modelled.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

use salon_core::config::{DayShiftConfig, ScheduleConfig};
use salon_core::error::{CoreError, CoreResult};
use salon_core::model::MinuteInterval;
use salon_core::util::time::{format_time, minutes_since_midnight, parse_time};

const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Open interval `[open, close)` for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl Shift {
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` unless `open < close`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> CoreResult<Self> {
        if close <= open {
            return Err(CoreError::InvalidConfiguration(format!(
                "shift closes at {} but opens at {}",
                format_time(close),
                format_time(open)
            )));
        }
        Ok(Self { open, close })
    }

    #[must_use]
    pub fn minutes(&self) -> MinuteInterval {
        MinuteInterval::new(
            minutes_since_midnight(self.open),
            minutes_since_midnight(self.close),
        )
    }
}

/// Open state of a single date. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkingHours {
    Closed,
    Open(Shift),
}

impl WorkingHours {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn shift(&self) -> Option<Shift> {
        match self {
            Self::Open(shift) => Some(*shift),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn start_of_day(&self) -> Option<NaiveTime> {
        self.shift().map(|s| s.open)
    }

    #[must_use]
    pub fn end_of_day(&self) -> Option<NaiveTime> {
        self.shift().map(|s| s.close)
    }

    /// Whether `time` falls inside the open interval. Always false when closed.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.shift()
            .is_some_and(|s| s.open <= time && time < s.close)
    }
}

/// Day-of-week → shift lookup table, indexed from Sunday = 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Option<Shift>; 7],
}

impl WeeklySchedule {
    #[must_use]
    pub const fn new(days: [Option<Shift>; 7]) -> Self {
        Self { days }
    }

    /// ## Summary
    /// Builds the table from configuration.
    ///
    /// A day is closed when it is absent or marked `closed`. Otherwise both
    /// `open` and `close` must be present and ordered.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` naming the offending weekday if
    /// a time is missing or unparseable, the shift is empty, or a day is both
    /// marked `closed` and given times.
    pub fn from_config(config: &ScheduleConfig) -> CoreResult<Self> {
        let mut days = [None; 7];
        for (index, slot) in (0u32..).zip(days.iter_mut()) {
            let name = WEEKDAY_NAMES[index as usize];
            *slot = match config.day(index) {
                None => None,
                Some(day) => shift_from_config(name, day)?,
            };
        }
        let schedule = Self::new(days);
        tracing::debug!(open_days = schedule.open_days(), "Weekly schedule built");
        Ok(schedule)
    }

    /// Working hours for `date`, looked up by its weekday.
    #[must_use]
    pub fn working_hours(&self, date: NaiveDate) -> WorkingHours {
        let index = date.weekday().num_days_from_sunday() as usize;
        self.days[index].map_or(WorkingHours::Closed, WorkingHours::Open)
    }

    #[must_use]
    pub fn open_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_some()).count()
    }
}

fn shift_from_config(weekday: &str, day: &DayShiftConfig) -> CoreResult<Option<Shift>> {
    if day.closed {
        if day.open.is_some() || day.close.is_some() {
            return Err(CoreError::InvalidConfiguration(format!(
                "{weekday}: a closed day cannot have open or close times"
            )));
        }
        return Ok(None);
    }
    let (Some(open), Some(close)) = (day.open.as_deref(), day.close.as_deref()) else {
        return Err(CoreError::InvalidConfiguration(format!(
            "{weekday}: both open and close are required unless the day is closed"
        )));
    };
    let parse = |value: &str| {
        parse_time(value).map_err(|e| CoreError::InvalidConfiguration(format!("{weekday}: {e}")))
    };
    Shift::new(parse(open)?, parse(close)?)
        .map(Some)
        .map_err(|e| CoreError::InvalidConfiguration(format!("{weekday}: {e}")))
}
