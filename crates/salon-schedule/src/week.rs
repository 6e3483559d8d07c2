//! Week view helpers.
//!
//! ## Summary
//! The operator calendar shows Monday through Saturday. Sunday is always
//! skipped from the view regardless of the shift table.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use salon_core::model::Appointment;

/// Days shown per week.
pub const VISIBLE_DAYS: usize = 6;

/// Monday of the week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Monday through Saturday of the week containing `date`.
#[must_use]
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    week_start(date)
        .iter_days()
        .take(VISIBLE_DAYS)
        .collect()
}

/// The same weekday `weeks` weeks later (or earlier when negative).
#[must_use]
pub fn shift_week(date: NaiveDate, weeks: i64) -> NaiveDate {
    let days = Days::new(weeks.unsigned_abs() * 7);
    let shifted = if weeks >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.unwrap_or(date)
}

#[must_use]
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Groups appointments by date, keeping only the requested days. Every
/// requested day gets an entry, possibly empty.
#[must_use]
pub fn appointments_by_day<'a>(
    appointments: &'a [Appointment],
    days: &[NaiveDate],
) -> BTreeMap<NaiveDate, Vec<&'a Appointment>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Appointment>> =
        days.iter().map(|d| (*d, Vec::new())).collect();
    for apt in appointments {
        if let Some(bucket) = grouped.get_mut(&apt.date) {
            bucket.push(apt);
        }
    }
    grouped
}
