//! Fixtures shared by the engine's unit tests.

use chrono::{NaiveDate, NaiveTime, Utc};
use salon_core::model::Appointment;
use salon_core::types::ServiceCategory;
use uuid::Uuid;

use crate::hours::{Shift, WeeklySchedule};

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Monday 2024-06-10.
pub fn monday() -> NaiveDate {
    date(2024, 6, 10)
}

/// Built without validation so tests can feed the engine malformed input.
pub fn appointment_on(
    day: NaiveDate,
    category: ServiceCategory,
    start: NaiveTime,
    duration_minutes: u32,
) -> Appointment {
    let now = Utc::now();
    Appointment {
        id: Uuid::new_v4(),
        service_category: category,
        date: day,
        start_time: start,
        duration_minutes,
        customer_name: None,
        customer_phone: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn appointment(category: ServiceCategory, start: NaiveTime, duration_minutes: u32) -> Appointment {
    appointment_on(monday(), category, start, duration_minutes)
}

/// Sunday closed, Mon/Wed/Fri 14:00-20:00, Tue/Thu/Sat 09:00-16:00.
pub fn salon_week() -> WeeklySchedule {
    let afternoon = Shift::new(time(14, 0), time(20, 0)).unwrap();
    let morning = Shift::new(time(9, 0), time(16, 0)).unwrap();
    WeeklySchedule::new([
        None,
        Some(afternoon),
        Some(morning),
        Some(afternoon),
        Some(morning),
        Some(afternoon),
        Some(morning),
    ])
}
