//! Slot generator and slot grid.
//!
//! ## Summary
//! A day's candidate slots are the 15-minute multiples inside its open
//! interval. The grid pairs each slot with its occupancy for one category.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use salon_core::constants::SLOT_MINUTES;
use salon_core::model::Appointment;
use salon_core::types::ServiceCategory;
use salon_core::util::time::time_from_minutes;

use crate::hours::WeeklySchedule;
use crate::occupancy::occupied_slots;

/// One row of the rendered slot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub time: NaiveTime,
    pub occupied: bool,
}

/// ## Summary
/// Every multiple of [`SLOT_MINUTES`] in `[start_of_day, end_of_day)`, ascending.
///
/// Closed days yield an empty list. An opening time that is not on the grid
/// starts at the next grid point.
#[must_use]
pub fn generate_slots(schedule: &WeeklySchedule, date: NaiveDate) -> Vec<NaiveTime> {
    let Some(shift) = schedule.working_hours(date).shift() else {
        return Vec::new();
    };
    let open = shift.minutes();
    let first = open.start.div_ceil(SLOT_MINUTES) * SLOT_MINUTES;

    (first..open.end)
        .step_by(SLOT_MINUTES as usize)
        .filter_map(time_from_minutes)
        .collect()
}

/// Slots for `date` with occupancy from `appointments` in `category`.
#[must_use]
pub fn day_grid(
    schedule: &WeeklySchedule,
    appointments: &[Appointment],
    date: NaiveDate,
    category: ServiceCategory,
) -> Vec<SlotView> {
    let occupied: HashSet<NaiveTime> = occupied_slots(appointments, date, category);
    generate_slots(schedule, date)
        .into_iter()
        .map(|time| SlotView {
            time,
            occupied: occupied.contains(&time),
        })
        .collect()
}
