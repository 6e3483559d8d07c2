//! Occupancy resolver.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use salon_core::constants::SLOT_MINUTES;
use salon_core::model::Appointment;
use salon_core::types::ServiceCategory;
use salon_core::util::time::time_from_minutes;

/// ## Summary
/// Slot times covered by the appointments booked on `date` in `category`.
///
/// Each appointment marks `start`, `start + 15`, … while the offset is below
/// its duration, so a trailing partial slot is marked too. The result is a
/// membership set; overlapping appointments simply union.
///
/// Appointments with a zero duration mark nothing and are logged.
#[must_use]
pub fn occupied_slots(
    appointments: &[Appointment],
    date: NaiveDate,
    category: ServiceCategory,
) -> HashSet<NaiveTime> {
    let mut occupied = HashSet::new();

    for apt in appointments
        .iter()
        .filter(|a| a.date == date && a.service_category == category)
    {
        if apt.duration_minutes == 0 {
            tracing::warn!(id = %apt.id, "Ignoring appointment with zero duration");
            continue;
        }
        let start = apt.start_minutes();
        let mut offset = 0;
        while offset < apt.duration_minutes {
            // Never wrap past midnight
            let Some(slot) = time_from_minutes(start + offset) else {
                break;
            };
            occupied.insert(slot);
            offset += SLOT_MINUTES;
        }
    }

    tracing::trace!(%date, %category, count = occupied.len(), "Resolved occupied slots");
    occupied
}
