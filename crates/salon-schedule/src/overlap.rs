//! Overlap detector.
//!
//! ## Summary
//! Answers whether a prospective booking collides with an existing one in the
//! same category on the same date. Intervals are half-open, so a booking that
//! starts exactly when another ends is not a collision. The detector is
//! policy-free: blocking, warning, or ignoring is the caller's decision.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use salon_core::model::{Appointment, AppointmentDraft};
use salon_core::types::ServiceCategory;

use crate::error::ScheduleResult;
use crate::interval::{appointment_interval, candidate_interval};

/// A prospective booking to test against existing appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapQuery {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub category: ServiceCategory,
    /// Appointment being edited; never conflicts with itself.
    pub exclude_id: Option<Uuid>,
}

impl OverlapQuery {
    #[must_use]
    pub fn for_draft(draft: &AppointmentDraft) -> Self {
        Self {
            date: draft.date,
            start_time: draft.start_time,
            duration_minutes: draft.duration_minutes,
            category: draft.service_category,
            exclude_id: None,
        }
    }

    /// Query for an already stored appointment, excluding itself.
    #[must_use]
    pub fn for_existing(appointment: &Appointment) -> Self {
        Self {
            date: appointment.date,
            start_time: appointment.start_time,
            duration_minutes: appointment.duration_minutes,
            category: appointment.service_category,
            exclude_id: Some(appointment.id),
        }
    }
}

/// ## Summary
/// Existing appointments the candidate would collide with, in input order.
///
/// ## Errors
/// Returns `ScheduleError::InvalidCandidate` if the candidate has a zero
/// duration or runs past midnight, and `ScheduleError::InvalidAppointment`
/// if a same-partition appointment is malformed.
pub fn find_conflicts<'a>(
    appointments: &'a [Appointment],
    query: &OverlapQuery,
) -> ScheduleResult<Vec<&'a Appointment>> {
    let candidate = candidate_interval(query.start_time, query.duration_minutes)?;

    let mut conflicts = Vec::new();
    for apt in appointments.iter().filter(|a| {
        a.date == query.date
            && a.service_category == query.category
            && Some(a.id) != query.exclude_id
    }) {
        if appointment_interval(apt)?.intersects(candidate) {
            conflicts.push(apt);
        }
    }

    tracing::debug!(
        date = %query.date,
        category = %query.category,
        start = %query.start_time,
        duration = query.duration_minutes,
        conflicts = conflicts.len(),
        "Checked for overlap"
    );
    Ok(conflicts)
}

/// ## Summary
/// True iff the candidate collides with an existing appointment.
///
/// ## Errors
/// Same as [`find_conflicts`].
pub fn has_overlap(appointments: &[Appointment], query: &OverlapQuery) -> ScheduleResult<bool> {
    find_conflicts(appointments, query).map(|c| !c.is_empty())
}
