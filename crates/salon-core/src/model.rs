//! Appointment model.
//!
//! ## Summary
//! `Appointment` is the stored entity owned by the appointment store.
//! `AppointmentDraft` is what a caller submits to create one, and
//! `AppointmentPatch` is a partial update. The scheduling engine only reads
//! these values; it never mutates them.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MINUTES_PER_DAY;
use crate::error::{CoreError, CoreResult};
use crate::types::ServiceCategory;
use crate::util::time::{format_time, minutes_since_midnight, time_from_minutes};

/// Half-open interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MinuteInterval {
    pub start: u32,
    pub end: u32,
}

impl MinuteInterval {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Touching endpoints do not intersect.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    #[must_use]
    pub const fn contains(self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub service_category: ServiceCategory,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Builds a stored appointment from a validated draft.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if the draft is invalid.
    pub fn from_draft(id: Uuid, draft: AppointmentDraft, now: DateTime<Utc>) -> CoreResult<Self> {
        draft.validate()?;
        Ok(Self {
            id,
            service_category: draft.service_category,
            date: draft.date,
            start_time: draft.start_time,
            duration_minutes: draft.duration_minutes,
            customer_name: draft.customer_name,
            customer_phone: draft.customer_phone,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        })
    }

    #[must_use]
    pub fn start_minutes(&self) -> u32 {
        minutes_since_midnight(self.start_time)
    }

    #[must_use]
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes().saturating_add(self.duration_minutes)
    }

    /// The `[start, end)` interval this appointment covers.
    #[must_use]
    pub fn interval(&self) -> MinuteInterval {
        MinuteInterval::new(self.start_minutes(), self.end_minutes())
    }

    /// Exclusive end time, or `None` when the appointment runs to or past midnight.
    #[must_use]
    pub fn end_time(&self) -> Option<NaiveTime> {
        time_from_minutes(self.end_minutes())
    }

    /// ## Summary
    /// Applies a partial update. Bookkeeping fields (`id`, `created_at`) are never touched.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if the merged appointment is invalid;
    /// `self` is left unchanged in that case.
    pub fn apply_patch(&mut self, patch: AppointmentPatch, now: DateTime<Utc>) -> CoreResult<()> {
        let mut merged = self.clone();
        if let Some(category) = patch.service_category {
            merged.service_category = category;
        }
        if let Some(date) = patch.date {
            merged.date = date;
        }
        if let Some(start) = patch.start_time {
            merged.start_time = start;
        }
        if let Some(duration) = patch.duration_minutes {
            merged.duration_minutes = duration;
        }
        if let Some(name) = patch.customer_name {
            merged.customer_name = name;
        }
        if let Some(phone) = patch.customer_phone {
            merged.customer_phone = phone;
        }
        if let Some(notes) = patch.notes {
            merged.notes = notes;
        }
        validate_timing(merged.start_time, merged.duration_minutes)?;
        merged.updated_at = now;
        *self = merged;
        Ok(())
    }
}

/// Fields submitted to create an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub service_category: ServiceCategory,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AppointmentDraft {
    #[must_use]
    pub fn new(
        service_category: ServiceCategory,
        date: NaiveDate,
        start_time: NaiveTime,
        duration_minutes: u32,
    ) -> Self {
        Self {
            service_category,
            date,
            start_time,
            duration_minutes,
            customer_name: None,
            customer_phone: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_customer(mut self, name: impl Into<String>, phone: Option<String>) -> Self {
        self.customer_name = Some(name.into());
        self.customer_phone = phone;
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// ## Summary
    /// Checks the draft before it reaches the store or the scheduling engine.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if the duration is zero, the start
    /// time carries seconds, or the appointment would run past midnight.
    pub fn validate(&self) -> CoreResult<()> {
        validate_timing(self.start_time, self.duration_minutes)
    }
}

/// Partial update. `None` leaves a field unchanged; for optional fields
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentPatch {
    pub service_category: Option<ServiceCategory>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub customer_name: Option<Option<String>>,
    pub customer_phone: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl AppointmentPatch {
    /// Whether this patch moves the appointment in time or between partitions.
    #[must_use]
    pub const fn affects_schedule(&self) -> bool {
        self.service_category.is_some()
            || self.date.is_some()
            || self.start_time.is_some()
            || self.duration_minutes.is_some()
    }
}

fn validate_timing(start_time: NaiveTime, duration_minutes: u32) -> CoreResult<()> {
    if duration_minutes == 0 {
        return Err(CoreError::ValidationError(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    if start_time.second() != 0 || start_time.nanosecond() != 0 {
        return Err(CoreError::ValidationError(format!(
            "start time {start_time} must have minute granularity"
        )));
    }
    let end = minutes_since_midnight(start_time).saturating_add(duration_minutes);
    if end > MINUTES_PER_DAY {
        return Err(CoreError::ValidationError(format!(
            "appointment starting at {} for {duration_minutes} minutes runs past midnight",
            format_time(start_time)
        )));
    }
    Ok(())
}
