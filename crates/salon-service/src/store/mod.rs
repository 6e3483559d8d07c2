//! Appointment store interface.
//!
//! ## Summary
//! The store owns the appointment lifecycle. The rest of the system only reads
//! snapshots from it and is told about changes through a revision counter:
//! every mutation bumps the counter, and subscribers re-fetch. There is no
//! incremental patching of earlier results.

mod memory;

pub use memory::InMemoryStore;

use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

use salon_core::model::{Appointment, AppointmentDraft, AppointmentPatch};
use salon_core::types::ServiceCategory;
use salon_schedule::overlap::{OverlapQuery, has_overlap};

use crate::error::ServiceResult;

/// Selects appointments by date and/or category. Empty matches everything.
///
/// `date` alone selects one day. With `through` set the filter selects the
/// inclusive range `date..=through`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentFilter {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub through: Option<NaiveDate>,
    pub category: Option<ServiceCategory>,
}

impl AppointmentFilter {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            date: None,
            through: None,
            category: None,
        }
    }

    #[must_use]
    pub const fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            through: None,
            category: None,
        }
    }

    /// One booking partition: a single date in a single category.
    #[must_use]
    pub const fn partition(date: NaiveDate, category: ServiceCategory) -> Self {
        Self {
            date: Some(date),
            through: None,
            category: Some(category),
        }
    }

    /// Every day from `first` to `last` inclusive.
    #[must_use]
    pub const fn between(first: NaiveDate, last: NaiveDate, category: Option<ServiceCategory>) -> Self {
        Self {
            date: Some(first),
            through: Some(last),
            category,
        }
    }

    #[must_use]
    pub fn matches(&self, appointment: &Appointment) -> bool {
        let on_date = match self.through {
            Some(last) => self.date.is_none_or(|first| first <= appointment.date) && appointment.date <= last,
            None => self.date.is_none_or(|d| d == appointment.date),
        };
        on_date
            && self
                .category
                .is_none_or(|c| c == appointment.service_category)
    }
}

/// Persistence collaborator for appointments.
///
/// Failures to reach the backing store surface as
/// `ServiceError::StoreUnavailable`; implementations must never answer an
/// unreachable backend with an empty list.
pub trait AppointmentStore: Send + Sync {
    /// Appointments matching `filter`, ordered by date then start time.
    fn list(
        &self,
        filter: &AppointmentFilter,
    ) -> impl Future<Output = ServiceResult<Vec<Appointment>>> + Send;

    fn get(&self, id: Uuid) -> impl Future<Output = ServiceResult<Appointment>> + Send;

    fn create(
        &self,
        draft: AppointmentDraft,
    ) -> impl Future<Output = ServiceResult<Appointment>> + Send;

    fn update(
        &self,
        id: Uuid,
        patch: AppointmentPatch,
    ) -> impl Future<Output = ServiceResult<Appointment>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = ServiceResult<()>> + Send;

    /// Revision signal. The value changes after every successful mutation.
    fn subscribe(&self) -> watch::Receiver<u64>;

    /// ## Summary
    /// Store-side overlap check over the query's partition. Uses the same
    /// predicate as the engine so both sides agree on half-open intervals and
    /// date/category scoping.
    ///
    /// ## Errors
    /// Returns the store's error if listing fails, or a schedule error if the
    /// candidate is malformed.
    fn check_overlap(
        &self,
        query: &OverlapQuery,
    ) -> impl Future<Output = ServiceResult<bool>> + Send {
        async move {
            let existing = self
                .list(&AppointmentFilter::partition(query.date, query.category))
                .await?;
            Ok(has_overlap(&existing, query)?)
        }
    }
}
