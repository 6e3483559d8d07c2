//! In-process appointment store.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

use salon_core::model::{Appointment, AppointmentDraft, AppointmentPatch};

use super::{AppointmentFilter, AppointmentStore};
use crate::error::{ServiceError, ServiceResult};

/// Appointment store kept in memory. Mutations bump the revision signal.
#[derive(Debug)]
pub struct InMemoryStore {
    appointments: RwLock<HashMap<Uuid, Appointment>>,
    revision: watch::Sender<u64>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            appointments: RwLock::new(HashMap::new()),
            revision,
        }
    }

    /// ## Summary
    /// Builds a store from a JSON array of appointment drafts. Each draft gets
    /// a fresh id.
    ///
    /// ## Errors
    /// Returns `ServiceError::SeedError` if the JSON is malformed and a core
    /// validation error if any draft is invalid.
    pub fn from_seed_json(json: &str) -> ServiceResult<Self> {
        let drafts: Vec<AppointmentDraft> = serde_json::from_str(json)?;
        let now = Utc::now();
        let mut appointments = HashMap::with_capacity(drafts.len());
        for draft in drafts {
            let apt = Appointment::from_draft(Uuid::new_v4(), draft, now)?;
            appointments.insert(apt.id, apt);
        }
        tracing::info!(count = appointments.len(), "Seeded in-memory store");
        let (revision, _) = watch::channel(0);
        Ok(Self {
            appointments: RwLock::new(appointments),
            revision,
        })
    }

    /// Current revision. Starts at 0.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

impl AppointmentStore for InMemoryStore {
    async fn list(&self, filter: &AppointmentFilter) -> ServiceResult<Vec<Appointment>> {
        let guard = self.appointments.read().await;
        let mut out: Vec<Appointment> = guard.values().filter(|a| filter.matches(a)).cloned().collect();
        out.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.start_time.cmp(&b.start_time))
                .then_with(|| a.id.cmp(&b.id))
        });
        tracing::trace!(?filter, count = out.len(), "Listed appointments");
        Ok(out)
    }

    async fn get(&self, id: Uuid) -> ServiceResult<Appointment> {
        self.appointments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound(id))
    }

    #[tracing::instrument(skip(self, draft), fields(date = %draft.date, category = %draft.service_category))]
    async fn create(&self, draft: AppointmentDraft) -> ServiceResult<Appointment> {
        let apt = Appointment::from_draft(Uuid::new_v4(), draft, Utc::now())?;
        self.appointments.write().await.insert(apt.id, apt.clone());
        self.bump();
        tracing::debug!(id = %apt.id, "Appointment created");
        Ok(apt)
    }

    #[tracing::instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: AppointmentPatch) -> ServiceResult<Appointment> {
        let updated = {
            let mut guard = self.appointments.write().await;
            let apt = guard.get_mut(&id).ok_or(ServiceError::NotFound(id))?;
            apt.apply_patch(patch, Utc::now())?;
            apt.clone()
        };
        self.bump();
        tracing::debug!("Appointment updated");
        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        if self.appointments.write().await.remove(&id).is_none() {
            return Err(ServiceError::NotFound(id));
        }
        self.bump();
        tracing::debug!("Appointment deleted");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
