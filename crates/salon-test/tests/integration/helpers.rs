#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]
//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{NaiveDate, NaiveTime};
use tokio::sync::watch;
use uuid::Uuid;

use salon_test::component::clock::FixedClock;
use salon_test::component::config::Settings;
use salon_test::component::error::{ServiceError, ServiceResult};
use salon_test::component::model::{Appointment, AppointmentDraft, AppointmentPatch};
use salon_test::component::store::{AppointmentFilter, AppointmentStore, InMemoryStore};
use salon_test::component::types::ServiceCategory;

pub use salon_test::component::calendar::CalendarService;

#[must_use]
pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 2024-06-10, a Monday.
#[must_use]
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

#[must_use]
pub fn tuesday() -> NaiveDate {
    monday().succ_opt().unwrap()
}

#[must_use]
pub fn draft(date: NaiveDate, category: ServiceCategory, start: NaiveTime, duration: u32) -> AppointmentDraft {
    AppointmentDraft::new(category, date, start, duration)
}

/// Default settings with Monday opening at 13:00.
#[must_use]
pub fn afternoon_settings() -> Settings {
    Settings::from_toml_str(
        r#"
        [schedule.monday]
        open = "13:00"
        close = "20:00"
        "#,
    )
    .unwrap()
}

#[must_use]
pub fn clock_at(date: NaiveDate, now: NaiveTime) -> FixedClock {
    FixedClock { date, time: now }
}

#[must_use]
pub fn calendar<S: AppointmentStore>(store: S) -> CalendarService<S, FixedClock> {
    CalendarService::from_settings(store, clock_at(monday(), time(15, 0)), &afternoon_settings()).unwrap()
}

/// Store that can be taken offline to simulate an unreachable backend.
#[derive(Debug, Default)]
pub struct OfflineSwitch {
    pub inner: InMemoryStore,
    offline: AtomicBool,
}

impl OfflineSwitch {
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
    }

    fn reachable(&self) -> ServiceResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::StoreUnavailable("backend unreachable".to_string()));
        }
        Ok(())
    }
}

impl AppointmentStore for OfflineSwitch {
    async fn list(&self, filter: &AppointmentFilter) -> ServiceResult<Vec<Appointment>> {
        self.reachable()?;
        self.inner.list(filter).await
    }

    async fn get(&self, id: Uuid) -> ServiceResult<Appointment> {
        self.reachable()?;
        self.inner.get(id).await
    }

    async fn create(&self, draft: AppointmentDraft) -> ServiceResult<Appointment> {
        self.reachable()?;
        self.inner.create(draft).await
    }

    async fn update(&self, id: Uuid, patch: AppointmentPatch) -> ServiceResult<Appointment> {
        self.reachable()?;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.reachable()?;
        self.inner.delete(id).await
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.subscribe()
    }
}
