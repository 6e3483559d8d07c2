//! Latest-snapshot appointment feed.
//!
//! ## Summary
//! Views re-fetch the appointment list whenever the selected date or
//! category changes and whenever the store signals a mutation. Fetches may
//! overlap in flight; only the most recently started one is allowed to land.
//! Results of older fetches are discarded, never merged.
//!
//! A failed fetch is kept as [`FeedState::Failed`] so callers can tell
//! "no appointments" apart from "could not check".

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;

use salon_core::model::Appointment;

use crate::error::ServiceResult;
use crate::store::{AppointmentFilter, AppointmentStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// Nothing fetched yet.
    Idle,
    /// First fetch in flight.
    Loading,
    Ready(Arc<[Appointment]>),
    Failed(String),
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub filter: AppointmentFilter,
}

#[derive(Debug)]
struct Inner {
    issued: u64,
    landed: u64,
    state: FeedState,
}

#[derive(Debug)]
pub struct AppointmentFeed {
    inner: Mutex<Inner>,
}

impl Default for AppointmentFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentFeed {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                issued: 0,
                landed: 0,
                state: FeedState::Idle,
            }),
        }
    }

    /// Locks the feed and recovers from poisoning.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.inner.clear_poison();
                poisoned.into_inner()
            }
        }
    }

    /// Starts a fetch, superseding every fetch started before it.
    pub fn begin(&self, filter: AppointmentFilter) -> FetchTicket {
        let mut inner = self.lock();
        inner.issued += 1;
        if inner.state == FeedState::Idle {
            inner.state = FeedState::Loading;
        }
        FetchTicket {
            generation: inner.issued,
            filter,
        }
    }

    /// ## Summary
    /// Lands a fetch result. Returns `false` and drops the result if a newer
    /// fetch has been started since `ticket` was issued.
    pub fn complete(&self, ticket: FetchTicket, result: ServiceResult<Vec<Appointment>>) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.issued {
            tracing::debug!(
                stale = ticket.generation,
                latest = inner.issued,
                "Discarding superseded fetch"
            );
            return false;
        }
        inner.landed = ticket.generation;
        inner.state = match result {
            Ok(appointments) => FeedState::Ready(appointments.into()),
            Err(e) => {
                tracing::warn!(error = %e, "Appointment fetch failed");
                FeedState::Failed(e.to_string())
            }
        };
        true
    }

    #[must_use]
    pub fn state(&self) -> FeedState {
        self.lock().state.clone()
    }

    /// Latest successfully fetched list, if the last landed fetch succeeded.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<[Appointment]>> {
        match &self.lock().state {
            FeedState::Ready(list) => Some(Arc::clone(list)),
            _ => None,
        }
    }

    /// Whether a fetch newer than the displayed state is still in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        let inner = self.lock();
        inner.issued != inner.landed
    }

    /// ## Summary
    /// Fetches `filter` from `store` and lands the result. Returns the feed
    /// state afterwards, which reflects a newer fetch if this one was superseded.
    #[tracing::instrument(skip(self, store))]
    pub async fn refresh<S: AppointmentStore>(&self, store: &S, filter: AppointmentFilter) -> FeedState {
        let ticket = self.begin(filter);
        let result = store.list(&ticket.filter).await;
        self.complete(ticket, result);
        self.state()
    }

    /// ## Summary
    /// Refreshes once now and again each time the store's revision changes.
    /// Returns when the store drops its change channel.
    pub async fn follow<S: AppointmentStore>(
        &self,
        store: &S,
        filter: AppointmentFilter,
        mut changes: watch::Receiver<u64>,
    ) {
        changes.mark_unchanged();
        self.refresh(store, filter).await;
        while changes.changed().await.is_ok() {
            let revision = *changes.borrow_and_update();
            tracing::trace!(revision, "Store changed, refreshing");
            self.refresh(store, filter).await;
        }
    }
}
