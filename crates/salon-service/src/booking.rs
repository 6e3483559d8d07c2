//! Booking workflow.
//!
//! ## Summary
//! Creating or moving an appointment is a two-phase operation: check for
//! overlap, let the operator decide on a conflict, then commit. The flow is an
//! explicit state machine:
//!
//! ```text
//! Idle -> Checking -> Committing -> Done
//!             |            ^
//!             v            |
//!      ConflictPending ----+ (confirm)
//!             |
//!             v
//!         Cancelled
//! ```
//!
//! Under [`OverlapPolicy::HardBlock`] a conflict ends in `Blocked` instead of
//! `ConflictPending`. An overlap check that could not be evaluated is treated
//! like a conflict under both policies. There is no locking: two operators
//! confirming overlapping bookings both succeed, last writer wins.

use chrono::Utc;
use uuid::Uuid;

use salon_core::config::OverlapPolicy;
use salon_core::model::{Appointment, AppointmentDraft, AppointmentPatch};
use salon_schedule::overlap::OverlapQuery;

use crate::error::{ServiceError, ServiceResult};
use crate::overlap::{OverlapVerdict, check_overlap};
use crate::store::AppointmentStore;

/// What the flow will write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingTarget {
    Create(AppointmentDraft),
    Edit { id: Uuid, patch: AppointmentPatch },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingState {
    Idle,
    Checking,
    /// Waiting for the operator to confirm or cancel.
    ConflictPending(OverlapVerdict),
    Committing,
    Done(Appointment),
    Blocked(OverlapVerdict),
    Cancelled,
}

impl BookingState {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Checking => "checking",
            Self::ConflictPending(_) => "conflict pending",
            Self::Committing => "committing",
            Self::Done(_) => "done",
            Self::Blocked(_) => "blocked",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Blocked(_) | Self::Cancelled)
    }
}

#[derive(Debug)]
pub struct BookingFlow {
    target: BookingTarget,
    policy: OverlapPolicy,
    state: BookingState,
}

impl BookingFlow {
    #[must_use]
    pub const fn create(draft: AppointmentDraft, policy: OverlapPolicy) -> Self {
        Self {
            target: BookingTarget::Create(draft),
            policy,
            state: BookingState::Idle,
        }
    }

    #[must_use]
    pub const fn edit(id: Uuid, patch: AppointmentPatch, policy: OverlapPolicy) -> Self {
        Self {
            target: BookingTarget::Edit { id, patch },
            policy,
            state: BookingState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &BookingState {
        &self.state
    }

    #[must_use]
    pub const fn target(&self) -> &BookingTarget {
        &self.target
    }

    /// Appointments behind a pending or blocking conflict.
    #[must_use]
    pub fn conflicts(&self) -> &[Appointment] {
        match &self.state {
            BookingState::ConflictPending(OverlapVerdict::Conflict(list))
            | BookingState::Blocked(OverlapVerdict::Conflict(list)) => list,
            _ => &[],
        }
    }

    fn transition(&mut self, next: BookingState) {
        tracing::debug!(from = self.state.name(), to = next.name(), "Booking transition");
        self.state = next;
    }

    fn invalid(&self, action: &'static str) -> ServiceError {
        ServiceError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }

    /// ## Summary
    /// Runs the overlap check and commits straight away when it is clear.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidTransition` unless idle. Validation and
    /// commit failures are returned with the flow back in `Idle`.
    #[tracing::instrument(skip(self, store), fields(policy = ?self.policy))]
    pub async fn submit<S: AppointmentStore>(&mut self, store: &S) -> ServiceResult<&BookingState> {
        if self.state != BookingState::Idle {
            return Err(self.invalid("submit"));
        }
        self.transition(BookingState::Checking);

        let verdict = match self.evaluate(store).await {
            Ok(verdict) => verdict,
            Err(e) => {
                self.transition(BookingState::Idle);
                return Err(e);
            }
        };

        match (verdict, self.policy) {
            (OverlapVerdict::Clear, _) => self.commit(store, BookingState::Idle).await,
            (verdict, OverlapPolicy::SoftWarning) => {
                self.transition(BookingState::ConflictPending(verdict));
                Ok(&self.state)
            }
            (verdict, OverlapPolicy::HardBlock) => {
                self.transition(BookingState::Blocked(verdict));
                Ok(&self.state)
            }
        }
    }

    /// ## Summary
    /// Operator override: commits despite the pending conflict.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidTransition` unless a conflict is pending.
    /// A failed commit leaves the conflict pending so it can be retried.
    pub async fn confirm<S: AppointmentStore>(&mut self, store: &S) -> ServiceResult<&BookingState> {
        if !matches!(self.state, BookingState::ConflictPending(_)) {
            return Err(self.invalid("confirm"));
        }
        tracing::info!(conflicts = self.conflicts().len(), "Operator overrode overlap warning");
        let pending = self.state.clone();
        self.commit(store, pending).await
    }

    /// ## Errors
    /// Returns `ServiceError::InvalidTransition` once committing has started
    /// or the flow has already finished.
    pub fn cancel(&mut self) -> ServiceResult<()> {
        match self.state {
            BookingState::Idle | BookingState::ConflictPending(_) | BookingState::Blocked(_) => {
                self.transition(BookingState::Cancelled);
                Ok(())
            }
            _ => Err(self.invalid("cancel")),
        }
    }

    async fn evaluate<S: AppointmentStore>(&self, store: &S) -> ServiceResult<OverlapVerdict> {
        match &self.target {
            BookingTarget::Create(draft) => {
                draft.validate()?;
                check_overlap(store, &OverlapQuery::for_draft(draft)).await
            }
            BookingTarget::Edit { id, patch } => {
                if !patch.affects_schedule() {
                    return Ok(OverlapVerdict::Clear);
                }
                let mut merged = match store.get(*id).await {
                    Ok(current) => current,
                    Err(ServiceError::StoreUnavailable(reason)) => {
                        return Ok(OverlapVerdict::Unknown(reason));
                    }
                    Err(e) => return Err(e),
                };
                merged.apply_patch(patch.clone(), Utc::now())?;
                check_overlap(store, &OverlapQuery::for_existing(&merged)).await
            }
        }
    }

    async fn commit<S: AppointmentStore>(
        &mut self,
        store: &S,
        on_failure: BookingState,
    ) -> ServiceResult<&BookingState> {
        self.transition(BookingState::Committing);
        let result = match &self.target {
            BookingTarget::Create(draft) => store.create(draft.clone()).await,
            BookingTarget::Edit { id, patch } => store.update(*id, patch.clone()).await,
        };
        match result {
            Ok(appointment) => {
                self.transition(BookingState::Done(appointment));
                Ok(&self.state)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking commit failed");
                self.transition(on_failure);
                Err(e)
            }
        }
    }
}
