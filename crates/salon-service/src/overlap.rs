//! Store-backed overlap verdicts.
//!
//! ## Summary
//! Wraps the engine's overlap predicate with the store fetch it depends on.
//! A fetch failure yields [`OverlapVerdict::Unknown`], never
//! [`OverlapVerdict::Clear`], so callers fall to the conservative branch.

use salon_core::model::Appointment;
use salon_schedule::interval::candidate_interval;
use salon_schedule::overlap::{OverlapQuery, find_conflicts};

use crate::error::ServiceResult;
use crate::store::{AppointmentFilter, AppointmentStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlapVerdict {
    Clear,
    /// The appointments the candidate collides with.
    Conflict(Vec<Appointment>),
    /// The check could not be evaluated.
    Unknown(String),
}

impl OverlapVerdict {
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    /// Conflicts and unverifiable checks both need an operator's decision.
    #[must_use]
    pub const fn requires_confirmation(&self) -> bool {
        !self.is_clear()
    }
}

/// ## Summary
/// Checks `query` against the appointments currently in `store`.
///
/// ## Errors
/// Returns a schedule error only when the candidate itself is malformed.
/// Store failures are reported through the verdict.
#[tracing::instrument(skip(store), fields(date = %query.date, category = %query.category))]
pub async fn check_overlap<S: AppointmentStore>(
    store: &S,
    query: &OverlapQuery,
) -> ServiceResult<OverlapVerdict> {
    candidate_interval(query.start_time, query.duration_minutes)?;

    let existing = match store
        .list(&AppointmentFilter::partition(query.date, query.category))
        .await
    {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(error = %e, "Overlap check could not reach the store");
            return Ok(OverlapVerdict::Unknown(e.to_string()));
        }
    };

    let verdict = match find_conflicts(&existing, query) {
        Ok(conflicts) if conflicts.is_empty() => OverlapVerdict::Clear,
        Ok(conflicts) => OverlapVerdict::Conflict(conflicts.into_iter().cloned().collect()),
        Err(e) => {
            tracing::warn!(error = %e, "Stored appointment could not be checked");
            OverlapVerdict::Unknown(e.to_string())
        }
    };
    tracing::debug!(?verdict, "Overlap verdict");
    Ok(verdict)
}
