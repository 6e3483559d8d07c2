use thiserror::Error;
use uuid::Uuid;

/// Scheduling engine errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid appointment {id}: {reason}")]
    InvalidAppointment { id: Uuid, reason: String },

    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    #[error(transparent)]
    CoreError(#[from] salon_core::error::CoreError),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
