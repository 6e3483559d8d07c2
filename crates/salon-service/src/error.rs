use thiserror::Error;
use uuid::Uuid;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    ScheduleError(#[from] salon_schedule::error::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] salon_core::error::CoreError),

    /// The store could not be reached. Never to be read as "no appointments".
    #[error("Appointment store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Appointment not found: {0}")]
    NotFound(Uuid),

    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("Seed data error: {0}")]
    SeedError(#[from] serde_json::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
