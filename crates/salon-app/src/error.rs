use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] salon_service::error::ServiceError),

    #[error(transparent)]
    ScheduleError(#[from] salon_schedule::error::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] salon_core::error::CoreError),

    #[error("usage: salon [YYYY-MM-DD] [hair|nails|waxing]: {0}")]
    Usage(String),

    #[error("failed to read seed file {path}: {source}")]
    SeedFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
