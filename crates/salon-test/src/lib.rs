//! Salon calendar - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `salon_test::` paths without depending on each crate separately.

pub mod component {
    pub use salon_core::{config, constants, model, types, util};
    pub use salon_service::{booking, calendar, clock, feed, overlap, store};

    pub mod error {
        pub use salon_core::error::{CoreError, CoreResult};
        pub use salon_schedule::error::{ScheduleError, ScheduleResult};
        pub use salon_service::error::{ServiceError, ServiceResult};
    }
}

pub use salon_app as app;
pub use salon_schedule as schedule;
