//! Shared vocabulary for the salon calendar: service catalog, appointment
//! model, configuration, and the core error type.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod types;
pub mod util;
