//! Async boundary of the salon calendar: the appointment store, snapshot
//! refresh, store-backed overlap verdicts, and the booking workflow.

pub mod booking;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod feed;
pub mod overlap;
pub mod store;
