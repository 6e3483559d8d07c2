//! Appointment scheduling engine.
//!
//! Pure, synchronous functions over an appointment snapshot: which hours a
//! date is open, which slots exist, which are occupied, how overlapping
//! appointments are laid out side by side, and whether a candidate booking
//! collides with an existing one. Nothing here performs I/O or reads a clock.

pub mod error;
pub mod hours;
pub mod interval;
pub mod layout;
pub mod occupancy;
pub mod overlap;
pub mod slots;
pub mod week;

#[cfg(test)]
pub(crate) mod test_support;

pub use hours::{Shift, WeeklySchedule, WorkingHours};
pub use layout::{DayLayout, LayoutAssignment, LayoutCluster, TimeGrid, layout_day};
pub use occupancy::occupied_slots;
pub use overlap::{OverlapQuery, find_conflicts, has_overlap};
pub use slots::{SlotView, day_grid, generate_slots};
