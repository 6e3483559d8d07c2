/// Width of a bookable slot. Fixed for every service.
pub const SLOT_MINUTES: u32 = 15;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Format used for time-of-day values in configuration, seed files and output.
pub const TIME_FORMAT: &str = "%H:%M";

/// Format used for calendar dates in configuration, seed files and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
