//! Checked conversion of appointments into minute intervals.

use salon_core::constants::MINUTES_PER_DAY;
use salon_core::model::{Appointment, MinuteInterval};
use salon_core::util::time::minutes_since_midnight;

use chrono::NaiveTime;

use crate::error::{ScheduleError, ScheduleResult};

/// ## Summary
/// Interval of a stored appointment, rejecting shapes the layout and overlap
/// math cannot reason about.
///
/// ## Errors
/// Returns `ScheduleError::InvalidAppointment` for a zero duration or an
/// appointment running past midnight.
pub fn appointment_interval(appointment: &Appointment) -> ScheduleResult<MinuteInterval> {
    checked(appointment.start_time, appointment.duration_minutes).map_err(|reason| {
        ScheduleError::InvalidAppointment {
            id: appointment.id,
            reason,
        }
    })
}

/// ## Summary
/// Interval of a prospective booking.
///
/// ## Errors
/// Returns `ScheduleError::InvalidCandidate` for a zero duration or a
/// candidate running past midnight.
pub fn candidate_interval(start: NaiveTime, duration_minutes: u32) -> ScheduleResult<MinuteInterval> {
    checked(start, duration_minutes).map_err(ScheduleError::InvalidCandidate)
}

fn checked(start: NaiveTime, duration_minutes: u32) -> Result<MinuteInterval, String> {
    if duration_minutes == 0 {
        return Err("duration must be positive".to_string());
    }
    let start = minutes_since_midnight(start);
    let end = start.saturating_add(duration_minutes);
    if end > MINUTES_PER_DAY {
        return Err(format!("ends {} minutes past midnight", end - MINUTES_PER_DAY));
    }
    Ok(MinuteInterval::new(start, end))
}
