//! Vertical geometry for the day view.

use chrono::NaiveTime;
use serde::Serialize;

use salon_core::config::LayoutConfig;
use salon_core::constants::SLOT_MINUTES;
use salon_core::error::{CoreError, CoreResult};
use salon_core::model::Appointment;
use salon_core::util::time::{minutes_since_midnight, parse_time, time_from_minutes};

/// Vertical placement in pixels relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub top_px: f64,
    pub height_px: f64,
}

/// Pixel grid of the day view: `slot_height_px` per 15 minutes from `origin`
/// to `display_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    pub origin: NaiveTime,
    pub display_end: NaiveTime,
    pub slot_height_px: u32,
    pub min_height_px: u32,
}

impl TimeGrid {
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if a time does not parse, the
    /// grid is empty, or the slot height is zero.
    pub fn from_config(config: &LayoutConfig) -> CoreResult<Self> {
        let parse = |value: &str| {
            parse_time(value).map_err(|e| CoreError::InvalidConfiguration(format!("layout: {e}")))
        };
        let grid = Self {
            origin: parse(&config.origin)?,
            display_end: parse(&config.display_end)?,
            slot_height_px: config.slot_height_px,
            min_height_px: config.min_height_px,
        };
        if grid.display_end <= grid.origin {
            return Err(CoreError::InvalidConfiguration(
                "layout: display_end must be after origin".to_string(),
            ));
        }
        if grid.slot_height_px == 0 {
            return Err(CoreError::InvalidConfiguration(
                "layout: slot_height_px must be positive".to_string(),
            ));
        }
        Ok(grid)
    }

    /// Multiplies before dividing so whole-pixel results stay exact.
    fn to_px(&self, minutes: f64) -> f64 {
        minutes * f64::from(self.slot_height_px) / f64::from(SLOT_MINUTES)
    }

    fn minutes_from_origin(&self, time: NaiveTime) -> i64 {
        i64::from(minutes_since_midnight(time)) - i64::from(minutes_since_midnight(self.origin))
    }

    /// ## Summary
    /// Top offset and height for an appointment.
    ///
    /// Height is floored at `min_height_px` so very short appointments stay
    /// visible; clustering still uses the real duration.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "minute offsets within a day")]
    pub fn geometry(&self, appointment: &Appointment) -> Geometry {
        let top_px = self.to_px(self.minutes_from_origin(appointment.start_time) as f64);
        let height_px = self.to_px(f64::from(appointment.duration_minutes));
        Geometry {
            top_px,
            height_px: height_px.max(f64::from(self.min_height_px)),
        }
    }

    /// Offset of the current-time marker, or `None` outside the displayed hours.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "minute offsets within a day")]
    pub fn now_offset(&self, now: NaiveTime) -> Option<f64> {
        if now < self.origin || now >= self.display_end {
            return None;
        }
        Some(self.to_px(self.minutes_from_origin(now) as f64))
    }

    /// ## Summary
    /// Grid time under a vertical offset, as used when an operator clicks an
    /// empty part of the day. Offsets outside the grid clamp to its first or
    /// last slot.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "offset is clamped to the grid before conversion"
    )]
    pub fn time_at_offset(&self, offset_px: f64) -> NaiveTime {
        let origin = minutes_since_midnight(self.origin);
        let span = minutes_since_midnight(self.display_end).saturating_sub(origin);
        let last_slot = span.saturating_sub(1) / SLOT_MINUTES;
        let slot = (offset_px / f64::from(self.slot_height_px)).floor().max(0.0) as u32;
        let minutes = origin + slot.min(last_slot) * SLOT_MINUTES;
        time_from_minutes(minutes).unwrap_or(self.origin)
    }
}
