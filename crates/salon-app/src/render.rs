//! Plain-text rendering of calendar views.

use chrono::NaiveDate;

use salon_core::constants::DATE_FORMAT;
use salon_core::util::time::format_time;
use salon_schedule::hours::WorkingHours;
use salon_schedule::slots::SlotView;
use salon_service::calendar::DayView;

#[must_use]
pub fn hours_line(date: NaiveDate, hours: &WorkingHours) -> String {
    let day = format!("{} {}", date.format("%A"), date.format(DATE_FORMAT));
    match hours.shift() {
        Some(shift) => format!(
            "{day}: open {}-{}",
            format_time(shift.open),
            format_time(shift.close)
        ),
        None => format!("{day}: closed"),
    }
}

/// One line per slot, `x` marking occupied ones.
#[must_use]
pub fn slot_grid(slots: &[SlotView]) -> String {
    let mut out = String::new();
    for slot in slots {
        let mark = if slot.occupied { 'x' } else { '.' };
        out.push_str(&format!("  {} [{mark}]\n", format_time(slot.time)));
    }
    out
}

/// Appointments in start order with their column placement.
#[must_use]
pub fn day_layout(day: &DayView) -> String {
    let mut out = String::new();
    if day.appointments.is_empty() {
        out.push_str("  no appointments\n");
        return out;
    }
    for apt in &day.appointments {
        let end = apt
            .end_time()
            .map_or_else(|| "24:00".to_string(), format_time);
        out.push_str(&format!(
            "  {}-{} {:<6}",
            format_time(apt.start_time),
            end,
            apt.service_category.as_str()
        ));
        if let Some(placement) = day.layout.get(&apt.id) {
            out.push_str(&format!(
                " col {}/{} left {:.1}% width {:.1}%",
                placement.column + 1,
                placement.column_count,
                placement.left_percent(),
                placement.width_percent()
            ));
        }
        if let Some(geometry) = day.geometry.get(&apt.id) {
            out.push_str(&format!(
                " top {:.0}px height {:.0}px",
                geometry.top_px, geometry.height_px
            ));
        }
        if let Some(name) = &apt.customer_name {
            out.push(' ');
            out.push_str(name);
        }
        out.push('\n');
    }
    out
}
