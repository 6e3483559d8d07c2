//! Day layout engine.
//!
//! ## Summary
//! Places one day's appointments into side-by-side columns so that no two
//! overlapping appointments share a column, while appointments that never
//! overlap anything keep the full width.
//!
//! The day is split into clusters: maximal runs of appointments chained
//! together by overlap. Columns are assigned greedily inside each cluster and
//! every cluster divides the width independently of its siblings.

mod geometry;

pub use geometry::{Geometry, TimeGrid};

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use salon_core::model::{Appointment, MinuteInterval};

use crate::error::ScheduleResult;
use crate::interval::appointment_interval;

/// Horizontal placement of one appointment within its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutAssignment {
    /// Zero-based column index.
    pub column: usize,
    /// Number of columns in the appointment's cluster.
    pub column_count: usize,
}

impl LayoutAssignment {
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "column counts are tiny")]
    pub fn width_percent(&self) -> f64 {
        100.0 / self.column_count as f64
    }

    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "column counts are tiny")]
    pub fn left_percent(&self) -> f64 {
        self.column as f64 * self.width_percent()
    }
}

/// A group of transitively overlapping appointments laid out together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutCluster {
    /// Members in placement order.
    pub members: Vec<Uuid>,
    pub column_count: usize,
    /// From the earliest start to the latest end among the members.
    pub span: MinuteInterval,
}

/// Layout of one day's batch. Valid only for the snapshot it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    pub assignments: HashMap<Uuid, LayoutAssignment>,
    pub clusters: Vec<LayoutCluster>,
}

impl DayLayout {
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<&LayoutAssignment> {
        self.assignments.get(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }
}

struct Placed {
    id: Uuid,
    span: MinuteInterval,
}

/// ## Summary
/// Computes column assignments for one day's appointments.
///
/// The caller selects the batch (one day, usually one category). Input order
/// does not matter: appointments are sorted by start ascending, longer first
/// on equal starts, then by id.
///
/// ## Errors
/// Returns `ScheduleError::InvalidAppointment` if any appointment has a zero
/// duration or runs past midnight.
pub fn layout_day(appointments: &[Appointment]) -> ScheduleResult<DayLayout> {
    let mut placed = appointments
        .iter()
        .map(|apt| {
            Ok(Placed {
                id: apt.id,
                span: appointment_interval(apt)?,
            })
        })
        .collect::<ScheduleResult<Vec<_>>>()?;

    placed.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then_with(|| b.span.len().cmp(&a.span.len()))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut layout = DayLayout::default();
    for cluster in clusters(&placed) {
        place_cluster(cluster, &mut layout);
    }

    tracing::debug!(
        appointments = layout.len(),
        clusters = layout.clusters.len(),
        "Computed day layout"
    );
    Ok(layout)
}

/// Splits a sorted batch wherever a start reaches the running end of the
/// current cluster.
fn clusters(sorted: &[Placed]) -> Vec<&[Placed]> {
    let mut out = Vec::new();
    let mut cluster_start = 0;
    let mut cluster_end = 0;

    for (index, item) in sorted.iter().enumerate() {
        if index > cluster_start && item.span.start >= cluster_end {
            out.push(&sorted[cluster_start..index]);
            cluster_start = index;
            cluster_end = item.span.end;
        } else {
            cluster_end = cluster_end.max(item.span.end);
        }
    }
    if cluster_start < sorted.len() {
        out.push(&sorted[cluster_start..]);
    }
    out
}

/// Greedy first-fit: each column remembers the end of its latest occupant.
fn place_cluster(cluster: &[Placed], layout: &mut DayLayout) {
    let mut column_ends: Vec<u32> = Vec::new();
    let mut columns = Vec::with_capacity(cluster.len());

    for item in cluster {
        let column = if let Some(free) = column_ends.iter().position(|end| *end <= item.span.start) {
            column_ends[free] = item.span.end;
            free
        } else {
            column_ends.push(item.span.end);
            column_ends.len() - 1
        };
        tracing::trace!(id = %item.id, column, "Placed appointment");
        columns.push(column);
    }

    let column_count = column_ends.len();
    for (item, column) in cluster.iter().zip(columns) {
        layout.assignments.insert(
            item.id,
            LayoutAssignment {
                column,
                column_count,
            },
        );
    }

    let start = cluster.first().map_or(0, |p| p.span.start);
    let end = cluster.iter().map(|p| p.span.end).max().unwrap_or(start);
    layout.clusters.push(LayoutCluster {
        members: cluster.iter().map(|p| p.id).collect(),
        column_count,
        span: MinuteInterval::new(start, end),
    });
}
