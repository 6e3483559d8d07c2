//! Day layout through the calendar façade.

use salon_test::component::model::Appointment;
use salon_test::component::store::{AppointmentStore, InMemoryStore};
use salon_test::component::types::ServiceCategory;
use salon_test::schedule::layout_day;

use super::helpers::*;

async fn seed(store: &InMemoryStore, slots: &[(u32, u32, u32)]) -> Vec<Appointment> {
    let mut created = Vec::new();
    for &(h, m, duration) in slots {
        created.push(
            store
                .create(draft(tuesday(), ServiceCategory::Hair, time(h, m), duration))
                .await
                .unwrap(),
        );
    }
    created
}

/// ## Summary
/// `[09:00,10:00)`, `[09:30,10:30)` and `[11:00,11:30)` form a two-column
/// cluster and a single-column cluster.
#[test_log::test(tokio::test)]
async fn overlapping_pair_and_loner() {
    let store = InMemoryStore::new();
    let created = seed(&store, &[(11, 0, 30), (9, 30, 60), (9, 0, 60)]).await;
    let calendar = calendar(store);

    let day = calendar
        .day_view(tuesday(), Some(ServiceCategory::Hair))
        .await
        .unwrap();
    assert_eq!(day.layout.clusters.len(), 2);
    assert_eq!(day.layout.clusters[0].column_count, 2);
    assert_eq!(day.layout.clusters[1].column_count, 1);

    let loner = day.layout.get(&created[0].id).unwrap();
    assert_eq!(loner.column_count, 1);
    assert!((loner.width_percent() - 100.0).abs() < f64::EPSILON);

    let early = day.layout.get(&created[2].id).unwrap();
    let late = day.layout.get(&created[1].id).unwrap();
    assert_eq!((early.column, late.column), (0, 1));
}

#[test_log::test(tokio::test)]
async fn layout_ignores_input_order() {
    let store = InMemoryStore::new();
    let mut created = seed(&store, &[(9, 0, 60), (9, 30, 60), (11, 0, 30)]).await;

    let forward = layout_day(&created).unwrap();
    created.reverse();
    let backward = layout_day(&created).unwrap();
    assert_eq!(forward, backward);
}

#[test_log::test(tokio::test)]
async fn identical_bookings_split_three_ways() {
    let store = InMemoryStore::new();
    let created = seed(&store, &[(10, 0, 60), (10, 0, 60), (10, 0, 60)]).await;
    let calendar = calendar(store);

    let day = calendar.day_view(tuesday(), None).await.unwrap();
    let mut columns: Vec<_> = created
        .iter()
        .map(|a| day.layout.get(&a.id).unwrap())
        .inspect(|p| assert_eq!(p.column_count, 3))
        .map(|p| p.column)
        .collect();
    columns.sort_unstable();
    assert_eq!(columns, vec![0, 1, 2]);
}

#[test_log::test(tokio::test)]
async fn touching_bookings_stay_full_width() {
    let store = InMemoryStore::new();
    seed(&store, &[(9, 0, 30), (9, 30, 30)]).await;
    let calendar = calendar(store);

    let day = calendar.day_view(tuesday(), None).await.unwrap();
    assert_eq!(day.layout.clusters.len(), 2);
    assert!(day.layout.clusters.iter().all(|c| c.column_count == 1));
    // 16px per 15 minutes from 08:00.
    let first = &day.appointments[0];
    assert!((day.geometry[&first.id].top_px - 64.0).abs() < f64::EPSILON);
    assert!((day.geometry[&first.id].height_px - 32.0).abs() < f64::EPSILON);
}
