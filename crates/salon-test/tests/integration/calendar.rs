//! Calendar façade end to end: slot grid, occupancy, week view and store failures.

use salon_test::component::error::ServiceError;
use salon_test::component::store::{AppointmentStore, InMemoryStore};
use salon_test::component::types::ServiceCategory;

use super::helpers::*;

/// ## Summary
/// Monday on a 13:00-20:00 shift yields 28 slots; a one-hour hair booking at
/// 14:00 occupies exactly four of them.
#[test_log::test(tokio::test)]
async fn monday_hair_grid() {
    let store = InMemoryStore::new();
    store
        .create(draft(monday(), ServiceCategory::Hair, time(14, 0), 60))
        .await
        .unwrap();
    let calendar = calendar(store);

    let slots = calendar.slot_grid(monday(), ServiceCategory::Hair).await.unwrap();
    assert_eq!(slots.len(), 28);
    assert_eq!(slots.first().unwrap().time, time(13, 0));
    assert_eq!(slots.last().unwrap().time, time(19, 45));

    let occupied: Vec<_> = slots.iter().filter(|s| s.occupied).map(|s| s.time).collect();
    assert_eq!(
        occupied,
        vec![time(14, 0), time(14, 15), time(14, 30), time(14, 45)]
    );
}

#[test_log::test(tokio::test)]
async fn categories_do_not_share_occupancy() {
    let store = InMemoryStore::new();
    store
        .create(draft(monday(), ServiceCategory::Hair, time(14, 0), 60))
        .await
        .unwrap();
    let calendar = calendar(store);

    for category in [ServiceCategory::Nails, ServiceCategory::Waxing] {
        let slots = calendar.slot_grid(monday(), category).await.unwrap();
        assert!(slots.iter().all(|s| !s.occupied), "{category} should be free");
    }
}

#[test_log::test(tokio::test)]
async fn sunday_is_closed() {
    let calendar = calendar(InMemoryStore::new());
    let sunday = monday().pred_opt().unwrap();
    assert!(!calendar.working_hours(sunday).is_open());
    assert!(
        calendar
            .slot_grid(sunday, ServiceCategory::Hair)
            .await
            .unwrap()
            .is_empty()
    );
}

#[test_log::test(tokio::test)]
async fn week_view_spans_monday_to_saturday() {
    let store = InMemoryStore::new();
    store
        .create(draft(tuesday(), ServiceCategory::Nails, time(9, 0), 45))
        .await
        .unwrap();
    let calendar = calendar(store);

    let saturday = monday() + chrono::Days::new(5);
    let week = calendar.week(saturday, None).await.unwrap();
    let dates: Vec<_> = week.iter().map(|d| d.date).collect();
    assert_eq!(dates.len(), 6);
    assert_eq!(dates[0], monday());
    assert_eq!(dates[5], saturday);

    assert!(week[0].is_today);
    assert_eq!(week[1].appointments.len(), 1);
    assert_eq!(week[1].hours.start_of_day(), Some(time(9, 0)));
}

/// ## Summary
/// An unreachable store is reported as an error, never as an empty day.
#[test_log::test(tokio::test)]
async fn unreachable_store_is_an_error() {
    let store = OfflineSwitch::default();
    store
        .create(draft(monday(), ServiceCategory::Hair, time(14, 0), 60))
        .await
        .unwrap();
    store.go_offline();
    let calendar = calendar(store);

    assert!(matches!(
        calendar.slot_grid(monday(), ServiceCategory::Hair).await,
        Err(ServiceError::StoreUnavailable(_))
    ));
    assert!(matches!(
        calendar.week(monday(), None).await,
        Err(ServiceError::StoreUnavailable(_))
    ));

    calendar.store().go_online();
    let slots = calendar.slot_grid(monday(), ServiceCategory::Hair).await.unwrap();
    assert_eq!(slots.iter().filter(|s| s.occupied).count(), 4);
}
