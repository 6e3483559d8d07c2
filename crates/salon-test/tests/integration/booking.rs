//! Booking workflow against a live store: soft warnings, hard blocks and
//! unverifiable checks.

use salon_test::component::booking::{BookingFlow, BookingState};
use salon_test::component::config::OverlapPolicy;
use salon_test::component::model::AppointmentPatch;
use salon_test::component::overlap::{OverlapVerdict, check_overlap};
use salon_test::component::store::{AppointmentFilter, AppointmentStore, InMemoryStore};
use salon_test::component::types::ServiceCategory;
use salon_test::schedule::OverlapQuery;

use super::helpers::*;

async fn booked_afternoon() -> InMemoryStore {
    let store = InMemoryStore::new();
    store
        .create(draft(monday(), ServiceCategory::Hair, time(14, 0), 60))
        .await
        .unwrap();
    store
}

/// ## Summary
/// Under the soft policy the operator sees the conflict and may book anyway.
#[test_log::test(tokio::test)]
async fn soft_warning_can_be_overridden() {
    let store = booked_afternoon().await;
    let mut flow = BookingFlow::create(
        draft(monday(), ServiceCategory::Hair, time(14, 30), 30),
        OverlapPolicy::SoftWarning,
    );

    let state = flow.submit(&store).await.unwrap();
    assert!(matches!(state, BookingState::ConflictPending(OverlapVerdict::Conflict(_))));
    assert_eq!(flow.conflicts().len(), 1);
    assert_eq!(flow.conflicts()[0].start_time, time(14, 0));

    let state = flow.confirm(&store).await.unwrap();
    assert!(matches!(state, BookingState::Done(_)));

    let hair = store
        .list(&AppointmentFilter::partition(monday(), ServiceCategory::Hair))
        .await
        .unwrap();
    assert_eq!(hair.len(), 2);
}

#[test_log::test(tokio::test)]
async fn hard_block_rejects_conflicts() {
    let store = booked_afternoon().await;
    let mut flow = BookingFlow::create(
        draft(monday(), ServiceCategory::Hair, time(14, 45), 60),
        OverlapPolicy::HardBlock,
    );

    let state = flow.submit(&store).await.unwrap();
    assert!(matches!(state, BookingState::Blocked(_)));
    assert!(flow.confirm(&store).await.is_err());
    flow.cancel().unwrap();
    assert_eq!(flow.state(), &BookingState::Cancelled);

    assert_eq!(store.list(&AppointmentFilter::all()).await.unwrap().len(), 1);
}

#[test_log::test(tokio::test)]
async fn back_to_back_and_other_categories_are_clear() {
    let store = booked_afternoon().await;
    let query = OverlapQuery::for_draft(&draft(monday(), ServiceCategory::Hair, time(15, 0), 30));
    assert!(check_overlap(&store, &query).await.unwrap().is_clear());
    assert!(!store.check_overlap(&query).await.unwrap());

    let mut flow = BookingFlow::create(
        draft(monday(), ServiceCategory::Waxing, time(14, 0), 60),
        OverlapPolicy::HardBlock,
    );
    assert!(matches!(flow.submit(&store).await.unwrap(), BookingState::Done(_)));
}

/// ## Summary
/// A check that cannot reach the store is never treated as clear.
#[test_log::test(tokio::test)]
async fn unreachable_store_is_not_clear() {
    let store = OfflineSwitch::default();
    store.go_offline();

    let query = OverlapQuery::for_draft(&draft(monday(), ServiceCategory::Nails, time(9, 0), 30));
    let verdict = check_overlap(&store, &query).await.unwrap();
    assert!(matches!(verdict, OverlapVerdict::Unknown(_)));
    assert!(verdict.requires_confirmation());

    let mut soft = BookingFlow::create(
        draft(monday(), ServiceCategory::Nails, time(9, 0), 30),
        OverlapPolicy::SoftWarning,
    );
    assert!(matches!(
        soft.submit(&store).await.unwrap(),
        BookingState::ConflictPending(OverlapVerdict::Unknown(_))
    ));

    let mut hard = BookingFlow::create(
        draft(monday(), ServiceCategory::Nails, time(9, 0), 30),
        OverlapPolicy::HardBlock,
    );
    assert!(matches!(
        hard.submit(&store).await.unwrap(),
        BookingState::Blocked(OverlapVerdict::Unknown(_))
    ));

    store.go_online();
    assert!(matches!(soft.confirm(&store).await.unwrap(), BookingState::Done(_)));
}

#[test_log::test(tokio::test)]
async fn moving_an_appointment_ignores_itself() {
    let store = booked_afternoon().await;
    let existing = store.list(&AppointmentFilter::all()).await.unwrap().remove(0);

    let patch = AppointmentPatch {
        start_time: Some(time(14, 30)),
        ..AppointmentPatch::default()
    };
    let mut flow = BookingFlow::edit(existing.id, patch, OverlapPolicy::HardBlock);
    let state = flow.submit(&store).await.unwrap();
    assert!(matches!(state, BookingState::Done(apt) if apt.start_time == time(14, 30)));
}
