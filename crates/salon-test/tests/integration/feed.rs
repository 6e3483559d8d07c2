//! Snapshot feed: stale fetches, failures and change notifications.

use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

use salon_test::component::feed::{AppointmentFeed, FeedState};
use salon_test::component::store::{AppointmentFilter, AppointmentStore, InMemoryStore};
use salon_test::component::types::ServiceCategory;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn superseded_fetch_never_lands() {
    let store = InMemoryStore::new();
    store
        .create(draft(tuesday(), ServiceCategory::Hair, time(9, 0), 30))
        .await
        .unwrap();
    let feed = AppointmentFeed::new();

    // The operator switches from Monday to Tuesday before Monday's fetch returns.
    let monday_fetch = feed.begin(AppointmentFilter::on(monday()));
    let tuesday_fetch = feed.begin(AppointmentFilter::on(tuesday()));

    let tuesday_list = store.list(&tuesday_fetch.filter).await.unwrap();
    assert!(feed.complete(tuesday_fetch, Ok(tuesday_list)));
    let monday_list = store.list(&monday_fetch.filter).await.unwrap();
    assert!(!feed.complete(monday_fetch, Ok(monday_list)));

    let snapshot = feed.snapshot().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].date, tuesday());
}

#[test_log::test(tokio::test)]
async fn failure_is_distinct_from_empty() {
    let store = OfflineSwitch::default();
    let feed = AppointmentFeed::new();

    let state = feed.refresh(&store, AppointmentFilter::on(monday())).await;
    assert!(matches!(state, FeedState::Ready(ref list) if list.is_empty()));

    store.go_offline();
    let state = feed.refresh(&store, AppointmentFilter::on(monday())).await;
    assert!(matches!(state, FeedState::Failed(_)));
    assert!(feed.snapshot().is_none());
}

/// ## Summary
/// A following feed picks up bookings made after it started.
#[test_log::test(tokio::test)]
async fn follow_refreshes_on_change() {
    let store = InMemoryStore::new();
    let feed = AppointmentFeed::new();
    let filter = AppointmentFilter::partition(monday(), ServiceCategory::Hair);

    let follower = pin!(feed.follow(&store, filter, store.subscribe()));
    let writer = pin!(async {
        store
            .create(draft(monday(), ServiceCategory::Hair, time(14, 0), 60))
            .await
            .unwrap();
        store
            .create(draft(monday(), ServiceCategory::Nails, time(14, 0), 60))
            .await
            .unwrap();
        loop {
            if feed.snapshot().is_some_and(|list| list.len() == 1) && !feed.is_refreshing() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    });

    let outcome = tokio::time::timeout(Duration::from_secs(5), select(follower, writer))
        .await
        .unwrap();
    assert!(matches!(outcome, Either::Right(_)));

    let snapshot = feed.snapshot().unwrap();
    assert_eq!(snapshot[0].service_category, ServiceCategory::Hair);
}
