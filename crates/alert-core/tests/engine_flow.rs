//! Integration tests for the alert engine.
//!
//! These drive the store the way the dashboard does: support and view events
//! go in, and every read recomputes status and projections from a snapshot.
//!
//! Run:
//!   cargo test -p alert-core --test engine_flow

use std::sync::Arc;

use alert_core::{
    compute_status, confidence_for, projection, seed, Alert, AlertStore, Category, Confidence,
    Priority, StatusContext, StatusLevel, StoreError,
};
use chrono::Utc;

fn context() -> StatusContext {
    StatusContext::new("Ranchi", 18)
}

fn demo_store() -> AlertStore {
    AlertStore::from_alerts(seed::demo_alerts(Utc::now())).unwrap()
}

// ============================================================================
// Support flow
// ============================================================================

mod support_flow {
    use super::*;

    #[tokio::test]
    async fn test_low_alert_climbs_to_high() {
        let store = demo_store();

        let mut alert = store.get("alert-003").await.unwrap();
        assert_eq!(alert.confidence(), Confidence::Low);

        while alert.accepts_support() {
            alert = store.support_alert("alert-003").await.unwrap();
        }

        assert_eq!(alert.supporter_count(), 40);
        assert_eq!(alert.confidence(), Confidence::High);
        assert_eq!(store.get("alert-003").await.unwrap(), alert);
    }

    #[tokio::test]
    async fn test_stored_confidence_always_matches_table() {
        let store = demo_store();

        for _ in 0..20 {
            for alert in store.all().await {
                store.support_alert(alert.id.as_str()).await.unwrap();
            }
            for alert in store.all().await {
                assert_eq!(alert.confidence(), confidence_for(alert.supporter_count()));
            }
        }
    }

    #[tokio::test]
    async fn test_stale_click_is_not_found() {
        let store = demo_store();
        let before = store.all().await;

        let err = store.support_alert("alert-999").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.to_string(), "alert not found: alert-999");
        assert_eq!(store.all().await, before);
    }
}

// ============================================================================
// Derived views
// ============================================================================

mod derived_views {
    use super::*;

    #[tokio::test]
    async fn test_status_tracks_store_contents() {
        let store = demo_store();
        let status = compute_status(&store.all().await, &context());
        assert_eq!(status.status, StatusLevel::Calm);

        store
            .insert(Alert::new("alert-006", Category::Water, "Low pressure", Utc::now()))
            .await
            .unwrap();
        let status = compute_status(&store.all().await, &context());
        assert_eq!(status.status, StatusLevel::Moderate);
        assert_eq!(status.monitoring_count, 6);

        for i in 7..9 {
            let alert = Alert::new(format!("alert-00{}", i), Category::Traffic, "Jam", Utc::now())
                .with_priority(Priority::High);
            store.insert(alert).await.unwrap();
        }
        let status = compute_status(&store.all().await, &context());
        assert_eq!(status.status, StatusLevel::Alert);
        assert_eq!(status.high_priority_count, 3);
    }

    #[tokio::test]
    async fn test_reaching_high_confidence_reduces_active_count() {
        let store = demo_store();
        let before = compute_status(&store.all().await, &context());

        for _ in 0..6 {
            store.support_alert("alert-005").await.unwrap();
        }
        let after = compute_status(&store.all().await, &context());

        assert_eq!(before.active_alert_count, 4);
        assert_eq!(after.active_alert_count, 3);
    }

    #[tokio::test]
    async fn test_projections_do_not_mutate_store() {
        let store = demo_store();
        let snapshot = store.all().await;

        let feed = projection::feed(&snapshot);
        let markers = projection::map_markers(&snapshot);
        let operator = projection::operator_view(&snapshot);

        assert_eq!(feed.len(), 5);
        assert_eq!(markers.len(), 4);
        assert_eq!(operator.alerts.len(), 5);
        assert_eq!(operator.breakdown.low, 1);
        assert_eq!(store.all().await, snapshot);
    }
}

// ============================================================================
// Concurrency
// ============================================================================

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_readers_see_consistent_alerts_during_writes() {
        let store = Arc::new(demo_store());

        let writer = tokio::spawn({
            let store = Arc::clone(&store);
            async move {
                for _ in 0..100 {
                    store.support_alert("alert-002").await.unwrap();
                }
            }
        });

        let reader = tokio::spawn({
            let store = Arc::clone(&store);
            async move {
                let mut last = 0;
                for _ in 0..100 {
                    let alert = store.get("alert-002").await.unwrap();
                    assert!(alert.supporter_count() >= last);
                    assert_eq!(alert.confidence(), confidence_for(alert.supporter_count()));
                    last = alert.supporter_count();
                }
            }
        });

        writer.await.unwrap();
        reader.await.unwrap();

        assert_eq!(store.get("alert-002").await.unwrap().supporter_count(), 123);
    }
}
