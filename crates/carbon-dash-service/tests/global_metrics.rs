//! Global metrics singleton integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;

use carbon_dash_core::{GlobalMetric, GlobalMetricValues};
use carbon_dash_store::Store;

fn values() -> GlobalMetricValues {
    GlobalMetricValues {
        reduction_rate: 8.7,
        active_projects: 3247,
        trading_volume: 156_432,
        platform_users: 78_934,
        data_quality: 94.2,
    }
}

#[tokio::test]
async fn empty_table_returns_null() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/api/v1/global_metrics").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "null");
}

#[tokio::test]
async fn single_row_round_trips() {
    let harness = TestHarness::new().await;
    let stored = harness.store.put_global_metric(&values()).await.unwrap();

    let response = harness.server.get("/api/v1/global_metrics").await;

    response.assert_status_ok();
    let body: GlobalMetric = response.json();
    assert_eq!(body, stored);
    assert_eq!(body.values(), values());
}

#[tokio::test]
async fn response_is_a_flat_object() {
    let harness = TestHarness::new().await;
    harness.store.put_global_metric(&values()).await.unwrap();

    let body: serde_json::Value = harness.server.get("/api/v1/global_metrics").await.json();

    assert!(body.is_object());
    for field in [
        "id",
        "reduction_rate",
        "active_projects",
        "trading_volume",
        "platform_users",
        "data_quality",
        "created_at",
        "updated_at",
    ] {
        assert!(body.get(field).is_some(), "missing {field}");
    }
}

#[tokio::test]
async fn rewriting_updates_the_same_record() {
    let harness = TestHarness::new().await;
    let first = harness.store.put_global_metric(&values()).await.unwrap();

    let mut next = values();
    next.platform_users = 80_000;
    harness.store.put_global_metric(&next).await.unwrap();

    let body: GlobalMetric = harness.server.get("/api/v1/global_metrics").await.json();
    assert_eq!(body.id, first.id);
    assert_eq!(body.platform_users, 80_000);
}

#[tokio::test]
async fn repeated_reads_are_byte_identical() {
    let harness = TestHarness::new().await;
    harness.store.put_global_metric(&values()).await.unwrap();

    let first = harness.server.get("/api/v1/global_metrics").await.text();
    let second = harness.server.get("/api/v1/global_metrics").await.text();

    assert_eq!(first, second);
}

#[tokio::test]
async fn store_failure_is_not_null() {
    let harness = TestHarness::new().await;
    harness.break_store().await;

    let response = harness.server.get("/api/v1/global_metrics").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_ne!(response.text(), "null");
}
