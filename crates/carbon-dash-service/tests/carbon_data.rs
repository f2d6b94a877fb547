//! Carbon time-series integration tests.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use common::TestHarness;

use carbon_dash_core::NewCarbonData;
use carbon_dash_store::Store;

#[tokio::test]
async fn empty_series_is_an_empty_array() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/api/v1/carbon_data").await;

    response.assert_status_ok();
    let body: Vec<serde_json::Value> = response.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn ten_days_are_returned_oldest_first() {
    let harness = TestHarness::new().await;
    let now = Utc::now();

    // Newest first on insert; the endpoint must reverse it.
    for days in 1..=10 {
        harness
            .store
            .insert_carbon_data(&NewCarbonData::at(
                f64::from(days) * 10.0,
                now - Duration::days(i64::from(days)),
            ))
            .await
            .unwrap();
    }

    let response = harness.server.get("/api/v1/carbon_data").await;

    response.assert_status_ok();
    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 10);
    assert_eq!(body[0]["value"], 100.0);
    assert_eq!(body[9]["value"], 10.0);

    let recorded: Vec<DateTime<Utc>> = body
        .iter()
        .map(|s| s["recorded_at"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(recorded.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn sample_json_has_contract_fields() {
    let harness = TestHarness::new().await;
    harness
        .store
        .insert_carbon_data(&NewCarbonData::at(321.5, Utc::now()))
        .await
        .unwrap();

    let body: serde_json::Value = harness.server.get("/api/v1/carbon_data").await.json();

    for field in ["id", "value", "recorded_at", "created_at", "updated_at"] {
        assert!(body[0].get(field).is_some(), "missing {field}");
    }
    assert_eq!(body[0]["value"], 321.5);
}

#[tokio::test]
async fn repeated_reads_are_byte_identical() {
    let harness = TestHarness::new().await;
    let now = Utc::now();
    for (value, days) in [(12.5, 2), (7.25, 1)] {
        harness
            .store
            .insert_carbon_data(&NewCarbonData::at(value, now - Duration::days(days)))
            .await
            .unwrap();
    }
    harness
        .store
        .insert_carbon_data(&NewCarbonData {
            value: 3.0,
            recorded_at: None,
        })
        .await
        .unwrap();

    let first = harness.server.get("/api/v1/carbon_data").await.text();
    let second = harness.server.get("/api/v1/carbon_data").await.text();

    assert_eq!(first, second);
    assert!(first.ends_with("}]"));
}

#[tokio::test]
async fn store_failure_is_a_server_error() {
    let harness = TestHarness::new().await;
    harness.break_store().await;

    harness
        .server
        .get("/api/v1/carbon_data")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
