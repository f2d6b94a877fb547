//! Client tests against a mock dashboard service.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use carbon_dash_client::{
    AlertKind, ClientError, DashboardClient, DashboardSource, LiveSource,
};

fn alert(id: i64, kind: &str, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "alert_type": kind,
        "title": format!("alert {id}"),
        "message": "detail",
        "created_at": created_at,
        "updated_at": created_at,
    })
}

fn global_metric() -> serde_json::Value {
    json!({
        "id": 1,
        "reduction_rate": 8.7,
        "active_projects": 3247,
        "trading_volume": 156_432,
        "platform_users": 78_934,
        "data_quality": 94.2,
        "created_at": "2025-07-23T05:23:20.000000Z",
        "updated_at": "2025-07-23T05:23:20.000000Z",
    })
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn alerts_keep_server_order() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v1/alerts",
        json!([
            alert(3, "critical", "2025-07-23T05:18:20.000000Z"),
            alert(1, "warning", "2025-07-23T05:11:20.000000Z"),
            alert(2, "success", "2025-07-23T04:23:20.000000Z"),
        ]),
    )
    .await;

    let client = DashboardClient::new(server.uri()).unwrap();
    let alerts = client.alerts().await.unwrap();

    let ids: Vec<_> = alerts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(alerts[0].alert_type, AlertKind::Critical);
}

#[tokio::test]
async fn carbon_samples_may_be_undated() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v1/carbon_data",
        json!([
            {
                "id": 1,
                "value": 412.5,
                "recorded_at": "2025-07-22T00:00:00.000000Z",
                "created_at": "2025-07-23T00:00:00.000000Z",
                "updated_at": "2025-07-23T00:00:00.000000Z"
            },
            {
                "id": 2,
                "value": 399.0,
                "recorded_at": null,
                "created_at": "2025-07-23T00:00:00.000000Z",
                "updated_at": "2025-07-23T00:00:00.000000Z"
            }
        ]),
    )
    .await;

    let client = DashboardClient::new(server.uri()).unwrap();
    let samples = client.carbon_data().await.unwrap();

    assert_eq!(samples.len(), 2);
    assert!(samples[0].recorded_at.is_some());
    assert!(samples[1].recorded_at.is_none());
}

#[tokio::test]
async fn null_global_metric_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/global_metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri()).unwrap();

    assert!(client.global_metric().await.unwrap().is_none());
}

#[tokio::test]
async fn global_metric_is_decoded() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/global_metrics", global_metric()).await;

    let client = DashboardClient::new(server.uri()).unwrap();
    let metric = client.global_metric().await.unwrap().unwrap();

    assert_eq!(metric.id, 1);
    assert_eq!(metric.active_projects, 3247);
    assert!((metric.data_quality - 94.2).abs() < f64::EPSILON);
}

#[tokio::test]
async fn server_errors_map_to_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/alerts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": "internal_error", "message": "An internal error occurred" }
        })))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri()).unwrap();
    let err = client.alerts().await.unwrap_err();

    match err {
        ClientError::Api { code, status, .. } => {
            assert_eq!(code, "internal_error");
            assert_eq!(status, 500);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_errors_are_still_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/carbon_data"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri()).unwrap();
    let err = client.carbon_data().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(matches!(err, ClientError::Api { ref code, .. } if code == "unknown"));
}

#[tokio::test]
async fn malformed_body_is_a_serialization_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/alerts", json!({ "alerts": [] })).await;

    let client = DashboardClient::new(server.uri()).unwrap();

    assert!(matches!(
        client.alerts().await,
        Err(ClientError::Serialization(_))
    ));
}

#[tokio::test]
async fn catalog_lists_are_decoded() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v1/municipalities",
        json!([{
            "id": 1,
            "name": "제주특별자치도",
            "population": 670_000,
            "area": 1850,
            "carbon_emission": 5_000_000,
            "reduction_target": 50.0,
            "current_reduction": 35.8,
            "budget": 500_000_000_000_i64,
            "renewable_energy_rate": 32.7,
            "public_transport_rate": 45.1,
            "projects": [
                {
                    "name": "스마트 그리드 실증단지",
                    "type": "에너지",
                    "reduction": "30,000 tCO2",
                    "progress": 90
                }
            ],
            "sector_emissions": [{ "name": "에너지", "value": 45.8 }],
            "citizen_participation": [{ "name": "제주시", "rate": 81.2, "rank": 1 }],
            "created_at": "2025-07-23T00:00:00.000000Z",
            "updated_at": "2025-07-23T00:00:00.000000Z"
        }]),
    )
    .await;
    mount_json(
        &server,
        "/api/v1/policy_effects",
        json!([{
            "id": 1,
            "name": "대중교통 전환 확대",
            "budget": "약 2,180억원",
            "reduction": "연간 89만톤",
            "efficiency": "41만원/톤",
            "status": "progress",
            "description": "버스 노선 개편",
            "created_at": "2025-07-23T00:00:00.000000Z",
            "updated_at": "2025-07-23T00:00:00.000000Z"
        }]),
    )
    .await;

    let client = DashboardClient::new(server.uri()).unwrap();

    let municipalities = client.municipalities().await.unwrap();
    assert_eq!(municipalities[0].projects[0].project_type, "에너지");
    assert_eq!(municipalities[0].budget, 500_000_000_000);

    let policies = client.policy_effects().await.unwrap();
    assert_eq!(policies[0].status, "progress");
}

#[tokio::test]
async fn live_snapshot_combines_endpoints() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v1/alerts",
        json!([alert(1, "warning", "2025-07-23T05:11:20.000000Z")]),
    )
    .await;
    mount_json(&server, "/api/v1/carbon_data", json!([])).await;
    mount_json(&server, "/api/v1/global_metrics", global_metric()).await;

    let source = LiveSource::new(DashboardClient::new(server.uri()).unwrap());
    let snapshot = source.snapshot().await.unwrap();

    assert_eq!(snapshot.alerts.len(), 1);
    assert!(snapshot.carbon_data.is_empty());
    assert!(snapshot.global_metric.is_some());
    assert_eq!(snapshot.realtime.len(), 24);
}

#[tokio::test]
async fn live_snapshot_fails_when_any_endpoint_fails() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/alerts", json!([])).await;
    mount_json(&server, "/api/v1/carbon_data", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/global_metrics"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = LiveSource::new(DashboardClient::new(server.uri()).unwrap());

    assert!(source.snapshot().await.is_err());
}

#[tokio::test]
async fn live_source_serves_every_view() {
    let server = MockServer::start().await;
    let stamp = "2025-07-23T00:00:00.000000Z";
    mount_json(
        &server,
        "/api/v1/infrastructure_metrics",
        json!([{
            "id": 1,
            "name": "태양광 발전",
            "value": "673",
            "unit": "MW",
            "change": "+84 MW vs 2023년",
            "description": "서울시 전체 태양광 설치 용량",
            "created_at": stamp,
            "updated_at": stamp
        }]),
    )
    .await;
    mount_json(
        &server,
        "/api/v1/corporate_metrics",
        json!([{
            "id": 1,
            "esg_scores": { "overall": 78.4 },
            "carbon_scope": [],
            "cbam_data": [],
            "supply_chain_data": { "totalSuppliers": 847 },
            "created_at": stamp,
            "updated_at": stamp
        }]),
    )
    .await;
    mount_json(&server, "/api/v1/association_metrics", json!([])).await;

    let source: Box<dyn DashboardSource> =
        Box::new(LiveSource::new(DashboardClient::new(server.uri()).unwrap()));

    let infrastructure = source.infrastructure_metrics().await.unwrap();
    assert_eq!(infrastructure[0].unit, "MW");

    let corporate = source.corporate_metrics().await.unwrap();
    assert_eq!(corporate[0].esg_scores.as_value()["overall"], 78.4);

    assert!(source.association_metrics().await.unwrap().is_empty());
}
