//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{
    alerts, carbon_data, catalog, global_metrics, health, organizations, realtime,
};
use crate::state::AppState;

/// Maximum concurrent requests for API endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 64;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Health
/// - `GET /health` - Liveness
/// - `GET /health/ready` - Store reachability
///
/// ## Feed and series
/// - `GET /api/v1/alerts` - Alerts, newest first
/// - `GET /api/v1/carbon_data` - Carbon samples, oldest first
/// - `GET /api/v1/global_metrics` - The singleton, or `null`
/// - `GET /api/v1/realtime` - Synthetic hourly series
///
/// ## Catalog
/// - `GET /api/v1/policy_effects`
/// - `GET /api/v1/infrastructure_metrics`
/// - `GET /api/v1/municipalities`
///
/// ## Organizations
/// - `GET /api/v1/corporate_metrics`
/// - `GET /api/v1/association_metrics`
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let api_routes = Router::new()
        .route("/alerts", get(alerts::list_alerts))
        .route("/carbon_data", get(carbon_data::list_carbon_data))
        .route("/global_metrics", get(global_metrics::get_global_metric))
        .route("/realtime", get(realtime::get_series))
        .route("/policy_effects", get(catalog::list_policy_effects))
        .route(
            "/infrastructure_metrics",
            get(catalog::list_infrastructure_metrics),
        )
        .route("/municipalities", get(catalog::list_municipalities))
        .route(
            "/corporate_metrics",
            get(organizations::list_corporate_metrics),
        )
        .route(
            "/association_metrics",
            get(organizations::list_association_metrics),
        )
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .nest("/api/v1", api_routes)
        .fallback(not_found)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
