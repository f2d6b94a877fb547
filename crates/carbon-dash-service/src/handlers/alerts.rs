//! Alert feed handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use carbon_dash_core::Alert;
use carbon_dash_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// List all alerts, newest first.
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Alert>>, ApiError> {
    let alerts = state.store.list_alerts().await?;
    tracing::debug!(count = alerts.len(), "Listed alerts");
    Ok(Json(alerts))
}
