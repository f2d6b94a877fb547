//! Policy, infrastructure and municipality handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use carbon_dash_core::{InfrastructureMetric, Municipality, PolicyEffect};
use carbon_dash_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// List policy effects.
pub async fn list_policy_effects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PolicyEffect>>, ApiError> {
    Ok(Json(state.store.list_policy_effects().await?))
}

/// List infrastructure metrics.
pub async fn list_infrastructure_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InfrastructureMetric>>, ApiError> {
    Ok(Json(state.store.list_infrastructure_metrics().await?))
}

/// List municipality profiles with their nested project, sector and
/// participation lists.
pub async fn list_municipalities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Municipality>>, ApiError> {
    let municipalities = state.store.list_municipalities().await?;
    tracing::debug!(count = municipalities.len(), "Listed municipalities");
    Ok(Json(municipalities))
}
