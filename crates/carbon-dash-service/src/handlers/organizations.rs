//! Corporate and association snapshot handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use carbon_dash_core::{AssociationMetric, CorporateMetric};
use carbon_dash_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// List corporate ESG snapshots.
pub async fn list_corporate_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CorporateMetric>>, ApiError> {
    Ok(Json(state.store.list_corporate_metrics().await?))
}

/// List association snapshots.
pub async fn list_association_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AssociationMetric>>, ApiError> {
    Ok(Json(state.store.list_association_metrics().await?))
}
