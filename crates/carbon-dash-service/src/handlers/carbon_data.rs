//! Carbon time-series handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use carbon_dash_core::CarbonData;
use carbon_dash_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// List all carbon samples, oldest first by `recorded_at`.
///
/// This is the reverse of the alert feed: the series is chronological.
pub async fn list_carbon_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CarbonData>>, ApiError> {
    let samples = state.store.list_carbon_data().await?;
    tracing::debug!(count = samples.len(), "Listed carbon data");
    Ok(Json(samples))
}
