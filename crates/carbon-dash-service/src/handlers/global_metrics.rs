//! Global metrics singleton handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use carbon_dash_core::GlobalMetric;
use carbon_dash_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// Get the global metric singleton.
///
/// Responds with JSON `null` when nothing has been written yet, so clients can
/// tell "no data" apart from a populated record and from a failure.
pub async fn get_global_metric(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<GlobalMetric>>, ApiError> {
    let metric = state.store.global_metric().await?;
    if metric.is_none() {
        tracing::debug!("Global metric not yet written");
    }
    Ok(Json(metric))
}
