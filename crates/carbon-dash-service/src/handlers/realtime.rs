//! Synthetic real-time series handler.

use axum::Json;
use chrono::Utc;

use carbon_dash_core::{generate_series, RealtimePoint};

/// Generate a fresh 24-hour series ending now.
///
/// Nothing is read or stored; every call draws new noise.
pub async fn get_series() -> Json<Vec<RealtimePoint>> {
    Json(generate_series(Utc::now(), &mut rand::thread_rng()))
}
