//! Wire types for the dashboard API.

use serde::{Deserialize, Serialize};

pub use carbon_dash_core::{
    Alert, AlertKind, AssociationMetric, CarbonData, CorporateMetric, GlobalMetric,
    InfrastructureMetric, Municipality, PolicyEffect, RealtimePoint,
};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
