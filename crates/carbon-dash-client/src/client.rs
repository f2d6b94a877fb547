//! Dashboard HTTP client implementation.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::{
    Alert, ApiErrorResponse, AssociationMetric, CarbonData, CorporateMetric, GlobalMetric,
    HealthStatus, InfrastructureMetric, Municipality, PolicyEffect, RealtimePoint,
};

const API_PREFIX: &str = "/api/v1";

/// Dashboard API client.
///
/// Every method is a single `GET`; nothing is cached.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: String,
}

impl DashboardClient {
    /// Create a new dashboard client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the dashboard service (e.g., `"http://carbon-dash:8080"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new dashboard client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base URL is empty".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the alert feed, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn alerts(&self) -> Result<Vec<Alert>, ClientError> {
        self.get("/alerts").await
    }

    /// Fetch the carbon samples, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn carbon_data(&self) -> Result<Vec<CarbonData>, ClientError> {
        self.get("/carbon_data").await
    }

    /// Fetch the global metrics singleton.
    ///
    /// `None` when the service has no record yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn global_metric(&self) -> Result<Option<GlobalMetric>, ClientError> {
        self.get("/global_metrics").await
    }

    /// Fetch the policy effects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn policy_effects(&self) -> Result<Vec<PolicyEffect>, ClientError> {
        self.get("/policy_effects").await
    }

    /// Fetch the infrastructure metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn infrastructure_metrics(&self) -> Result<Vec<InfrastructureMetric>, ClientError> {
        self.get("/infrastructure_metrics").await
    }

    /// Fetch the municipality profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn municipalities(&self) -> Result<Vec<Municipality>, ClientError> {
        self.get("/municipalities").await
    }

    /// Fetch the corporate snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn corporate_metrics(&self) -> Result<Vec<CorporateMetric>, ClientError> {
        self.get("/corporate_metrics").await
    }

    /// Fetch the association snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn association_metrics(&self) -> Result<Vec<AssociationMetric>, ClientError> {
        self.get("/association_metrics").await
    }

    /// Fetch the server-generated real-time series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn realtime(&self) -> Result<Vec<RealtimePoint>, ClientError> {
        self.get("/realtime").await
    }

    /// Check service readiness.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service is not ready.
    pub async fn ready(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health/ready", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{API_PREFIX}{path}", self.base_url);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        // Try to parse error response
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => Err(ClientError::Api {
                code: api_error.error.code,
                message: api_error.error.message,
                status: status.as_u16(),
            }),
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

impl ClientOptions {
    /// Create options with a request timeout.
    #[must_use]
    pub fn with_timeout(seconds: u64) -> Self {
        Self {
            timeout_seconds: seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = DashboardClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = DashboardClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = DashboardClient::new("/").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn client_options() {
        let options = ClientOptions::with_timeout(5);
        assert_eq!(options.timeout_seconds, 5);
        assert!(DashboardClient::with_options("http://localhost:8080", options).is_ok());
    }
}
