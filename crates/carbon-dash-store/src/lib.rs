//! SQLite storage layer for the carbon dashboard.
//!
//! This crate provides persistent storage for the dashboard's eight tables
//! using `SQLite` through `sqlx`. Each table is independent; no read joins.
//!
//! # Orderings
//!
//! - `alerts`: newest first by `created_at`
//! - `carbon_data`: oldest first by `recorded_at`, undated samples last
//! - `global_metrics`: the first row by creation order (the singleton)
//! - every other table: insertion order
//!
//! # Example
//!
//! ```no_run
//! use carbon_dash_core::{AlertKind, NewAlert};
//! use carbon_dash_store::{SqliteStore, Store};
//!
//! # async fn example() -> carbon_dash_store::Result<()> {
//! let store = SqliteStore::open("/tmp/carbon-dash.db").await?;
//!
//! store
//!     .insert_alert(&NewAlert::new(AlertKind::Warning, "Load rising", "85% of capacity"))
//!     .await?;
//!
//! let feed = store.list_alerts().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod schema;
pub mod seed;
pub mod sqlite;

mod rows;

pub use error::{Result, StoreError};
pub use seed::seed_sample_data;
pub use sqlite::SqliteStore;

use async_trait::async_trait;

use carbon_dash_core::{
    Alert, AssociationMetric, CarbonData, CorporateMetric, GlobalMetric, GlobalMetricValues,
    InfrastructureMetric, Municipality, NewAlert, NewAssociationMetric, NewCarbonData,
    NewCorporateMetric, NewInfrastructureMetric, NewMunicipality, NewPolicyEffect, PolicyEffect,
};

/// The storage trait defining all database operations.
///
/// Reads never substitute an empty result for a failure: an unreachable
/// database is always an `Err`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Check that the database answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable.
    async fn ping(&self) -> Result<()>;

    // =========================================================================
    // Feed and series
    // =========================================================================

    /// Insert an alert.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_alert(&self, alert: &NewAlert) -> Result<Alert>;

    /// List all alerts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_alerts(&self) -> Result<Vec<Alert>>;

    /// Insert a carbon sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_carbon_data(&self, sample: &NewCarbonData) -> Result<CarbonData>;

    /// List all carbon samples, oldest first by `recorded_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_carbon_data(&self) -> Result<Vec<CarbonData>>;

    // =========================================================================
    // Singleton
    // =========================================================================

    /// Insert or update the global metric singleton.
    ///
    /// The row always lives at `GLOBAL_METRIC_ID`; `created_at` is kept on update.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn put_global_metric(&self, values: &GlobalMetricValues) -> Result<GlobalMetric>;

    /// Get the global metric singleton, if one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn global_metric(&self) -> Result<Option<GlobalMetric>>;

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Insert a policy effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_policy_effect(&self, effect: &NewPolicyEffect) -> Result<PolicyEffect>;

    /// List policy effects in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_policy_effects(&self) -> Result<Vec<PolicyEffect>>;

    /// Insert an infrastructure metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_infrastructure_metric(
        &self,
        metric: &NewInfrastructureMetric,
    ) -> Result<InfrastructureMetric>;

    /// List infrastructure metrics in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_infrastructure_metrics(&self) -> Result<Vec<InfrastructureMetric>>;

    /// Insert a municipality after validating its nested lists.
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` if the profile is invalid.
    /// - `StoreError::Database` if the database operation fails.
    async fn insert_municipality(&self, municipality: &NewMunicipality) -> Result<Municipality>;

    /// List municipalities in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_municipalities(&self) -> Result<Vec<Municipality>>;

    // =========================================================================
    // Organizations
    // =========================================================================

    /// Insert a corporate snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_corporate_metric(&self, metric: &NewCorporateMetric)
        -> Result<CorporateMetric>;

    /// List corporate snapshots in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_corporate_metrics(&self) -> Result<Vec<CorporateMetric>>;

    /// Insert an association snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_association_metric(
        &self,
        metric: &NewAssociationMetric,
    ) -> Result<AssociationMetric>;

    /// List association snapshots in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_association_metrics(&self) -> Result<Vec<AssociationMetric>>;
}
