//! `SQLite` storage implementation.
//!
//! This module provides the `SqliteStore` implementation of the `Store` trait.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;

use carbon_dash_core::{
    Alert, AssociationMetric, CarbonData, CorporateMetric, GlobalMetric, GlobalMetricValues,
    InfrastructureMetric, Municipality, NewAlert, NewAssociationMetric, NewCarbonData,
    NewCorporateMetric, NewInfrastructureMetric, NewMunicipality, NewPolicyEffect, PolicyEffect,
    GLOBAL_METRIC_ID,
};

use crate::error::Result;
use crate::rows::{
    timestamp, AlertRow, AssociationMetricRow, CarbonDataRow, CorporateMetricRow,
    GlobalMetricRow, InfrastructureMetricRow, MunicipalityRow, PolicyEffectRow,
};
use crate::schema::{
    all_tables, order, table, ALERT_COLUMNS, ASSOCIATION_METRIC_COLUMNS, CARBON_DATA_COLUMNS,
    CORPORATE_METRIC_COLUMNS, GLOBAL_METRIC_COLUMNS, INFRASTRUCTURE_METRIC_COLUMNS,
    MUNICIPALITY_COLUMNS, POLICY_EFFECT_COLUMNS,
};
use crate::Store;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Options shared by every file-backed pool.
fn file_options(options: SqliteConnectOptions) -> SqliteConnectOptions {
    options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
}

/// SQLite-backed storage implementation.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open or create a database file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let options = file_options(SqliteConnectOptions::new().filename(path));

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Connect using a `sqlite:` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be
    /// opened or migrated.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = file_options(SqliteConnectOptions::from_str(url)?);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Create a private in-memory database.
    ///
    /// The pool holds a single connection that never expires; the database
    /// lives as long as the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        MIGRATOR.run(&pool).await?;
        tracing::debug!("Schema migrations applied");
        Ok(Self { pool })
    }

    /// Close the pool. Every later operation fails with `StoreError::Database`.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Count the rows of every table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn row_counts(&self) -> Result<Vec<(&'static str, i64)>> {
        let mut counts = Vec::new();
        for name in all_tables() {
            let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {name}"))
                .fetch_one(&self.pool)
                .await?;
            counts.push((name, count));
        }
        Ok(counts)
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // =========================================================================
    // Feed and series
    // =========================================================================

    async fn insert_alert(&self, alert: &NewAlert) -> Result<Alert> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO {} (alert_type, title, message, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {ALERT_COLUMNS}",
            table::ALERTS
        );

        let row: AlertRow = sqlx::query_as(&sql)
            .bind(alert.alert_type.as_str())
            .bind(&alert.title)
            .bind(&alert.message)
            .bind(timestamp(alert.created_at.unwrap_or(now)))
            .bind(timestamp(now))
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    async fn list_alerts(&self) -> Result<Vec<Alert>> {
        let sql = format!(
            "SELECT {ALERT_COLUMNS} FROM {} ORDER BY {}",
            table::ALERTS,
            order::ALERTS
        );

        sqlx::query_as::<_, AlertRow>(&sql)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Alert::try_from)
            .collect()
    }

    async fn insert_carbon_data(&self, sample: &NewCarbonData) -> Result<CarbonData> {
        let now = timestamp(Utc::now());
        let sql = format!(
            "INSERT INTO {} (value, recorded_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING {CARBON_DATA_COLUMNS}",
            table::CARBON_DATA
        );

        let row: CarbonDataRow = sqlx::query_as(&sql)
            .bind(sample.value)
            .bind(sample.recorded_at.map(timestamp))
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_carbon_data(&self) -> Result<Vec<CarbonData>> {
        let sql = format!(
            "SELECT {CARBON_DATA_COLUMNS} FROM {} ORDER BY {}",
            table::CARBON_DATA,
            order::CARBON_DATA
        );

        let rows: Vec<CarbonDataRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    // =========================================================================
    // Singleton
    // =========================================================================

    async fn put_global_metric(&self, values: &GlobalMetricValues) -> Result<GlobalMetric> {
        let now = timestamp(Utc::now());
        let sql = format!(
            "INSERT INTO {} (id, reduction_rate, active_projects, trading_volume, \
             platform_users, data_quality, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT (id) DO UPDATE SET \
             reduction_rate = excluded.reduction_rate, \
             active_projects = excluded.active_projects, \
             trading_volume = excluded.trading_volume, \
             platform_users = excluded.platform_users, \
             data_quality = excluded.data_quality, \
             updated_at = excluded.updated_at \
             RETURNING {GLOBAL_METRIC_COLUMNS}",
            table::GLOBAL_METRICS
        );

        let row: GlobalMetricRow = sqlx::query_as(&sql)
            .bind(GLOBAL_METRIC_ID)
            .bind(values.reduction_rate)
            .bind(values.active_projects)
            .bind(values.trading_volume)
            .bind(values.platform_users)
            .bind(values.data_quality)
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await?;

        let metric = GlobalMetric::from(row);
        tracing::debug!(id = metric.id, updated_at = %metric.updated_at, "Global metric written");
        Ok(metric)
    }

    async fn global_metric(&self) -> Result<Option<GlobalMetric>> {
        let sql = format!(
            "SELECT {GLOBAL_METRIC_COLUMNS} FROM {} ORDER BY {} LIMIT 1",
            table::GLOBAL_METRICS,
            order::GLOBAL_METRICS
        );

        let row: Option<GlobalMetricRow> =
            sqlx::query_as(&sql).fetch_optional(&self.pool).await?;
        Ok(row.map(Into::into))
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    async fn insert_policy_effect(&self, effect: &NewPolicyEffect) -> Result<PolicyEffect> {
        let now = timestamp(Utc::now());
        let sql = format!(
            "INSERT INTO {} (name, budget, reduction, efficiency, status, description, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {POLICY_EFFECT_COLUMNS}",
            table::POLICY_EFFECTS
        );

        let row: PolicyEffectRow = sqlx::query_as(&sql)
            .bind(&effect.name)
            .bind(&effect.budget)
            .bind(&effect.reduction)
            .bind(&effect.efficiency)
            .bind(&effect.status)
            .bind(&effect.description)
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_policy_effects(&self) -> Result<Vec<PolicyEffect>> {
        let sql = format!(
            "SELECT {POLICY_EFFECT_COLUMNS} FROM {} ORDER BY {}",
            table::POLICY_EFFECTS,
            order::INSERTION
        );

        let rows: Vec<PolicyEffectRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_infrastructure_metric(
        &self,
        metric: &NewInfrastructureMetric,
    ) -> Result<InfrastructureMetric> {
        let now = timestamp(Utc::now());
        let sql = format!(
            "INSERT INTO {} (name, value, unit, change, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {INFRASTRUCTURE_METRIC_COLUMNS}",
            table::INFRASTRUCTURE_METRICS
        );

        let row: InfrastructureMetricRow = sqlx::query_as(&sql)
            .bind(&metric.name)
            .bind(&metric.value)
            .bind(&metric.unit)
            .bind(&metric.change)
            .bind(&metric.description)
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_infrastructure_metrics(&self) -> Result<Vec<InfrastructureMetric>> {
        let sql = format!(
            "SELECT {INFRASTRUCTURE_METRIC_COLUMNS} FROM {} ORDER BY {}",
            table::INFRASTRUCTURE_METRICS,
            order::INSERTION
        );

        let rows: Vec<InfrastructureMetricRow> =
            sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_municipality(&self, municipality: &NewMunicipality) -> Result<Municipality> {
        municipality.validate()?;

        let now = timestamp(Utc::now());
        let sql = format!(
            "INSERT INTO {} (name, population, area, carbon_emission, reduction_target, \
             current_reduction, budget, renewable_energy_rate, public_transport_rate, \
             projects, sector_emissions, citizen_participation, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {MUNICIPALITY_COLUMNS}",
            table::MUNICIPALITIES
        );

        let row: MunicipalityRow = sqlx::query_as(&sql)
            .bind(&municipality.name)
            .bind(municipality.population)
            .bind(municipality.area)
            .bind(municipality.carbon_emission)
            .bind(municipality.reduction_target)
            .bind(municipality.current_reduction)
            .bind(municipality.budget)
            .bind(municipality.renewable_energy_rate)
            .bind(municipality.public_transport_rate)
            .bind(Json(&municipality.projects))
            .bind(Json(&municipality.sector_emissions))
            .bind(Json(&municipality.citizen_participation))
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_municipalities(&self) -> Result<Vec<Municipality>> {
        let sql = format!(
            "SELECT {MUNICIPALITY_COLUMNS} FROM {} ORDER BY {}",
            table::MUNICIPALITIES,
            order::INSERTION
        );

        let rows: Vec<MunicipalityRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    // =========================================================================
    // Organizations
    // =========================================================================

    async fn insert_corporate_metric(
        &self,
        metric: &NewCorporateMetric,
    ) -> Result<CorporateMetric> {
        let now = timestamp(Utc::now());
        let sql = format!(
            "INSERT INTO {} (esg_scores, carbon_scope, cbam_data, supply_chain_data, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {CORPORATE_METRIC_COLUMNS}",
            table::CORPORATE_METRICS
        );

        let row: CorporateMetricRow = sqlx::query_as(&sql)
            .bind(Json(&metric.esg_scores))
            .bind(Json(&metric.carbon_scope))
            .bind(Json(&metric.cbam_data))
            .bind(Json(&metric.supply_chain_data))
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_corporate_metrics(&self) -> Result<Vec<CorporateMetric>> {
        let sql = format!(
            "SELECT {CORPORATE_METRIC_COLUMNS} FROM {} ORDER BY {}",
            table::CORPORATE_METRICS,
            order::INSERTION
        );

        let rows: Vec<CorporateMetricRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_association_metric(
        &self,
        metric: &NewAssociationMetric,
    ) -> Result<AssociationMetric> {
        let now = timestamp(Utc::now());
        let sql = format!(
            "INSERT INTO {} (member_data, regional_performance, activity_utilization, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?) \
             RETURNING {ASSOCIATION_METRIC_COLUMNS}",
            table::ASSOCIATION_METRICS
        );

        let row: AssociationMetricRow = sqlx::query_as(&sql)
            .bind(Json(&metric.member_data))
            .bind(Json(&metric.regional_performance))
            .bind(Json(&metric.activity_utilization))
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_association_metrics(&self) -> Result<Vec<AssociationMetric>> {
        let sql = format!(
            "SELECT {ASSOCIATION_METRIC_COLUMNS} FROM {} ORDER BY {}",
            table::ASSOCIATION_METRICS,
            order::INSERTION
        );

        let rows: Vec<AssociationMetricRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
