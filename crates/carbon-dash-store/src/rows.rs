//! Row types decoded from SQLite and their conversion into core types.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use carbon_dash_core::{
    Alert, AssociationMetric, CarbonData, CitizenParticipation, CorporateMetric, DashboardError,
    Document, GlobalMetric, InfrastructureMetric, MunicipalProject, Municipality, PolicyEffect,
    SectorEmission,
};

use crate::error::StoreError;

/// Format a timestamp for storage.
///
/// Fixed microsecond precision keeps the text form sortable, so `ORDER BY` on
/// a timestamp column is chronological.
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Debug, FromRow)]
pub(crate) struct AlertRow {
    id: i64,
    alert_type: String,
    title: String,
    message: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AlertRow> for Alert {
    type Error = StoreError;

    fn try_from(row: AlertRow) -> Result<Self, Self::Error> {
        let alert_type = row
            .alert_type
            .parse()
            .map_err(|e: DashboardError| StoreError::Serialization(e.to_string()))?;

        Ok(Self {
            id: row.id,
            alert_type,
            title: row.title,
            message: row.message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct CarbonDataRow {
    id: i64,
    value: f64,
    recorded_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CarbonDataRow> for CarbonData {
    fn from(row: CarbonDataRow) -> Self {
        Self {
            id: row.id,
            value: row.value,
            recorded_at: row.recorded_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct GlobalMetricRow {
    id: i64,
    reduction_rate: f64,
    active_projects: i64,
    trading_volume: i64,
    platform_users: i64,
    data_quality: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<GlobalMetricRow> for GlobalMetric {
    fn from(row: GlobalMetricRow) -> Self {
        Self {
            id: row.id,
            reduction_rate: row.reduction_rate,
            active_projects: row.active_projects,
            trading_volume: row.trading_volume,
            platform_users: row.platform_users,
            data_quality: row.data_quality,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PolicyEffectRow {
    id: i64,
    name: String,
    budget: String,
    reduction: String,
    efficiency: String,
    status: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PolicyEffectRow> for PolicyEffect {
    fn from(row: PolicyEffectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            budget: row.budget,
            reduction: row.reduction,
            efficiency: row.efficiency,
            status: row.status,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct InfrastructureMetricRow {
    id: i64,
    name: String,
    value: String,
    unit: String,
    change: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<InfrastructureMetricRow> for InfrastructureMetric {
    fn from(row: InfrastructureMetricRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            value: row.value,
            unit: row.unit,
            change: row.change,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct MunicipalityRow {
    id: i64,
    name: String,
    population: i64,
    area: i64,
    carbon_emission: i64,
    reduction_target: f64,
    current_reduction: f64,
    budget: i64,
    renewable_energy_rate: f64,
    public_transport_rate: f64,
    projects: Json<Vec<MunicipalProject>>,
    sector_emissions: Json<Vec<SectorEmission>>,
    citizen_participation: Json<Vec<CitizenParticipation>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MunicipalityRow> for Municipality {
    fn from(row: MunicipalityRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            population: row.population,
            area: row.area,
            carbon_emission: row.carbon_emission,
            reduction_target: row.reduction_target,
            current_reduction: row.current_reduction,
            budget: row.budget,
            renewable_energy_rate: row.renewable_energy_rate,
            public_transport_rate: row.public_transport_rate,
            projects: row.projects.0,
            sector_emissions: row.sector_emissions.0,
            citizen_participation: row.citizen_participation.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct CorporateMetricRow {
    id: i64,
    esg_scores: Json<Document>,
    carbon_scope: Json<Document>,
    cbam_data: Json<Document>,
    supply_chain_data: Json<Document>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CorporateMetricRow> for CorporateMetric {
    fn from(row: CorporateMetricRow) -> Self {
        Self {
            id: row.id,
            esg_scores: row.esg_scores.0,
            carbon_scope: row.carbon_scope.0,
            cbam_data: row.cbam_data.0,
            supply_chain_data: row.supply_chain_data.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct AssociationMetricRow {
    id: i64,
    member_data: Json<Document>,
    regional_performance: Json<Document>,
    activity_utilization: Json<Document>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AssociationMetricRow> for AssociationMetric {
    fn from(row: AssociationMetricRow) -> Self {
        Self {
            id: row.id,
            member_data: row.member_data.0,
            regional_performance: row.regional_performance.0,
            activity_utilization: row.activity_utilization.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
