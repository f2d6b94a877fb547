//! Per-region aggregate profiles.
//!
//! A municipality carries three nested lists that are persisted as JSON. Each
//! list has a fixed record type, validated before the row is written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Share of emissions attributed to one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorEmission {
    /// Sector label.
    pub name: String,
    /// Share in percent. Carbon sinks are negative.
    pub value: f64,
}

/// Citizen participation for one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitizenParticipation {
    /// District label.
    pub name: String,
    /// Participation rate in percent (0-100).
    pub rate: f64,
    /// Rank within the municipality, starting at 1.
    pub rank: u32,
}

/// A reduction project run by the municipality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalProject {
    /// Project name.
    pub name: String,
    /// Sector label.
    #[serde(rename = "type")]
    pub project_type: String,
    /// Expected reduction, formatted.
    pub reduction: String,
    /// Completion in percent (0-100).
    pub progress: u8,
}

/// A stored municipality profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    /// Row identifier.
    pub id: i64,
    /// Region name.
    pub name: String,
    /// Residents.
    pub population: i64,
    /// Area in km².
    pub area: i64,
    /// Annual emissions in tCO2.
    pub carbon_emission: i64,
    /// Reduction target in percent.
    pub reduction_target: f64,
    /// Reduction achieved so far in percent.
    pub current_reduction: f64,
    /// Climate budget in KRW.
    pub budget: i64,
    /// Renewable share of energy in percent.
    pub renewable_energy_rate: f64,
    /// Public transport modal share in percent.
    pub public_transport_rate: f64,
    /// Reduction projects.
    pub projects: Vec<MunicipalProject>,
    /// Emissions by sector.
    pub sector_emissions: Vec<SectorEmission>,
    /// Participation by district.
    pub citizen_participation: Vec<CitizenParticipation>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a municipality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMunicipality {
    /// Region name.
    pub name: String,
    /// Residents.
    pub population: i64,
    /// Area in km².
    pub area: i64,
    /// Annual emissions in tCO2.
    pub carbon_emission: i64,
    /// Reduction target in percent.
    pub reduction_target: f64,
    /// Reduction achieved so far in percent.
    pub current_reduction: f64,
    /// Climate budget in KRW.
    pub budget: i64,
    /// Renewable share of energy in percent.
    pub renewable_energy_rate: f64,
    /// Public transport modal share in percent.
    pub public_transport_rate: f64,
    /// Reduction projects.
    pub projects: Vec<MunicipalProject>,
    /// Emissions by sector.
    pub sector_emissions: Vec<SectorEmission>,
    /// Participation by district.
    pub citizen_participation: Vec<CitizenParticipation>,
}

impl NewMunicipality {
    /// Check the profile and its nested lists before writing.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidValue` for the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DashboardError::invalid_value("name", "must not be empty"));
        }
        for (field, value) in [
            ("population", self.population),
            ("area", self.area),
            ("carbon_emission", self.carbon_emission),
            ("budget", self.budget),
        ] {
            if value < 0 {
                return Err(DashboardError::invalid_value(field, "must not be negative"));
            }
        }
        for (field, value) in [
            ("reduction_target", self.reduction_target),
            ("current_reduction", self.current_reduction),
            ("renewable_energy_rate", self.renewable_energy_rate),
            ("public_transport_rate", self.public_transport_rate),
        ] {
            check_percent(field, value)?;
        }

        for project in &self.projects {
            if project.progress > 100 {
                return Err(DashboardError::invalid_value(
                    "projects.progress",
                    format!("{} exceeds 100", project.progress),
                ));
            }
        }
        for sector in &self.sector_emissions {
            if !sector.value.is_finite() {
                return Err(DashboardError::invalid_value(
                    "sector_emissions.value",
                    "must be finite",
                ));
            }
        }
        for district in &self.citizen_participation {
            check_percent("citizen_participation.rate", district.rate)?;
            if district.rank == 0 {
                return Err(DashboardError::invalid_value(
                    "citizen_participation.rank",
                    "ranks start at 1",
                ));
            }
        }

        Ok(())
    }
}

fn check_percent(field: &str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(DashboardError::invalid_value(
            field,
            format!("{value} is outside 0..=100"),
        ))
    }
}
