//! Descriptive catalog records.
//!
//! Policy effects and infrastructure metrics carry pre-formatted display
//! strings ("약 850억원", "+84 MW vs 2023년"), not numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measured effect of a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEffect {
    /// Row identifier.
    pub id: i64,
    /// Policy name.
    pub name: String,
    /// Budget, formatted.
    pub budget: String,
    /// Annual reduction, formatted.
    pub reduction: String,
    /// Cost per tonne, formatted.
    pub efficiency: String,
    /// Status label (`success`, `progress`, ...).
    pub status: String,
    /// Long description.
    pub description: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a policy effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPolicyEffect {
    /// Policy name.
    pub name: String,
    /// Budget, formatted.
    pub budget: String,
    /// Annual reduction, formatted.
    pub reduction: String,
    /// Cost per tonne, formatted.
    pub efficiency: String,
    /// Status label.
    pub status: String,
    /// Long description.
    pub description: String,
}

/// Infrastructure capacity figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureMetric {
    /// Row identifier.
    pub id: i64,
    /// Metric name.
    pub name: String,
    /// Value, formatted.
    pub value: String,
    /// Unit label.
    pub unit: String,
    /// Change summary, formatted.
    pub change: String,
    /// Long description.
    pub description: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting an infrastructure metric.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewInfrastructureMetric {
    /// Metric name.
    pub name: String,
    /// Value, formatted.
    pub value: String,
    /// Unit label.
    pub unit: String,
    /// Change summary, formatted.
    pub change: String,
    /// Long description.
    pub description: String,
}
