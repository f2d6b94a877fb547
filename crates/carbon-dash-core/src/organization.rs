//! Corporate ESG and association snapshots.
//!
//! Both records are bags of [`Document`]s; the dashboard defines their shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// ESG, emissions scope, CBAM and supply chain snapshot for a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateMetric {
    /// Row identifier.
    pub id: i64,
    /// ESG scores.
    pub esg_scores: Document,
    /// Emissions by scope.
    pub carbon_scope: Document,
    /// CBAM export figures.
    pub cbam_data: Document,
    /// Supplier risk data.
    pub supply_chain_data: Document,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a corporate snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCorporateMetric {
    /// ESG scores.
    pub esg_scores: Document,
    /// Emissions by scope.
    pub carbon_scope: Document,
    /// CBAM export figures.
    pub cbam_data: Document,
    /// Supplier risk data.
    pub supply_chain_data: Document,
}

/// Membership, regional and activity snapshot for an association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationMetric {
    /// Row identifier.
    pub id: i64,
    /// Membership figures.
    pub member_data: Document,
    /// Regional performance.
    pub regional_performance: Document,
    /// Activity participation.
    pub activity_utilization: Document,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting an association snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssociationMetric {
    /// Membership figures.
    pub member_data: Document,
    /// Regional performance.
    pub regional_performance: Document,
    /// Activity participation.
    pub activity_utilization: Document,
}
