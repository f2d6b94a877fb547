//! Platform-wide KPI snapshot.
//!
//! There is exactly one logical global metric record. Writers always target
//! [`GLOBAL_METRIC_ID`]; readers take the first row by creation order, which is
//! the same row whenever writes go through the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed identifier of the singleton row.
pub const GLOBAL_METRIC_ID: i64 = 1;

/// The singleton KPI record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetric {
    /// Row identifier (always [`GLOBAL_METRIC_ID`] for rows written by the store).
    pub id: i64,

    /// Emission reduction rate in percent.
    pub reduction_rate: f64,

    /// Number of active carbon projects.
    pub active_projects: i64,

    /// Daily trading volume in tonnes.
    pub trading_volume: i64,

    /// Registered platform users.
    pub platform_users: i64,

    /// Data quality score (0-100).
    pub data_quality: f64,

    /// When the row was first written.
    pub created_at: DateTime<Utc>,

    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of the singleton.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetricValues {
    /// Emission reduction rate in percent.
    pub reduction_rate: f64,
    /// Number of active carbon projects.
    pub active_projects: i64,
    /// Daily trading volume in tonnes.
    pub trading_volume: i64,
    /// Registered platform users.
    pub platform_users: i64,
    /// Data quality score.
    pub data_quality: f64,
}

impl GlobalMetric {
    /// The writable fields of this record.
    #[must_use]
    pub fn values(&self) -> GlobalMetricValues {
        GlobalMetricValues {
            reduction_rate: self.reduction_rate,
            active_projects: self.active_projects,
            trading_volume: self.trading_volume,
            platform_users: self.platform_users,
            data_quality: self.data_quality,
        }
    }
}
