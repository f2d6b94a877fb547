//! Carbon measurement samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time-series sample.
///
/// Samples are read oldest-first by `recorded_at`. Rows without a
/// `recorded_at` are allowed and sort after every dated sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonData {
    /// Row identifier.
    pub id: i64,

    /// Measured value (tCO2).
    pub value: f64,

    /// When the measurement was taken.
    pub recorded_at: Option<DateTime<Utc>>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,

    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewCarbonData {
    /// Measured value.
    pub value: f64,
    /// When the measurement was taken.
    pub recorded_at: Option<DateTime<Utc>>,
}

impl NewCarbonData {
    /// Create a sample recorded at the given time.
    #[must_use]
    pub fn at(value: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            value,
            recorded_at: Some(recorded_at),
        }
    }
}
