//! Error types for the carbon dashboard.

/// Result type for dashboard domain operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised while constructing or validating domain values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// Unknown alert type string.
    #[error("invalid alert type: {0}")]
    InvalidAlertType(String),

    /// A JSON document failed to parse or has the wrong shape.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A field value is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl DashboardError {
    pub(crate) fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
