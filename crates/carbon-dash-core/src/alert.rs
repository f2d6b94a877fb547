//! Notification feed entries.
//!
//! Alerts are read newest-first; the feed is a reverse-chronological stream.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Requires immediate attention.
    Critical,
    /// Degraded but not failing.
    Warning,
    /// A target or milestone was reached.
    Success,
}

impl AlertKind {
    /// All alert kinds, most severe first.
    pub const ALL: [Self; 3] = [Self::Critical, Self::Warning, Self::Success];

    /// Get the stored string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DashboardError::InvalidAlertType(s.to_string()))
    }
}

/// A stored alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Row identifier.
    pub id: i64,

    /// Severity.
    pub alert_type: AlertKind,

    /// Short headline.
    pub title: String,

    /// Detail line.
    pub message: String,

    /// When the alert was raised. Feed order is by this field, newest first.
    pub created_at: DateTime<Utc>,

    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting an alert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    /// Severity.
    pub alert_type: AlertKind,
    /// Short headline.
    pub title: String,
    /// Detail line.
    pub message: String,
    /// Explicit creation time; the store uses the current time when absent.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewAlert {
    /// Create a new alert raised now.
    #[must_use]
    pub fn new(
        alert_type: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            alert_type,
            title: title.into(),
            message: message.into(),
            created_at: None,
        }
    }

    /// Backdate the alert.
    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_kind_parses_stored_strings() {
        for kind in AlertKind::ALL {
            assert_eq!(kind.as_str().parse::<AlertKind>().unwrap(), kind);
        }
    }

    #[test]
    fn alert_kind_rejects_unknown() {
        let err = "info".parse::<AlertKind>().unwrap_err();
        assert_eq!(err, DashboardError::InvalidAlertType("info".into()));
    }

    #[test]
    fn alert_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AlertKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn new_alert_backdating() {
        let at = Utc::now() - chrono::Duration::minutes(5);
        let alert =
            NewAlert::new(AlertKind::Critical, "CBAM deadline", "3 days left").created_at(at);

        assert_eq!(alert.created_at, Some(at));
        assert_eq!(alert.title, "CBAM deadline");
    }
}
