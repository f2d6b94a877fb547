//! Dashboard view and tab selection.
//!
//! Any view can be selected from any other; there are no transition rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Top-level dashboard view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    /// National platform overview.
    #[default]
    Platform,
    /// Local government view.
    Municipal,
    /// Corporate ESG view.
    Corporate,
    /// Citizen association view.
    Association,
}

impl DashboardView {
    /// All views in menu order.
    pub const ALL: [Self; 4] = [
        Self::Platform,
        Self::Municipal,
        Self::Corporate,
        Self::Association,
    ];

    /// Wire name of the view.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Municipal => "municipal",
            Self::Corporate => "corporate",
            Self::Association => "association",
        }
    }

    /// Parse a view name, falling back to the platform view.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardView {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s.trim())
            .ok_or_else(|| ClientError::UnknownSelection(s.to_string()))
    }
}

/// Tab within the corporate view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorporateTab {
    /// ESG summary.
    #[default]
    Overview,
    /// Scope 1-3 emissions.
    Carbon,
    /// EU CBAM exposure.
    Cbam,
    /// Supplier risk.
    Supply,
}

impl CorporateTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::Overview, Self::Carbon, Self::Cbam, Self::Supply];

    /// Wire name of the tab.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Carbon => "carbon",
            Self::Cbam => "cbam",
            Self::Supply => "supply",
        }
    }

    /// Parse a tab name, falling back to the overview tab.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for CorporateTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorporateTab {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s.trim())
            .ok_or_else(|| ClientError::UnknownSelection(s.to_string()))
    }
}

/// Current view and corporate tab.
///
/// The tab is remembered while other views are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSelection {
    /// Selected view.
    pub view: DashboardView,
    /// Selected corporate tab.
    pub corporate_tab: CorporateTab,
}

impl DashboardSelection {
    /// Build a selection from optional names, e.g. query parameters.
    ///
    /// Missing or unknown names select the defaults.
    #[must_use]
    pub fn from_names(view: Option<&str>, tab: Option<&str>) -> Self {
        Self {
            view: view.map(DashboardView::parse_or_default).unwrap_or_default(),
            corporate_tab: tab.map(CorporateTab::parse_or_default).unwrap_or_default(),
        }
    }

    /// Switch view.
    pub fn select_view(&mut self, view: DashboardView) {
        self.view = view;
    }

    /// Switch corporate tab.
    pub fn select_tab(&mut self, tab: CorporateTab) {
        self.corporate_tab = tab;
    }

    /// Tab to render, only while the corporate view is shown.
    #[must_use]
    pub fn active_tab(&self) -> Option<CorporateTab> {
        (self.view == DashboardView::Corporate).then_some(self.corporate_tab)
    }
}
