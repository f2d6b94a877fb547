//! Table names, column lists and read orderings.

/// Table names.
pub mod table {
    /// Notification feed.
    pub const ALERTS: &str = "alerts";
    /// Time-series samples.
    pub const CARBON_DATA: &str = "carbon_data";
    /// Singleton KPI record.
    pub const GLOBAL_METRICS: &str = "global_metrics";
    /// Policy effect catalog.
    pub const POLICY_EFFECTS: &str = "policy_effects";
    /// Infrastructure catalog.
    pub const INFRASTRUCTURE_METRICS: &str = "infrastructure_metrics";
    /// Regional profiles.
    pub const MUNICIPALITIES: &str = "municipalities";
    /// Corporate snapshots.
    pub const CORPORATE_METRICS: &str = "corporate_metrics";
    /// Association snapshots.
    pub const ASSOCIATION_METRICS: &str = "association_metrics";
}

pub(crate) const ALERT_COLUMNS: &str = "id, alert_type, title, message, created_at, updated_at";

pub(crate) const CARBON_DATA_COLUMNS: &str = "id, value, recorded_at, created_at, updated_at";

pub(crate) const GLOBAL_METRIC_COLUMNS: &str = "id, reduction_rate, active_projects, \
     trading_volume, platform_users, data_quality, created_at, updated_at";

pub(crate) const POLICY_EFFECT_COLUMNS: &str =
    "id, name, budget, reduction, efficiency, status, description, created_at, updated_at";

pub(crate) const INFRASTRUCTURE_METRIC_COLUMNS: &str =
    "id, name, value, unit, change, description, created_at, updated_at";

pub(crate) const MUNICIPALITY_COLUMNS: &str = "id, name, population, area, carbon_emission, \
     reduction_target, current_reduction, budget, renewable_energy_rate, public_transport_rate, \
     projects, sector_emissions, citizen_participation, created_at, updated_at";

pub(crate) const CORPORATE_METRIC_COLUMNS: &str =
    "id, esg_scores, carbon_scope, cbam_data, supply_chain_data, created_at, updated_at";

pub(crate) const ASSOCIATION_METRIC_COLUMNS: &str =
    "id, member_data, regional_performance, activity_utilization, created_at, updated_at";

/// Read orderings.
pub mod order {
    /// Newest first; ties broken by insertion order, latest first.
    pub const ALERTS: &str = "created_at DESC, id DESC";

    /// Oldest first; undated samples last.
    pub const CARBON_DATA: &str = "recorded_at IS NULL, recorded_at ASC, id ASC";

    /// First by creation order.
    pub const GLOBAL_METRICS: &str = "created_at ASC, id ASC";

    /// Insertion order, for the catalog tables.
    pub const INSERTION: &str = "id ASC";
}

/// Returns all table names.
#[must_use]
pub fn all_tables() -> Vec<&'static str> {
    vec![
        table::ALERTS,
        table::CARBON_DATA,
        table::GLOBAL_METRICS,
        table::POLICY_EFFECTS,
        table::INFRASTRUCTURE_METRICS,
        table::MUNICIPALITIES,
        table::CORPORATE_METRICS,
        table::ASSOCIATION_METRICS,
    ]
}
