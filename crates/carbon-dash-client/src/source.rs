//! Data sources for the dashboard views.
//!
//! Views read through [`DashboardSource`] so they never know whether the
//! numbers come from the service or are made up locally.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use carbon_dash_core::sample::{
    sample_alerts, sample_association_metric, sample_carbon_data, sample_corporate_metric,
    sample_infrastructure_metrics, sample_municipalities, sample_policy_effects,
};
use carbon_dash_core::{
    generate_series, NewAssociationMetric, NewCorporateMetric, NewMunicipality,
    BASELINE_GLOBAL_METRIC, GLOBAL_METRIC_ID,
};

use crate::client::DashboardClient;
use crate::error::ClientError;
use crate::types::{
    Alert, AssociationMetric, CarbonData, CorporateMetric, GlobalMetric, InfrastructureMetric,
    Municipality, PolicyEffect, RealtimePoint,
};

/// Everything the platform view renders at once.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// Alert feed, newest first.
    pub alerts: Vec<Alert>,
    /// Carbon samples, oldest first.
    pub carbon_data: Vec<CarbonData>,
    /// Global metrics, if any.
    pub global_metric: Option<GlobalMetric>,
    /// Hourly series for the last day.
    pub realtime: Vec<RealtimePoint>,
}

/// Uniform access to dashboard data.
///
/// Every view acquires its data through this trait.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Alert feed, newest first.
    async fn alerts(&self) -> Result<Vec<Alert>, ClientError>;

    /// Carbon samples, oldest first.
    async fn carbon_data(&self) -> Result<Vec<CarbonData>, ClientError>;

    /// Global metrics singleton.
    async fn global_metric(&self) -> Result<Option<GlobalMetric>, ClientError>;

    /// Policy effects, for the municipal view.
    async fn policy_effects(&self) -> Result<Vec<PolicyEffect>, ClientError>;

    /// Infrastructure capacity, for the municipal view.
    async fn infrastructure_metrics(&self) -> Result<Vec<InfrastructureMetric>, ClientError>;

    /// Municipality profiles.
    async fn municipalities(&self) -> Result<Vec<Municipality>, ClientError>;

    /// Corporate ESG snapshots.
    async fn corporate_metrics(&self) -> Result<Vec<CorporateMetric>, ClientError>;

    /// Association snapshots.
    async fn association_metrics(&self) -> Result<Vec<AssociationMetric>, ClientError>;

    /// Hourly series ending at `now`.
    fn realtime(&self, now: DateTime<Utc>) -> Vec<RealtimePoint>;

    /// Fetch the platform view's data concurrently.
    async fn snapshot(&self) -> Result<DashboardSnapshot, ClientError> {
        let (alerts, carbon_data, global_metric) =
            futures::try_join!(self.alerts(), self.carbon_data(), self.global_metric())?;

        Ok(DashboardSnapshot {
            alerts,
            carbon_data,
            global_metric,
            realtime: self.realtime(Utc::now()),
        })
    }
}

/// Locally generated data, used when no service is reachable.
///
/// Serves the fixed sample figures with identifiers numbered from 1 and
/// timestamps taken at call time. CBAM, membership and hourly series are
/// drawn fresh on every call.
#[derive(Debug)]
pub struct SyntheticSource {
    rng: Mutex<StdRng>,
}

impl SyntheticSource {
    /// Source seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Source with a fixed seed, for reproducible series.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardSource for SyntheticSource {
    async fn alerts(&self) -> Result<Vec<Alert>, ClientError> {
        let now = Utc::now();
        Ok(numbered(sample_alerts(now))
            .map(|(id, alert)| {
                let created_at = alert.created_at.unwrap_or(now);
                Alert {
                    id,
                    alert_type: alert.alert_type,
                    title: alert.title,
                    message: alert.message,
                    created_at,
                    updated_at: created_at,
                }
            })
            .collect())
    }

    async fn carbon_data(&self) -> Result<Vec<CarbonData>, ClientError> {
        let now = Utc::now();
        Ok(numbered(sample_carbon_data(now))
            .map(|(id, sample)| CarbonData {
                id,
                value: sample.value,
                recorded_at: sample.recorded_at,
                created_at: now,
                updated_at: now,
            })
            .collect())
    }

    async fn global_metric(&self) -> Result<Option<GlobalMetric>, ClientError> {
        let now = Utc::now();
        let values = BASELINE_GLOBAL_METRIC;
        Ok(Some(GlobalMetric {
            id: GLOBAL_METRIC_ID,
            reduction_rate: values.reduction_rate,
            active_projects: values.active_projects,
            trading_volume: values.trading_volume,
            platform_users: values.platform_users,
            data_quality: values.data_quality,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn policy_effects(&self) -> Result<Vec<PolicyEffect>, ClientError> {
        let now = Utc::now();
        Ok(numbered(sample_policy_effects())
            .map(|(id, effect)| PolicyEffect {
                id,
                name: effect.name,
                budget: effect.budget,
                reduction: effect.reduction,
                efficiency: effect.efficiency,
                status: effect.status,
                description: effect.description,
                created_at: now,
                updated_at: now,
            })
            .collect())
    }

    async fn infrastructure_metrics(&self) -> Result<Vec<InfrastructureMetric>, ClientError> {
        let now = Utc::now();
        Ok(numbered(sample_infrastructure_metrics())
            .map(|(id, metric)| InfrastructureMetric {
                id,
                name: metric.name,
                value: metric.value,
                unit: metric.unit,
                change: metric.change,
                description: metric.description,
                created_at: now,
                updated_at: now,
            })
            .collect())
    }

    async fn municipalities(&self) -> Result<Vec<Municipality>, ClientError> {
        let now = Utc::now();
        Ok(numbered(sample_municipalities())
            .map(|(id, municipality)| municipality_record(id, municipality, now))
            .collect())
    }

    async fn corporate_metrics(&self) -> Result<Vec<CorporateMetric>, ClientError> {
        let metric = self.with_rng(sample_corporate_metric)?;
        Ok(vec![corporate_record(metric, Utc::now())])
    }

    async fn association_metrics(&self) -> Result<Vec<AssociationMetric>, ClientError> {
        let metric = self.with_rng(sample_association_metric)?;
        Ok(vec![association_record(metric, Utc::now())])
    }

    fn realtime(&self, now: DateTime<Utc>) -> Vec<RealtimePoint> {
        self.with_rng(|rng| generate_series(now, rng))
    }
}

/// Pair each item with an identifier counting from 1.
fn numbered<T>(items: Vec<T>) -> impl Iterator<Item = (i64, T)> {
    (1_i64..).zip(items)
}

fn municipality_record(id: i64, new: NewMunicipality, now: DateTime<Utc>) -> Municipality {
    Municipality {
        id,
        name: new.name,
        population: new.population,
        area: new.area,
        carbon_emission: new.carbon_emission,
        reduction_target: new.reduction_target,
        current_reduction: new.current_reduction,
        budget: new.budget,
        renewable_energy_rate: new.renewable_energy_rate,
        public_transport_rate: new.public_transport_rate,
        projects: new.projects,
        sector_emissions: new.sector_emissions,
        citizen_participation: new.citizen_participation,
        created_at: now,
        updated_at: now,
    }
}

fn corporate_record(new: NewCorporateMetric, now: DateTime<Utc>) -> CorporateMetric {
    CorporateMetric {
        id: 1,
        esg_scores: new.esg_scores,
        carbon_scope: new.carbon_scope,
        cbam_data: new.cbam_data,
        supply_chain_data: new.supply_chain_data,
        created_at: now,
        updated_at: now,
    }
}

fn association_record(new: NewAssociationMetric, now: DateTime<Utc>) -> AssociationMetric {
    AssociationMetric {
        id: 1,
        member_data: new.member_data,
        regional_performance: new.regional_performance,
        activity_utilization: new.activity_utilization,
        created_at: now,
        updated_at: now,
    }
}

/// Service-backed data; the series is still generated locally.
#[derive(Debug)]
pub struct LiveSource {
    client: DashboardClient,
    synthetic: SyntheticSource,
}

impl LiveSource {
    /// Wrap a client.
    #[must_use]
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            synthetic: SyntheticSource::new(),
        }
    }
}

#[async_trait]
impl DashboardSource for LiveSource {
    async fn alerts(&self) -> Result<Vec<Alert>, ClientError> {
        self.client.alerts().await
    }

    async fn carbon_data(&self) -> Result<Vec<CarbonData>, ClientError> {
        self.client.carbon_data().await
    }

    async fn global_metric(&self) -> Result<Option<GlobalMetric>, ClientError> {
        self.client.global_metric().await
    }

    async fn policy_effects(&self) -> Result<Vec<PolicyEffect>, ClientError> {
        self.client.policy_effects().await
    }

    async fn infrastructure_metrics(&self) -> Result<Vec<InfrastructureMetric>, ClientError> {
        self.client.infrastructure_metrics().await
    }

    async fn municipalities(&self) -> Result<Vec<Municipality>, ClientError> {
        self.client.municipalities().await
    }

    async fn corporate_metrics(&self) -> Result<Vec<CorporateMetric>, ClientError> {
        self.client.corporate_metrics().await
    }

    async fn association_metrics(&self) -> Result<Vec<AssociationMetric>, ClientError> {
        self.client.association_metrics().await
    }

    fn realtime(&self, now: DateTime<Utc>) -> Vec<RealtimePoint> {
        self.synthetic.realtime(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_dash_core::{AlertKind, CBAM_MONTHS, SERIES_HOURS};

    #[tokio::test]
    async fn synthetic_snapshot_shows_the_baseline() {
        let source = SyntheticSource::seeded(1);

        let snapshot = source.snapshot().await.unwrap();

        let kinds: Vec<_> = snapshot.alerts.iter().map(|a| a.alert_type).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::Critical, AlertKind::Warning, AlertKind::Success]
        );
        assert_eq!(snapshot.carbon_data.len(), 10);
        assert_eq!(snapshot.realtime.len(), SERIES_HOURS as usize);

        let metric = snapshot.global_metric.unwrap();
        assert_eq!(metric.id, GLOBAL_METRIC_ID);
        assert_eq!(metric.values(), BASELINE_GLOBAL_METRIC);
    }

    #[tokio::test]
    async fn synthetic_feed_and_series_keep_their_order() {
        let source = SyntheticSource::seeded(1);

        let alerts = source.alerts().await.unwrap();
        assert!(alerts.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let samples = source.carbon_data().await.unwrap();
        assert!(samples.windows(2).all(|w| w[0].recorded_at <= w[1].recorded_at));
        let ids: Vec<i64> = samples.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn synthetic_catalog_is_populated() {
        let source = SyntheticSource::seeded(1);

        assert_eq!(source.policy_effects().await.unwrap().len(), 3);
        assert_eq!(source.infrastructure_metrics().await.unwrap()[0].unit, "MW");

        let municipalities = source.municipalities().await.unwrap();
        assert_eq!(municipalities.len(), 4);
        assert_eq!(municipalities[0].id, 1);
        assert_eq!(municipalities[0].name, "서울특별시");
    }

    #[tokio::test]
    async fn synthetic_organizations_carry_generated_series() {
        let source = SyntheticSource::seeded(1);

        let corporate = source.corporate_metrics().await.unwrap();
        let cbam = corporate[0].cbam_data.as_value().as_array().unwrap();
        assert_eq!(cbam.len(), CBAM_MONTHS as usize);
        for month in cbam {
            let exports = month["exports"].as_i64().unwrap();
            assert!((1500..3500).contains(&exports));
        }

        let association = source.association_metrics().await.unwrap();
        let members = association[0].member_data.as_value().as_array().unwrap();
        assert_eq!(members.len(), 12);
    }

    #[tokio::test]
    async fn cbam_months_are_redrawn() {
        let source = SyntheticSource::seeded(9);

        let first = source.corporate_metrics().await.unwrap();
        let second = source.corporate_metrics().await.unwrap();

        assert_ne!(first[0].cbam_data, second[0].cbam_data);
        assert_eq!(first[0].carbon_scope, second[0].carbon_scope);
    }

    #[test]
    fn seeded_sources_agree() {
        let now = Utc::now();
        let a = SyntheticSource::seeded(7).realtime(now);
        let b = SyntheticSource::seeded(7).realtime(now);
        assert_eq!(a, b);
    }

    #[test]
    fn successive_series_differ() {
        let source = SyntheticSource::seeded(7);
        let now = Utc::now();
        assert_ne!(source.realtime(now), source.realtime(now));
    }

    #[test]
    fn sources_are_object_safe() {
        let sources: Vec<Box<dyn DashboardSource>> = vec![
            Box::new(SyntheticSource::new()),
            Box::new(LiveSource::new(
                DashboardClient::new("http://localhost:8080").unwrap(),
            )),
        ];
        assert_eq!(sources.len(), 2);
    }
}
