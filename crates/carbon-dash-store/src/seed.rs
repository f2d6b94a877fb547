//! Sample data for local development and demos.
//!
//! Seeding is idempotent per table: a table that already has rows is left
//! alone, and the global metric is only written when none exists.

use chrono::Utc;

use carbon_dash_core::sample::{
    sample_alerts, sample_association_metric, sample_carbon_data, sample_corporate_metric,
    sample_infrastructure_metrics, sample_municipalities, sample_policy_effects,
};
use carbon_dash_core::BASELINE_GLOBAL_METRIC;

use crate::error::Result;
use crate::Store;

/// Number of rows inserted per table by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Carbon samples inserted.
    pub carbon_data: usize,
    /// Whether the global metric was written.
    pub global_metric: bool,
    /// Alerts inserted.
    pub alerts: usize,
    /// Policy effects inserted.
    pub policy_effects: usize,
    /// Infrastructure metrics inserted.
    pub infrastructure_metrics: usize,
    /// Municipalities inserted.
    pub municipalities: usize,
    /// Corporate snapshots inserted.
    pub corporate_metrics: usize,
    /// Association snapshots inserted.
    pub association_metrics: usize,
}

/// Populate empty tables with the sample dashboard data.
///
/// # Errors
///
/// Returns an error if any read or insert fails.
pub async fn seed_sample_data<S: Store + ?Sized>(store: &S) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();
    let now = Utc::now();

    if store.list_carbon_data().await?.is_empty() {
        for sample in sample_carbon_data(now) {
            store.insert_carbon_data(&sample).await?;
            summary.carbon_data += 1;
        }
    }

    if store.global_metric().await?.is_none() {
        store.put_global_metric(&BASELINE_GLOBAL_METRIC).await?;
        summary.global_metric = true;
    }

    if store.list_alerts().await?.is_empty() {
        for alert in sample_alerts(now) {
            store.insert_alert(&alert).await?;
            summary.alerts += 1;
        }
    }

    if store.list_policy_effects().await?.is_empty() {
        for effect in sample_policy_effects() {
            store.insert_policy_effect(&effect).await?;
            summary.policy_effects += 1;
        }
    }

    if store.list_infrastructure_metrics().await?.is_empty() {
        for metric in sample_infrastructure_metrics() {
            store.insert_infrastructure_metric(&metric).await?;
            summary.infrastructure_metrics += 1;
        }
    }

    if store.list_municipalities().await?.is_empty() {
        for municipality in sample_municipalities() {
            store.insert_municipality(&municipality).await?;
            summary.municipalities += 1;
        }
    }

    if store.list_corporate_metrics().await?.is_empty() {
        let metric = sample_corporate_metric(&mut rand::thread_rng())?;
        store.insert_corporate_metric(&metric).await?;
        summary.corporate_metrics += 1;
    }

    if store.list_association_metrics().await?.is_empty() {
        let metric = sample_association_metric(&mut rand::thread_rng())?;
        store.insert_association_metric(&metric).await?;
        summary.association_metrics += 1;
    }

    tracing::info!(?summary, "Sample data seeded");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteStore;
    use carbon_dash_core::AlertKind;

    #[tokio::test]
    async fn seeds_every_table() {
        let store = SqliteStore::in_memory().await.unwrap();

        let summary = seed_sample_data(&store).await.unwrap();

        assert_eq!(summary.carbon_data, 10);
        assert!(summary.global_metric);
        assert_eq!(summary.alerts, 3);
        assert_eq!(summary.policy_effects, 3);
        assert_eq!(summary.infrastructure_metrics, 4);
        assert_eq!(summary.municipalities, 4);
        assert_eq!(summary.corporate_metrics, 1);
        assert_eq!(summary.association_metrics, 1);

        let counts = store.row_counts().await.unwrap();
        assert!(counts.iter().all(|(_, count)| *count > 0));
    }

    #[tokio::test]
    async fn reseeding_is_a_no_op() {
        let store = SqliteStore::in_memory().await.unwrap();
        seed_sample_data(&store).await.unwrap();

        let second = seed_sample_data(&store).await.unwrap();

        assert_eq!(second, SeedSummary::default());
        assert_eq!(store.list_alerts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn seeded_alerts_follow_the_feed_order() {
        let store = SqliteStore::in_memory().await.unwrap();
        seed_sample_data(&store).await.unwrap();

        let kinds: Vec<_> = store
            .list_alerts()
            .await
            .unwrap()
            .into_iter()
            .map(|alert| alert.alert_type)
            .collect();

        assert_eq!(
            kinds,
            vec![AlertKind::Critical, AlertKind::Warning, AlertKind::Success]
        );
    }
}
