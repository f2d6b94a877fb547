//! Core types for the carbon dashboard.
//!
//! This crate provides the read model shared by the store, the HTTP service and
//! the client:
//!
//! - **Feed and series**: `Alert`, `CarbonData`
//! - **Singleton**: `GlobalMetric`
//! - **Catalog**: `PolicyEffect`, `InfrastructureMetric`, `Municipality`
//! - **Organizations**: `CorporateMetric`, `AssociationMetric`
//! - **Documents**: `Document` and the typed municipality records
//! - **Real-time series**: the synthetic hourly series shown on the platform view
//! - **Trends and samples**: monthly CBAM, ESG and membership series, and the
//!   fixed sample figures shown before any service data exists
//!
//! Every persisted entity has a `New*` counterpart carrying the fields a writer
//! supplies; identifiers and timestamps are assigned by the store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alert;
pub mod carbon;
pub mod catalog;
pub mod document;
pub mod error;
pub mod global;
pub mod municipality;
pub mod organization;
pub mod realtime;
pub mod sample;
pub mod trends;

pub use alert::{Alert, AlertKind, NewAlert};
pub use carbon::{CarbonData, NewCarbonData};
pub use catalog::{InfrastructureMetric, NewInfrastructureMetric, NewPolicyEffect, PolicyEffect};
pub use document::Document;
pub use error::{DashboardError, Result};
pub use global::{GlobalMetric, GlobalMetricValues, GLOBAL_METRIC_ID};
pub use municipality::{
    CitizenParticipation, MunicipalProject, Municipality, NewMunicipality, SectorEmission,
};
pub use organization::{
    AssociationMetric, CorporateMetric, NewAssociationMetric, NewCorporateMetric,
};
pub use realtime::{generate_series, RealtimePoint, SERIES_HOURS};
pub use sample::BASELINE_GLOBAL_METRIC;
pub use trends::{
    esg_trend, generate_cbam_months, generate_member_months, CbamMonth, EsgTrendPoint,
    MemberMonth, CBAM_MONTHS, ESG_TREND_MONTHS, MEMBER_MONTHS,
};
