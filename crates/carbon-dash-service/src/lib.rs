//! Carbon dashboard HTTP API service.
//!
//! This crate serves the dashboard's read model as JSON:
//!
//! - Alert feed (newest first) and carbon time series (oldest first)
//! - The global metrics singleton
//! - Policy, infrastructure and municipality catalogs
//! - Corporate ESG and association snapshots
//! - The synthetic real-time series for the platform view
//!
//! Every endpoint is a read. There is no authentication.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Axum handlers are async by signature

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
