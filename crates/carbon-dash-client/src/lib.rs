//! Carbon dashboard client.
//!
//! The data layer behind the dashboard views: an HTTP client for the read
//! endpoints, a [`DashboardSource`] abstraction over live and synthetic data,
//! the view/tab selections and a ticker that refreshes the real-time series.
//!
//! # Example
//!
//! ```no_run
//! use carbon_dash_client::{DashboardClient, DashboardSource, LiveSource};
//!
//! # async fn example() -> Result<(), carbon_dash_client::ClientError> {
//! let client = DashboardClient::new("http://localhost:8080")?;
//!
//! let alerts = client.alerts().await?;
//! println!("{} alerts", alerts.len());
//!
//! let source = LiveSource::new(client);
//! let snapshot = source.snapshot().await?;
//! if let Some(metric) = snapshot.global_metric {
//!     println!("reduction rate: {}%", metric.reduction_rate);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod refresh;
mod source;
mod types;
mod views;

pub use client::{ClientOptions, DashboardClient};
pub use error::ClientError;
pub use refresh::{RefreshFrame, RefreshTicker, REFRESH_INTERVAL};
pub use source::{DashboardSnapshot, DashboardSource, LiveSource, SyntheticSource};
pub use types::*;
pub use views::{CorporateTab, DashboardSelection, DashboardView};
