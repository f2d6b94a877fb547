//! Carbon Dashboard Service - read-only JSON API for the dashboard
//!
//! This is the main entry point for the carbon dashboard service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carbon_dash_service::{create_router, AppState, ServiceConfig};
use carbon_dash_store::{seed_sample_data, SqliteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,carbon_dash=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Carbon Dashboard Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        database_url = %config.database_url,
        seed_sample_data = config.seed_sample_data,
        "Service configuration loaded"
    );

    // Open the store and apply migrations
    let store = Arc::new(
        SqliteStore::connect(&config.database_url, config.database_max_connections).await?,
    );

    if config.seed_sample_data {
        seed_sample_data(store.as_ref()).await?;
    }

    for (table, rows) in store.row_counts().await? {
        tracing::info!(table, rows, "Table ready");
    }

    let state = AppState::new(store, config.clone());
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
