//! Dashboard web surface for Nagar Alert Hub.
//!
//! Serves the alert feed, map markers, operator console data and city status
//! as JSON, and accepts support and view events from the presentation layer.

mod config;
mod error;
mod routes;
mod state;

use alert_core::{seed, AlertStore, StatusContext};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, city = %config.city_name, "Starting dashboard server");

    // Build the alert store
    let store = if config.seed_demo_alerts {
        AlertStore::from_alerts(seed::demo_alerts(chrono::Utc::now()))?
    } else {
        AlertStore::new()
    };
    info!(alerts = store.len().await, "Alert store ready");

    // Build application state
    let status_context = StatusContext::new(config.city_name.clone(), config.resolved_count);
    let state = AppState::new(store, status_context);

    // Build router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Dashboard server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
