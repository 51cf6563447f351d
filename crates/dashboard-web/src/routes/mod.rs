//! Route handlers for the dashboard JSON surface.

pub mod alerts;
pub mod health;
pub mod views;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Alerts
        .route("/api/alerts", get(alerts::feed_api))
        .route("/api/alerts/:id", get(alerts::alert_api))
        .route("/api/alerts/:id/support", post(alerts::support_api))
        .route("/api/alerts/:id/view", post(alerts::view_api))
        // Derived views
        .route("/api/map", get(views::map_api))
        .route("/api/operator", get(views::operator_api))
        .route("/api/status", get(views::status_api))
}
