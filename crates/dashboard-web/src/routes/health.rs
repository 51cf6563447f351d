//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Liveness report with the number of alerts being tracked.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub alerts: usize,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        alerts: state.store.len().await,
    })
}
