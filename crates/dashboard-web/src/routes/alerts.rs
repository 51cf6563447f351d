//! Alert feed and support routes.

use alert_core::{projection, Alert};
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// Alert feed in ingestion order.
pub async fn feed_api(State(state): State<AppState>) -> Json<Vec<Alert>> {
    let snapshot = state.store.all().await;
    Json(projection::feed(&snapshot))
}

/// A single alert.
pub async fn alert_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Alert>> {
    let alert = state.store.get(&id).await?;
    Ok(Json(alert))
}

/// Record a resident's support for an alert.
///
/// High-confidence alerts no longer accept support; the request returns the
/// alert unchanged.
pub async fn support_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Alert>> {
    let updated = state.store.offer_support(&id).await?;
    info!(
        alert_id = %id,
        supporters = updated.supporter_count(),
        confidence = %updated.confidence(),
        "Support recorded"
    );

    Ok(Json(updated))
}

/// Record that an alert's detail view was opened.
pub async fn view_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Alert>> {
    let updated = state.store.record_view(&id).await?;
    Ok(Json(updated))
}
