//! City status, map and operator console routes.

use alert_core::{compute_status, projection, CityStatus, MapMarker, OperatorView};
use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// City status summary.
pub async fn status_api(State(state): State<AppState>) -> Json<CityStatus> {
    let snapshot = state.store.all().await;
    Json(compute_status(&snapshot, &state.status_context))
}

/// Markers for geocoded alerts.
pub async fn map_api(State(state): State<AppState>) -> Json<Vec<MapMarker>> {
    let snapshot = state.store.all().await;
    Json(projection::map_markers(&snapshot))
}

/// Unfiltered alert list for the operator console.
pub async fn operator_api(State(state): State<AppState>) -> Json<OperatorView> {
    let snapshot = state.store.all().await;
    Json(projection::operator_view(&snapshot))
}
