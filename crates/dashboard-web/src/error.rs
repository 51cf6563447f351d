//! Error types for the dashboard web surface.

use alert_core::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while serving dashboard requests.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Alert store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            DashboardError::Store(StoreError::AlreadyExists { .. }) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = %status, error = %self, "Request failed");

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for dashboard handlers.
pub type Result<T> = std::result::Result<T, DashboardError>;
