//! Application state shared across handlers.

use std::sync::Arc;

use alert_core::{AlertStore, StatusContext};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Canonical alert collection.
    pub store: Arc<AlertStore>,
    /// City name and resolved counter for status aggregation.
    pub status_context: Arc<StatusContext>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: AlertStore, status_context: StatusContext) -> Self {
        Self {
            store: Arc::new(store),
            status_context: Arc::new(status_context),
        }
    }
}
