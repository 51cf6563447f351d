//! Alert store error types.

use thiserror::Error;

use crate::model::AlertId;

/// Errors that can occur during alert store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No alert with this id is held by the store.
    #[error("alert not found: {id}")]
    NotFound { id: AlertId },

    /// Ingestion tried to add an alert whose id is already taken.
    #[error("alert already exists: {id}")]
    AlreadyExists { id: AlertId },
}

/// Result type for alert store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
