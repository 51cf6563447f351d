//! Alert confidence and city-status engine for Nagar Alert Hub.
//!
//! Residents' reports of local disruptions are held as [`Alert`]s. Each
//! support event raises an alert's supporter count, and its [`Confidence`]
//! follows from that count through fixed thresholds. This crate provides:
//!
//! - [`AlertStore`] - The ordered, concurrency-safe source of truth
//! - [`apply_support`] / [`confidence_for`] - The support transition and threshold table
//! - [`compute_status`] - City-wide status from a snapshot of alerts
//! - [`projection`] - Feed, map and operator views over a snapshot
//! - [`seed::demo_alerts`] - A demo dataset for a fresh dashboard
//!
//! # Example
//!
//! ```rust
//! use alert_core::{compute_status, projection, seed, AlertStore, StatusContext, StatusLevel};
//! use chrono::Utc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> alert_core::Result<()> {
//!     let store = AlertStore::from_alerts(seed::demo_alerts(Utc::now()))?;
//!     store.support_alert("alert-003").await?;
//!
//!     let snapshot = store.all().await;
//!     let status = compute_status(&snapshot, &StatusContext::new("Ranchi", 18));
//!     assert_eq!(status.status, StatusLevel::Calm);
//!     assert_eq!(projection::map_markers(&snapshot).len(), 4);
//!     Ok(())
//! }
//! ```

mod confidence;
mod error;
mod model;
pub mod projection;
pub mod seed;
mod status;
mod store;

pub use confidence::{apply_support, confidence_for, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use error::{Result, StoreError};
pub use model::{Alert, AlertId, AlertRecord, Category, Confidence, GeoPoint, Priority};
pub use projection::{Breakdown, MapMarker, OperatorView};
pub use status::{compute_status, CityStatus, StatusContext, StatusLevel};
pub use store::AlertStore;
