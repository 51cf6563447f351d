//! Alert store.
//!
//! This module holds the canonical, insertion-ordered collection of alerts.
//! Every mutation is a read-modify-write under the write lock, so concurrent
//! support events on the same alert never lose an increment.

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::confidence::apply_support;
use crate::error::{Result, StoreError};
use crate::model::{Alert, AlertId};

/// Insertion-ordered alert collection shared by every view.
///
/// Reads hand out owned snapshots, so a caller holding the result of
/// [`AlertStore::all`] never sees later transitions.
///
/// # Example
///
/// ```rust
/// use alert_core::{Alert, AlertStore, Category, Confidence};
/// use chrono::Utc;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> alert_core::Result<()> {
///     let store = AlertStore::new();
///     let alert = Alert::new("alert-001", Category::Water, "Pipe burst", Utc::now())
///         .with_supporters(14);
///     store.insert(alert).await?;
///
///     let updated = store.support_alert("alert-001").await?;
///     assert_eq!(updated.supporter_count(), 15);
///     assert_eq!(updated.confidence(), Confidence::Medium);
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct AlertStore {
    /// Alerts keyed by id, kept in ingestion order for the feed.
    alerts: RwLock<IndexMap<AlertId, Alert>>,
}

impl AlertStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an ingestion batch, preserving its order.
    ///
    /// Fails with [`StoreError::AlreadyExists`] on the first duplicate id.
    pub fn from_alerts(alerts: impl IntoIterator<Item = Alert>) -> Result<Self> {
        let mut map = IndexMap::new();
        for alert in alerts {
            if map.contains_key(&alert.id) {
                return Err(StoreError::AlreadyExists { id: alert.id });
            }
            map.insert(alert.id.clone(), alert);
        }

        Ok(Self {
            alerts: RwLock::new(map),
        })
    }

    /// Add a newly ingested alert at the end of the collection.
    pub async fn insert(&self, alert: Alert) -> Result<()> {
        let mut alerts = self.alerts.write().await;
        if alerts.contains_key(&alert.id) {
            return Err(StoreError::AlreadyExists { id: alert.id });
        }

        debug!(alert_id = %alert.id, category = %alert.category, "Alert ingested");
        alerts.insert(alert.id.clone(), alert);
        Ok(())
    }

    /// Get a copy of a single alert.
    pub async fn get(&self, id: &str) -> Result<Alert> {
        let alerts = self.alerts.read().await;
        alerts.get(id).cloned().ok_or_else(|| not_found(id))
    }

    /// Snapshot of every alert in insertion order.
    pub async fn all(&self) -> Vec<Alert> {
        let alerts = self.alerts.read().await;
        alerts.values().cloned().collect()
    }

    /// Apply one support event to an alert and store the result.
    ///
    /// Returns the replacement record. An unknown id leaves the store untouched.
    pub async fn support_alert(&self, id: &str) -> Result<Alert> {
        let mut alerts = self.alerts.write().await;
        let slot = alerts.get_mut(id).ok_or_else(|| not_found(id))?;
        Ok(support_slot(slot))
    }

    /// Apply a support event only if the alert still accepts support.
    ///
    /// The check and the transition happen under one write lock, so an alert
    /// never passes the high-confidence threshold by more than one supporter.
    /// A high-confidence alert is returned unchanged.
    pub async fn offer_support(&self, id: &str) -> Result<Alert> {
        let mut alerts = self.alerts.write().await;
        let slot = alerts.get_mut(id).ok_or_else(|| not_found(id))?;

        if !slot.accepts_support() {
            debug!(alert_id = %slot.id, "Support ignored for high-confidence alert");
            return Ok(slot.clone());
        }

        Ok(support_slot(slot))
    }

    /// Count one more view of an alert.
    pub async fn record_view(&self, id: &str) -> Result<Alert> {
        let mut alerts = self.alerts.write().await;
        let slot = alerts.get_mut(id).ok_or_else(|| not_found(id))?;

        slot.view_count = slot.view_count.saturating_add(1);
        debug!(alert_id = %slot.id, views = slot.view_count, "Alert viewed");

        Ok(slot.clone())
    }

    /// Number of alerts held.
    pub async fn len(&self) -> usize {
        let alerts = self.alerts.read().await;
        alerts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn support_slot(slot: &mut Alert) -> Alert {
    let previous = slot.confidence();
    let next = apply_support(slot);
    *slot = next.clone();

    if next.confidence() != previous {
        info!(
            alert_id = %next.id,
            supporters = next.supporter_count(),
            from = %previous,
            to = %next.confidence(),
            "Alert confidence raised"
        );
    } else {
        debug!(
            alert_id = %next.id,
            supporters = next.supporter_count(),
            "Alert supported"
        );
    }

    next
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound {
        id: AlertId::new(id),
    }
}
