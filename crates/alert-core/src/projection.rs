//! Read-only views derived from an alert snapshot.
//!
//! Each function takes the output of [`AlertStore::all`](crate::AlertStore::all)
//! and never touches the store itself.

use serde::{Deserialize, Serialize};

use crate::model::{Alert, AlertId, Category, Confidence};

/// Pin for the map collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub category: Category,
    pub lat: f64,
    pub lng: f64,
    pub alert_ref: AlertId,
}

/// Alert counts shown in the operator console header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub traffic: usize,
    pub power: usize,
    pub water: usize,
}

/// Full, unfiltered visibility for the operator console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorView {
    pub alerts: Vec<Alert>,
    pub breakdown: Breakdown,
}

/// Feed in ingestion order, unfiltered.
pub fn feed(alerts: &[Alert]) -> Vec<Alert> {
    alerts.to_vec()
}

/// One marker per geocoded alert; alerts without coordinates are skipped.
pub fn map_markers(alerts: &[Alert]) -> Vec<MapMarker> {
    alerts
        .iter()
        .filter_map(|alert| {
            let point = alert.coordinates?;
            Some(MapMarker {
                id: format!("marker-{}", alert.id),
                category: alert.category,
                lat: point.lat,
                lng: point.lng,
                alert_ref: alert.id.clone(),
            })
        })
        .collect()
}

/// Every alert, including low-confidence and non-prioritized ones.
pub fn operator_view(alerts: &[Alert]) -> OperatorView {
    let mut breakdown = Breakdown::default();
    for alert in alerts {
        match alert.confidence() {
            Confidence::Low => breakdown.low += 1,
            Confidence::Medium => breakdown.medium += 1,
            Confidence::High => breakdown.high += 1,
        }
        match alert.category {
            Category::Traffic => breakdown.traffic += 1,
            Category::Power => breakdown.power += 1,
            Category::Water => breakdown.water += 1,
        }
    }

    OperatorView {
        alerts: alerts.to_vec(),
        breakdown,
    }
}
