//! City-wide status aggregation.

use serde::{Deserialize, Serialize};

use crate::model::Alert;

/// More high-priority alerts than this puts the city on alert.
const HIGH_PRIORITY_LIMIT: usize = 2;

/// More alerts than this (with few high-priority ones) is moderate activity.
const MONITORING_LIMIT: usize = 5;

/// Aggregate classification of the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Calm,
    Moderate,
    Alert,
}

impl StatusLevel {
    /// Classify from the high-priority count and the total alert count.
    ///
    /// The high-priority rule wins over the volume rule.
    pub fn classify(high_priority_count: usize, alert_count: usize) -> Self {
        if high_priority_count > HIGH_PRIORITY_LIMIT {
            StatusLevel::Alert
        } else if alert_count > MONITORING_LIMIT {
            StatusLevel::Moderate
        } else {
            StatusLevel::Calm
        }
    }

    /// Summary line shown under the city pulse.
    pub fn message(&self, city_name: &str) -> String {
        match self {
            StatusLevel::Alert => format!("{} has multiple active disruptions.", city_name),
            StatusLevel::Moderate => format!(
                "{} is experiencing moderate activity. Some areas affected.",
                city_name
            ),
            StatusLevel::Calm => format!(
                "{} is mostly calm. Minor issues being monitored.",
                city_name
            ),
        }
    }
}

/// Inputs to the aggregation that do not come from the alert store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusContext {
    /// City named in the summary message.
    pub city_name: String,
    /// Resolved-alert counter kept by external bookkeeping.
    pub resolved_count: u32,
}

impl StatusContext {
    pub fn new(city_name: impl Into<String>, resolved_count: u32) -> Self {
        Self {
            city_name: city_name.into(),
            resolved_count,
        }
    }
}

/// City status summary, recomputed from the alert collection on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStatus {
    pub status: StatusLevel,
    /// Alerts that have not reached high confidence.
    pub active_alert_count: usize,
    pub high_priority_count: usize,
    pub resolved_count: u32,
    /// Every alert currently tracked.
    pub monitoring_count: usize,
    pub message: String,
}

/// Aggregate a snapshot of alerts into the city status.
pub fn compute_status(alerts: &[Alert], context: &StatusContext) -> CityStatus {
    let active_alert_count = alerts.iter().filter(|a| a.accepts_support()).count();
    let high_priority_count = alerts.iter().filter(|a| a.is_high_priority()).count();
    let status = StatusLevel::classify(high_priority_count, alerts.len());

    CityStatus {
        status,
        active_alert_count,
        high_priority_count,
        resolved_count: context.resolved_count,
        monitoring_count: alerts.len(),
        message: status.message(&context.city_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority};
    use chrono::Utc;

    fn context() -> StatusContext {
        StatusContext::new("Ranchi", 18)
    }

    fn normal(id: usize) -> Alert {
        Alert::new(format!("alert-{}", id), Category::Power, "Outage", Utc::now())
    }

    fn urgent(id: usize) -> Alert {
        normal(id).with_priority(Priority::High)
    }

    #[test]
    fn test_empty_collection_is_calm() {
        let status = compute_status(&[], &context());

        assert_eq!(status.status, StatusLevel::Calm);
        assert_eq!(status.active_alert_count, 0);
        assert_eq!(status.monitoring_count, 0);
        assert_eq!(status.resolved_count, 18);
        assert_eq!(status.message, "Ranchi is mostly calm. Minor issues being monitored.");
    }

    #[test]
    fn test_three_high_priority_alerts_is_alert() {
        let alerts: Vec<_> = (0..3).map(urgent).collect();
        assert_eq!(compute_status(&alerts, &context()).status, StatusLevel::Alert);

        let mut crowded: Vec<_> = (0..3).map(urgent).collect();
        crowded.extend((3..10).map(normal));
        let status = compute_status(&crowded, &context());
        assert_eq!(status.status, StatusLevel::Alert);
        assert_eq!(status.high_priority_count, 3);
    }

    #[test]
    fn test_two_high_priority_alerts_is_not_alert() {
        let alerts: Vec<_> = (0..2).map(urgent).collect();
        assert_eq!(compute_status(&alerts, &context()).status, StatusLevel::Calm);
    }

    #[test]
    fn test_six_normal_alerts_is_moderate() {
        let alerts: Vec<_> = (0..6).map(normal).collect();
        let status = compute_status(&alerts, &context());

        assert_eq!(status.status, StatusLevel::Moderate);
        assert_eq!(status.monitoring_count, 6);
        assert!(status.message.contains("moderate activity"));
    }

    #[test]
    fn test_five_alerts_is_calm() {
        let alerts: Vec<_> = (0..5).map(normal).collect();
        assert_eq!(compute_status(&alerts, &context()).status, StatusLevel::Calm);
    }

    #[test]
    fn test_active_count_excludes_high_confidence() {
        let alerts = vec![
            normal(1).with_supporters(47),
            normal(2).with_supporters(23),
            normal(3).with_supporters(8),
        ];
        let status = compute_status(&alerts, &context());

        assert_eq!(status.active_alert_count, 2);
        assert_eq!(status.monitoring_count, 3);
    }

    #[test]
    fn test_compute_status_is_pure() {
        let alerts: Vec<_> = (0..4).map(urgent).collect();
        let first = compute_status(&alerts, &context());
        let second = compute_status(&alerts, &context());
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(compute_status(&[], &context())).unwrap();
        assert_eq!(json["status"], "calm");
        assert_eq!(json["activeAlertCount"], 0);
        assert_eq!(json["resolvedCount"], 18);
        assert_eq!(json["monitoringCount"], 0);
    }
}
