//! Alert data model.
//!
//! [`Alert`] is the record every collaborator reads. It is replaced, never
//! edited in place: the store swaps in a new value on each transition.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::confidence;

/// Opaque alert identifier (e.g., "alert-001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AlertId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlertId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AlertId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of disruption being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Traffic,
    Power,
    Water,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Traffic => "traffic",
            Category::Power => "power",
            Category::Water => "water",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crowd-derived confidence in an alert.
///
/// Ordered: `Low < Medium < High`. Always derived from the supporter count,
/// see [`confidence::confidence_for`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Fill level of the confidence meter shown on alert cards.
    pub fn progress_percent(&self) -> u8 {
        match self {
            Confidence::Low => 15,
            Confidence::Medium => 50,
            Confidence::High => 100,
        }
    }

    /// Whether enough residents have confirmed the alert to badge it.
    pub fn is_verified(&self) -> bool {
        *self >= Confidence::Medium
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority flag assigned by upstream classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
}

/// Map position assigned by the geocoding collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single reported disruption.
///
/// Supporter and view counters are only moved forward by the store, so they
/// are read through accessors. Confidence is not stored at all; it is
/// re-derived from the supporter count on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "AlertRecord", from = "AlertRecord")]
pub struct Alert {
    pub id: AlertId,
    pub category: Category,
    pub title: String,
    pub location: String,
    pub description: String,
    pub(crate) supporter_count: u32,
    pub(crate) view_count: u32,
    pub priority: Option<Priority>,
    pub created_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub coordinates: Option<GeoPoint>,
}

impl Alert {
    /// Create an alert with no supporters, no views and no optional fields.
    pub fn new(
        id: impl Into<AlertId>,
        category: Category,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            location: String::new(),
            description: String::new(),
            supporter_count: 0,
            view_count: 0,
            priority: None,
            created_at,
            image_url: None,
            coordinates: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the supporter count an alert was ingested with.
    pub fn with_supporters(mut self, count: u32) -> Self {
        self.supporter_count = count;
        self
    }

    /// Set the view count an alert was ingested with.
    pub fn with_views(mut self, count: u32) -> Self {
        self.view_count = count;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_coordinates(mut self, point: GeoPoint) -> Self {
        self.coordinates = Some(point);
        self
    }

    pub fn supporter_count(&self) -> u32 {
        self.supporter_count
    }

    pub fn view_count(&self) -> u32 {
        self.view_count
    }

    /// Confidence level for the current supporter count.
    pub fn confidence(&self) -> Confidence {
        confidence::confidence_for(self.supporter_count)
    }

    /// Whether the alert can still accrue support.
    ///
    /// Collaborators check this before emitting a support event.
    pub fn accepts_support(&self) -> bool {
        self.confidence() != Confidence::High
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Some(Priority::High)
    }
}

/// Wire shape of an [`Alert`].
///
/// `confidence`, `progressPercent` and `verified` are always filled from the
/// supporter count when serializing and ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: AlertId,
    pub category: Category,
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub confidence: Confidence,
    /// Confidence meter fill, 0-100.
    #[serde(default)]
    pub progress_percent: u8,
    #[serde(default)]
    pub verified: bool,
    pub supporter_count: u32,
    pub view_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,
}

impl From<Alert> for AlertRecord {
    fn from(alert: Alert) -> Self {
        let confidence = alert.confidence();
        Self {
            id: alert.id,
            category: alert.category,
            title: alert.title,
            location: alert.location,
            description: alert.description,
            confidence,
            progress_percent: confidence.progress_percent(),
            verified: confidence.is_verified(),
            supporter_count: alert.supporter_count,
            view_count: alert.view_count,
            priority: alert.priority,
            created_at: alert.created_at,
            image_url: alert.image_url,
            coordinates: alert.coordinates,
        }
    }
}

impl From<AlertRecord> for Alert {
    fn from(record: AlertRecord) -> Self {
        Self {
            id: record.id,
            category: record.category,
            title: record.title,
            location: record.location,
            description: record.description,
            supporter_count: record.supporter_count,
            view_count: record.view_count,
            priority: record.priority,
            created_at: record.created_at,
            image_url: record.image_url,
            coordinates: record.coordinates,
        }
    }
}
