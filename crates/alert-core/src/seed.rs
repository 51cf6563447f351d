//! Demo dataset for a freshly started dashboard.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Alert, Category, GeoPoint, Priority};

/// The Ranchi demo alerts, newest report times relative to `now`.
///
/// The first four carry map coordinates; the last has none and so only
/// appears in the feed and operator views.
pub fn demo_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert::new(
            "alert-001",
            Category::Traffic,
            "Heavy Traffic Congestion",
            now - Duration::hours(2),
        )
        .with_location("Circular Road, Lalpur")
        .with_description(
            "Major traffic jam near the bus stand. Multiple vehicles stuck for over 30 minutes. \
             Alternative routes recommended.",
        )
        .with_supporters(47)
        .with_views(234)
        .with_priority(Priority::High)
        .with_image_url("https://images.unsplash.com/photo-1681026552203-d2ef6b401df4?w=800")
        .with_coordinates(GeoPoint::new(35.0, 45.0)),
        Alert::new(
            "alert-002",
            Category::Power,
            "Power Outage",
            now - Duration::hours(4),
        )
        .with_location("Hindpiri, Sector 3")
        .with_description(
            "Complete power outage affecting residential area. No electricity for the past \
             4 hours. Local transformer issue suspected.",
        )
        .with_supporters(23)
        .with_views(156)
        .with_image_url("https://images.unsplash.com/photo-1707590220311-ef90eb2408a7?w=800")
        .with_coordinates(GeoPoint::new(55.0, 65.0)),
        Alert::new(
            "alert-003",
            Category::Water,
            "Water Supply Disruption",
            now - Duration::minutes(30),
        )
        .with_location("Kanke Road")
        .with_description(
            "No water supply since morning. Pipe burst reported near the main junction. \
             Repair work underway.",
        )
        .with_supporters(8)
        .with_views(45)
        .with_image_url("https://images.unsplash.com/photo-1758826898770-c76ce24b4eff?w=800")
        .with_coordinates(GeoPoint::new(70.0, 30.0)),
        Alert::new(
            "alert-004",
            Category::Power,
            "Streetlight Not Working",
            now - Duration::days(1),
        )
        .with_location("Main Road, Doranda")
        .with_description(
            "Multiple streetlights are not working, causing safety concerns at night.",
        )
        .with_supporters(15)
        .with_views(89)
        .with_coordinates(GeoPoint::new(25.0, 75.0)),
        Alert::new(
            "alert-005",
            Category::Traffic,
            "Road Construction Delay",
            now - Duration::hours(3),
        )
        .with_location("Harmu Bypass")
        .with_description(
            "Road construction causing major delays. No clear timeline for completion.",
        )
        .with_supporters(34)
        .with_views(178)
        .with_priority(Priority::Normal),
    ]
}
