//! Confidence thresholds and the support transition.

use crate::model::{Alert, Confidence};

/// Supporters needed for an alert to reach [`Confidence::Medium`].
pub const MEDIUM_THRESHOLD: u32 = 15;

/// Supporters needed for an alert to reach [`Confidence::High`].
pub const HIGH_THRESHOLD: u32 = 40;

/// Look up the confidence level for a supporter count.
///
/// | supporters | confidence |
/// |------------|------------|
/// | < 15       | low        |
/// | 15..=39    | medium     |
/// | >= 40      | high       |
pub fn confidence_for(supporter_count: u32) -> Confidence {
    if supporter_count >= HIGH_THRESHOLD {
        Confidence::High
    } else if supporter_count >= MEDIUM_THRESHOLD {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Apply one support event to an alert, returning the replacement record.
///
/// Total over every alert: the counter saturates rather than overflowing.
/// This does not check [`Alert::accepts_support`]; callers decide whether a
/// support event should be emitted at all.
pub fn apply_support(alert: &Alert) -> Alert {
    let mut next = alert.clone();
    next.supporter_count = alert.supporter_count.saturating_add(1);
    next
}
