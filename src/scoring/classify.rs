//! Score to narrative band mapping

use crate::inventory::narrative::Category;
use crate::inventory::scale::Thresholds;

/// Map a mean score onto a narrative band.
///
/// Scores above `high` and above `mid` go up a band; a score exactly at `low`
/// stays in `ModeratelyLow` rather than dropping to `Low`.
pub fn classify(score: f64, thresholds: &Thresholds) -> Category {
    if score > thresholds.high {
        Category::High
    } else if score > thresholds.mid() {
        Category::ModeratelyHigh
    } else if score >= thresholds.low {
        Category::ModeratelyLow
    } else {
        Category::Low
    }
}
