use serde::{Deserialize, Serialize};

use crate::constants::PARTIAL_BAND_THRESHOLD;

/// Four-way classification used by dashboard metrics.
///
/// This is a different scheme from the evaluator's binary `GoalOutcome`
/// and the two are intentionally kept separate: history records never
/// carry a partial or exceeded tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceBand {
    Exceeded,
    Met,
    Partial,
    Missed,
}

impl PerformanceBand {
    /// `>= 100%` of target is met (strictly over is exceeded), `>= 90%`
    /// is partial, anything less is missed. A nonpositive target can only
    /// be met or exceeded.
    pub fn classify(current: f64, target: f64) -> PerformanceBand {
        if target <= 0.0 {
            return if current > 0.0 {
                PerformanceBand::Exceeded
            } else {
                PerformanceBand::Met
            };
        }

        let ratio = current / target;
        if ratio > 1.0 {
            PerformanceBand::Exceeded
        } else if ratio >= 1.0 {
            PerformanceBand::Met
        } else if ratio >= PARTIAL_BAND_THRESHOLD {
            PerformanceBand::Partial
        } else {
            PerformanceBand::Missed
        }
    }
}
