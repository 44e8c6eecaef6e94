use serde::{Deserialize, Serialize};

/// Consecutive-period compliance counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Run of compliant periods ending at the most recent one.
    pub current: u32,
    /// Longest compliant run anywhere in the window.
    pub longest: u32,
}
