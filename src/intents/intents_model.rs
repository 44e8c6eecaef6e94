use serde::{Deserialize, Serialize};

use crate::goals::goals_model::Timeframe;

/// Metric a free-text goal is understood to track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    BillableHours,
    NonBillableHours,
    Revenue,
    RealizationRate,
    Utilization,
    Retention,
    Cvs,
    Meetings,
    FocusHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalScope {
    Company,
    Team,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = "<=")]
    AtMost,
    #[serde(rename = "==")]
    Exactly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetUnit {
    Hours,
    Points,
    Percent,
    Dollars,
    Count,
}

/// Structured form of one free-text goal sentence.
///
/// Percent targets are stored as decimal fractions: "85%" resolves to a
/// target of 0.85, not 85. The source sentence is retained for audit and
/// for seeding goal descriptions; the intent itself is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalGoalIntent {
    pub metric_key: MetricKey,
    pub scope: GoalScope,
    pub timeframe: Timeframe,
    pub comparator: Comparator,
    pub target: f64,
    pub unit: TargetUnit,
    pub entity_name: Option<String>,
    pub original_text: String,
}

/// Caller-supplied fallbacks for the fields free text often leaves implicit.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentDefaults {
    pub scope: Option<GoalScope>,
    pub timeframe: Option<Timeframe>,
    pub comparator: Option<Comparator>,
}
