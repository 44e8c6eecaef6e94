use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::goals::goals_model::Timeframe;

/// Binary outcome of a closed goal period.
///
/// Deliberately distinct from the dashboard's four-way `PerformanceBand`:
/// goal history records only Met or Missed, with no partial tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalOutcome {
    Met,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluationScope {
    Personal,
    Team,
}

/// Fixed taxonomy the free-form goal `type` strings are bucketed into
/// when a goal is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalTypeBucket {
    BillableHours,
    CaseBased,
    TimeManagement,
    Culture,
    Revenue,
    General,
}

impl GoalTypeBucket {
    /// Substring classifier, first matching bucket wins.
    pub fn classify(raw: &str) -> GoalTypeBucket {
        let lowered = raw.to_lowercase();
        if lowered.contains("billable") && !lowered.contains("non-billable") {
            GoalTypeBucket::BillableHours
        } else if lowered.contains("case") {
            GoalTypeBucket::CaseBased
        } else if lowered.contains("time")
            || lowered.contains("focus")
            || lowered.contains("utilization")
        {
            GoalTypeBucket::TimeManagement
        } else if lowered.contains("culture")
            || lowered.contains("contribution")
            || lowered.contains("meeting")
            || lowered.contains("client")
        {
            GoalTypeBucket::Culture
        } else if lowered.contains("revenue") || lowered.contains("billing") {
            GoalTypeBucket::Revenue
        } else {
            GoalTypeBucket::General
        }
    }
}

/// Boundaries of the period a goal is judged over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPeriod {
    pub period_start: NaiveDateTime,
    pub period_end: NaiveDateTime,
}

/// One append-only history record per evaluated goal period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvaluation {
    pub goal_id: String,
    pub user_id: String,
    pub goal_name: String,
    pub goal_type: GoalTypeBucket,
    pub frequency: Timeframe,
    pub target_value: f64,
    pub actual_value: f64,
    pub status: GoalOutcome,
    pub period_start: NaiveDateTime,
    pub period_end: NaiveDateTime,
    pub completion_date: NaiveDateTime,
    pub goal_scope: EvaluationScope,
}

/// Persisted shape of the history document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalHistoryDocument {
    pub data: GoalHistoryData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalHistoryData {
    #[serde(rename = "goalHistory")]
    pub goal_history: Vec<GoalEvaluation>,
}
