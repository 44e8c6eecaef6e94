use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracking period for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Expired,
}

/// Domain model for a personal goal.
///
/// `goal_type` is a free-form human-facing classification; it is bucketed
/// into a fixed taxonomy only at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: String,
    pub frequency: Timeframe,
    pub target: f64,
    pub current: f64,
    pub status: GoalStatus,
    pub created_at: NaiveDateTime,
}

/// Insertion shape for a goal; an id is generated when none is supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: String,
    pub frequency: Timeframe,
    pub target: f64,
}

impl NewGoal {
    pub fn into_goal(self) -> Goal {
        Goal {
            id: self.id.unwrap_or_else(generate_goal_id),
            name: self.name,
            description: self.description,
            goal_type: self.goal_type,
            frequency: self.frequency,
            target: self.target,
            current: 0.0,
            status: GoalStatus::Active,
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// Firm-wide billable-hour targets, a flat singleton document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyGoals {
    pub weekly_billable: f64,
    pub monthly_billable: f64,
    pub annual_billable: f64,
    pub updated_at: Option<NaiveDateTime>,
}

/// Timestamp+random composite, unique per owning user.
pub fn generate_goal_id() -> String {
    format!(
        "goal-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}
