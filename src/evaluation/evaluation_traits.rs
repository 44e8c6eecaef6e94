use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::evaluation::evaluation_model::GoalEvaluation;

/// Trait for goal-history repository operations. History is append-only;
/// nothing in this subsystem mutates or deletes recorded evaluations.
#[async_trait]
pub trait GoalHistoryRepositoryTrait: Send + Sync {
    fn load_history(&self) -> Result<Vec<GoalEvaluation>>;
    async fn append_evaluations(&self, evaluations: &[GoalEvaluation]) -> Result<()>;
}

/// Trait for goal-evaluation service operations.
#[async_trait]
pub trait EvaluationServiceTrait: Send + Sync {
    /// Expired-and-still-active goals for one user, converted to history
    /// entries. Read-only; storage failures yield an empty list.
    fn expired_goals_for_user(&self, user_id: &str, now: NaiveDateTime) -> Vec<GoalEvaluation>;

    /// Same as `expired_goals_for_user` across every user in the store.
    fn all_expired_goals(&self, now: NaiveDateTime) -> Vec<GoalEvaluation>;

    /// Evaluates one user's expired goals, appends the results to history
    /// and marks the evaluated goals completed.
    async fn evaluate_user(&self, user_id: &str, now: NaiveDateTime)
        -> Result<Vec<GoalEvaluation>>;

    /// Evaluates every user's expired goals.
    async fn evaluate_all(&self, now: NaiveDateTime) -> Result<Vec<GoalEvaluation>>;
}
