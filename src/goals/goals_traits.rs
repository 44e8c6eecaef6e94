use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::goals::goals_model::{CompanyGoals, Goal, NewGoal};
use crate::intents::intents_model::IntentDefaults;

/// Trait for goal repository operations.
///
/// Personal goals live in one document keyed by userId; a missing document
/// behaves as an empty map so first use needs no setup step.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn load_all_goals(&self) -> Result<HashMap<String, Vec<Goal>>>;
    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, goal: Goal) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()>;
    async fn delete_goals_for_user(&self, user_id: &str) -> Result<()>;

    fn get_company_goals(&self) -> Result<Option<CompanyGoals>>;
    async fn save_company_goals(&self, goals: &CompanyGoals) -> Result<()>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_all_goals(&self) -> Result<HashMap<String, Vec<Goal>>>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn create_goals_from_text(
        &self,
        user_id: &str,
        texts: &[String],
        defaults: &IntentDefaults,
    ) -> Result<Vec<Goal>>;
    async fn update_goal(&self, user_id: &str, goal: Goal) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()>;
    async fn delete_goals_for_user(&self, user_id: &str) -> Result<()>;

    fn get_company_goals(&self) -> Result<CompanyGoals>;
    async fn merge_company_goals_from_text(
        &self,
        texts: &[String],
        defaults: &IntentDefaults,
    ) -> Result<CompanyGoals>;

    async fn recompute_billable_currents(
        &self,
        user_id: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<Goal>>;
}
