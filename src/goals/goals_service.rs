use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;

use crate::errors::Result;
use crate::evaluation::evaluation_model::GoalTypeBucket;
use crate::evaluation::evaluation_service::goal_period;
use crate::goals::goals_model::{CompanyGoals, Goal, GoalStatus, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::intents::intents_model::IntentDefaults;
use crate::intents::intents_service::{
    apply_canonical_to_company_goals, map_canonical_to_personal_goal,
    resolve_goal_intent_from_text,
};
use crate::timesheet::timesheet_traits::TimeEntryServiceTrait;

pub struct GoalService<G: GoalRepositoryTrait, T: TimeEntryServiceTrait> {
    goal_repo: Arc<G>,
    timesheet: Arc<T>,
}

impl<G: GoalRepositoryTrait, T: TimeEntryServiceTrait> GoalService<G, T> {
    pub fn new(goal_repo: Arc<G>, timesheet: Arc<T>) -> Self {
        GoalService {
            goal_repo,
            timesheet,
        }
    }
}

#[async_trait]
impl<G: GoalRepositoryTrait, T: TimeEntryServiceTrait> GoalServiceTrait for GoalService<G, T> {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals_for_user(user_id)
    }

    fn get_all_goals(&self) -> Result<HashMap<String, Vec<Goal>>> {
        self.goal_repo.load_all_goals()
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        self.goal_repo.insert_goal(user_id, new_goal).await
    }

    /// Resolves each free-text sentence and creates a goal per resolvable
    /// one. Unresolvable sentences are skipped, not errors.
    async fn create_goals_from_text(
        &self,
        user_id: &str,
        texts: &[String],
        defaults: &IntentDefaults,
    ) -> Result<Vec<Goal>> {
        let mut created = Vec::new();
        for text in texts {
            let intent = match resolve_goal_intent_from_text(text, defaults) {
                Some(intent) => intent,
                None => {
                    debug!("Skipping unresolvable goal text: {}", text);
                    continue;
                }
            };
            let new_goal = map_canonical_to_personal_goal(&intent);
            created.push(self.goal_repo.insert_goal(user_id, new_goal).await?);
        }
        Ok(created)
    }

    async fn update_goal(&self, user_id: &str, goal: Goal) -> Result<Goal> {
        self.goal_repo.update_goal(user_id, goal).await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()> {
        self.goal_repo.delete_goal(user_id, goal_id).await
    }

    async fn delete_goals_for_user(&self, user_id: &str) -> Result<()> {
        self.goal_repo.delete_goals_for_user(user_id).await
    }

    fn get_company_goals(&self) -> Result<CompanyGoals> {
        Ok(self.goal_repo.get_company_goals()?.unwrap_or_default())
    }

    /// Resolves the sentences and folds the billable-hour ones into the
    /// stored company record via the max-merge, then persists the result.
    async fn merge_company_goals_from_text(
        &self,
        texts: &[String],
        defaults: &IntentDefaults,
    ) -> Result<CompanyGoals> {
        let intents: Vec<_> = texts
            .iter()
            .filter_map(|text| resolve_goal_intent_from_text(text, defaults))
            .collect();

        let base = self.goal_repo.get_company_goals()?;
        let merged = apply_canonical_to_company_goals(&intents, base.as_ref());
        self.goal_repo.save_company_goals(&merged).await?;
        Ok(merged)
    }

    /// Recomputes `current` from the timesheet for the user's active
    /// billable-hour goals. Other goal types keep whatever progress was
    /// last written to them.
    async fn recompute_billable_currents(
        &self,
        user_id: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<Goal>> {
        let goals = self.goal_repo.load_goals_for_user(user_id)?;
        let mut updated = Vec::new();

        for mut goal in goals {
            if goal.status != GoalStatus::Active
                || GoalTypeBucket::classify(&goal.goal_type) != GoalTypeBucket::BillableHours
            {
                updated.push(goal);
                continue;
            }

            let period = goal_period(goal.frequency, now);
            goal.current = self.timesheet.billable_hours_in_period(
                user_id,
                period.period_start.date(),
                period.period_end.date(),
            )?;
            let goal = self.goal_repo.update_goal(user_id, goal).await?;
            updated.push(goal);
        }

        Ok(updated)
    }
}
