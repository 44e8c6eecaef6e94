use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::constants::{COMPANY_GOALS_KEY, PERSONAL_GOALS_KEY};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{CompanyGoals, Goal, NewGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::storage::DocumentStoreTrait;

pub struct GoalRepository<S: DocumentStoreTrait> {
    store: Arc<S>,
}

impl<S: DocumentStoreTrait> GoalRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        GoalRepository { store }
    }

    fn load_map(&self) -> Result<HashMap<String, Vec<Goal>>> {
        match self.store.get_document(PERSONAL_GOALS_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(HashMap::new()),
        }
    }

    async fn save_map(&self, map: &HashMap<String, Vec<Goal>>) -> Result<()> {
        let value = serde_json::to_value(map)?;
        self.store.put_document(PERSONAL_GOALS_KEY, &value).await
    }
}

#[async_trait]
impl<S: DocumentStoreTrait> GoalRepositoryTrait for GoalRepository<S> {
    fn load_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut map = self.load_map()?;
        Ok(map.remove(user_id).unwrap_or_default())
    }

    fn load_all_goals(&self) -> Result<HashMap<String, Vec<Goal>>> {
        self.load_map()
    }

    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let goal = new_goal.into_goal();
        let mut map = self.load_map()?;
        map.entry(user_id.to_string()).or_default().push(goal.clone());
        self.save_map(&map).await?;
        Ok(goal)
    }

    async fn update_goal(&self, user_id: &str, goal: Goal) -> Result<Goal> {
        let mut map = self.load_map()?;
        let goals = map.get_mut(user_id).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "No goals for user: {}",
                user_id
            )))
        })?;

        let slot = goals.iter_mut().find(|g| g.id == goal.id).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Goal not found: {}",
                goal.id
            )))
        })?;
        *slot = goal.clone();

        self.save_map(&map).await?;
        Ok(goal)
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()> {
        let mut map = self.load_map()?;
        let goals = map.get_mut(user_id).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "No goals for user: {}",
                user_id
            )))
        })?;

        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        if goals.len() == before {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Goal not found: {}",
                goal_id
            ))));
        }

        self.save_map(&map).await
    }

    async fn delete_goals_for_user(&self, user_id: &str) -> Result<()> {
        let mut map = self.load_map()?;
        map.remove(user_id);
        self.save_map(&map).await
    }

    fn get_company_goals(&self) -> Result<Option<CompanyGoals>> {
        match self.store.get_document(COMPANY_GOALS_KEY)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn save_company_goals(&self, goals: &CompanyGoals) -> Result<()> {
        let mut stamped = goals.clone();
        stamped.updated_at = Some(Utc::now().naive_utc());
        let value = serde_json::to_value(&stamped)?;
        self.store.put_document(COMPANY_GOALS_KEY, &value).await
    }
}
