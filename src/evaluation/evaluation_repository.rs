use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::GOAL_HISTORY_KEY;
use crate::errors::Result;
use crate::evaluation::evaluation_model::{GoalEvaluation, GoalHistoryDocument};
use crate::evaluation::evaluation_traits::GoalHistoryRepositoryTrait;
use crate::storage::DocumentStoreTrait;

pub struct GoalHistoryRepository<S: DocumentStoreTrait> {
    store: Arc<S>,
}

impl<S: DocumentStoreTrait> GoalHistoryRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        GoalHistoryRepository { store }
    }

    fn load_document(&self) -> Result<GoalHistoryDocument> {
        match self.store.get_document(GOAL_HISTORY_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(GoalHistoryDocument::default()),
        }
    }
}

#[async_trait]
impl<S: DocumentStoreTrait> GoalHistoryRepositoryTrait for GoalHistoryRepository<S> {
    fn load_history(&self) -> Result<Vec<GoalEvaluation>> {
        Ok(self.load_document()?.data.goal_history)
    }

    async fn append_evaluations(&self, evaluations: &[GoalEvaluation]) -> Result<()> {
        if evaluations.is_empty() {
            return Ok(());
        }
        let mut document = self.load_document()?;
        document.data.goal_history.extend_from_slice(evaluations);
        let value = serde_json::to_value(&document)?;
        self.store.put_document(GOAL_HISTORY_KEY, &value).await
    }
}
