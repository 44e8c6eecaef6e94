use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::TIME_ENTRIES_KEY;
use crate::errors::{Error, Result, ValidationError};
use crate::storage::DocumentStoreTrait;
use crate::timesheet::timesheet_model::{NewTimeEntry, TimeEntry};
use crate::timesheet::timesheet_traits::TimeEntryRepositoryTrait;

/// Time entries are persisted as a single document mapping userId to that
/// user's entry list.
pub struct TimeEntryRepository<S: DocumentStoreTrait> {
    store: Arc<S>,
}

impl<S: DocumentStoreTrait> TimeEntryRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        TimeEntryRepository { store }
    }

    fn load_map(&self) -> Result<HashMap<String, Vec<TimeEntry>>> {
        match self.store.get_document(TIME_ENTRIES_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(HashMap::new()),
        }
    }

    async fn save_map(&self, map: &HashMap<String, Vec<TimeEntry>>) -> Result<()> {
        let value = serde_json::to_value(map)?;
        self.store.put_document(TIME_ENTRIES_KEY, &value).await
    }
}

#[async_trait]
impl<S: DocumentStoreTrait> TimeEntryRepositoryTrait for TimeEntryRepository<S> {
    fn load_entries_for_user(&self, user_id: &str) -> Result<Vec<TimeEntry>> {
        let mut map = self.load_map()?;
        Ok(map.remove(user_id).unwrap_or_default())
    }

    fn load_all_entries(&self) -> Result<HashMap<String, Vec<TimeEntry>>> {
        self.load_map()
    }

    async fn insert_entry(&self, new_entry: NewTimeEntry) -> Result<TimeEntry> {
        let entry = new_entry.into_entry();
        let mut map = self.load_map()?;
        map.entry(entry.user_id.clone()).or_default().push(entry.clone());
        self.save_map(&map).await?;
        Ok(entry)
    }

    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<()> {
        let mut map = self.load_map()?;
        let entries = map.get_mut(user_id).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "No time entries for user: {}",
                user_id
            )))
        })?;

        let before = entries.len();
        entries.retain(|entry| entry.id != entry_id);
        if entries.len() == before {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Time entry not found: {}",
                entry_id
            ))));
        }

        self.save_map(&map).await
    }
}
