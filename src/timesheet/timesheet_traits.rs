use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::timesheet::timesheet_model::{NewTimeEntry, TimeEntry};

/// Trait defining the contract for time-entry repository operations.
#[async_trait]
pub trait TimeEntryRepositoryTrait: Send + Sync {
    fn load_entries_for_user(&self, user_id: &str) -> Result<Vec<TimeEntry>>;
    fn load_all_entries(&self) -> Result<HashMap<String, Vec<TimeEntry>>>;
    async fn insert_entry(&self, new_entry: NewTimeEntry) -> Result<TimeEntry>;
    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<()>;
}

/// Trait defining the contract for time-entry service operations.
#[async_trait]
pub trait TimeEntryServiceTrait: Send + Sync {
    fn get_entries(&self, user_id: &str) -> Result<Vec<TimeEntry>>;
    fn get_entries_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>>;
    async fn track_entry(&self, new_entry: NewTimeEntry) -> Result<TimeEntry>;
    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<()>;

    fn billable_hours_in_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64>;
    fn non_billable_hours_in_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64>;
    fn revenue_in_period(&self, user_id: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Decimal>;
}
