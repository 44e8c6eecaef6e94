use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::timesheet::timesheet_model::{NewTimeEntry, TimeEntry};
use crate::timesheet::timesheet_traits::{TimeEntryRepositoryTrait, TimeEntryServiceTrait};

pub struct TimeEntryService<R: TimeEntryRepositoryTrait> {
    entry_repo: Arc<R>,
}

impl<R: TimeEntryRepositoryTrait> TimeEntryService<R> {
    pub fn new(entry_repo: Arc<R>) -> Self {
        TimeEntryService { entry_repo }
    }

    fn qualifying_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        billable: bool,
    ) -> Result<Vec<TimeEntry>> {
        let entries = self.entry_repo.load_entries_for_user(user_id)?;
        Ok(entries
            .into_iter()
            .filter(|entry| {
                entry.billable == billable
                    && entry.qualifies_for_goals()
                    && entry.date >= start
                    && entry.date <= end
            })
            .collect())
    }
}

#[async_trait]
impl<R: TimeEntryRepositoryTrait> TimeEntryServiceTrait for TimeEntryService<R> {
    fn get_entries(&self, user_id: &str) -> Result<Vec<TimeEntry>> {
        self.entry_repo.load_entries_for_user(user_id)
    }

    fn get_entries_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>> {
        let entries = self.entry_repo.load_entries_for_user(user_id)?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.date >= start && entry.date <= end)
            .collect())
    }

    async fn track_entry(&self, new_entry: NewTimeEntry) -> Result<TimeEntry> {
        self.entry_repo.insert_entry(new_entry).await
    }

    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<()> {
        self.entry_repo.delete_entry(user_id, entry_id).await
    }

    /// Sum of duration/3600 over billable entries from qualifying sources
    /// dated within `[start, end]`. This is the aggregate behind
    /// `Goal.current` for billable-hour goals.
    fn billable_hours_in_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64> {
        let entries = self.qualifying_in_range(user_id, start, end, true)?;
        Ok(entries.iter().map(TimeEntry::hours).sum())
    }

    fn non_billable_hours_in_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64> {
        let entries = self.qualifying_in_range(user_id, start, end, false)?;
        Ok(entries.iter().map(TimeEntry::hours).sum())
    }

    /// Billable value of the period: duration x hourly rate, summed over
    /// billable entries that carry a rate. Unlike the goal aggregates,
    /// every source counts here: imported work is still billed work.
    fn revenue_in_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        let entries = self.entry_repo.load_entries_for_user(user_id)?;
        let total = entries
            .iter()
            .filter(|entry| entry.billable && entry.date >= start && entry.date <= end)
            .filter_map(|entry| {
                entry
                    .hourly_rate
                    .map(|rate| Decimal::from(entry.duration) / dec!(3600) * rate)
            })
            .sum();
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryDocumentStore;
    use crate::timesheet::timesheet_repository::TimeEntryRepository;

    fn service() -> TimeEntryService<TimeEntryRepository<MemoryDocumentStore>> {
        let store = Arc::new(MemoryDocumentStore::new());
        TimeEntryService::new(Arc::new(TimeEntryRepository::new(store)))
    }

    fn entry(
        user_id: &str,
        date: &str,
        duration: i64,
        billable: bool,
        source: &str,
    ) -> NewTimeEntry {
        NewTimeEntry {
            id: None,
            user_id: user_id.to_string(),
            date: date.parse().unwrap(),
            duration,
            billable,
            source: source.to_string(),
            description: None,
            case_id: None,
            hourly_rate: None,
        }
    }

    #[tokio::test]
    async fn test_billable_hours_filters_source_billable_and_range() {
        let service = service();
        // Counts: billable, qualifying source, in range
        service
            .track_entry(entry("anna", "2024-05-14", 7200, true, "manual-form"))
            .await
            .unwrap();
        service
            .track_entry(entry("anna", "2024-05-15", 3600, true, "timer"))
            .await
            .unwrap();
        // Skipped: non-qualifying source
        service
            .track_entry(entry("anna", "2024-05-15", 3600, true, "import"))
            .await
            .unwrap();
        // Skipped: not billable
        service
            .track_entry(entry("anna", "2024-05-15", 3600, false, "timer"))
            .await
            .unwrap();
        // Skipped: out of range
        service
            .track_entry(entry("anna", "2024-05-21", 3600, true, "timer"))
            .await
            .unwrap();
        // Skipped: different user
        service
            .track_entry(entry("ben", "2024-05-15", 3600, true, "timer"))
            .await
            .unwrap();

        let hours = service
            .billable_hours_in_period(
                "anna",
                "2024-05-13".parse().unwrap(),
                "2024-05-19".parse().unwrap(),
            )
            .unwrap();
        assert_eq!(hours, 3.0);

        let non_billable = service
            .non_billable_hours_in_period(
                "anna",
                "2024-05-13".parse().unwrap(),
                "2024-05-19".parse().unwrap(),
            )
            .unwrap();
        assert_eq!(non_billable, 1.0);
    }

    #[tokio::test]
    async fn test_revenue_sums_rate_bearing_billable_entries() {
        let service = service();
        let mut with_rate = entry("anna", "2024-05-14", 5400, true, "timer");
        with_rate.hourly_rate = Some(dec!(200));
        service.track_entry(with_rate).await.unwrap();
        // No rate, contributes nothing
        service
            .track_entry(entry("anna", "2024-05-14", 3600, true, "timer"))
            .await
            .unwrap();
        // Imported billable work is still billed work, unlike in the
        // goal-progress aggregates where only manual/timer sources count.
        let mut imported = entry("anna", "2024-05-16", 3600, true, "import");
        imported.hourly_rate = Some(dec!(150));
        service.track_entry(imported).await.unwrap();
        // Non-billable never bills, whatever the rate says.
        let mut internal = entry("anna", "2024-05-16", 3600, false, "timer");
        internal.hourly_rate = Some(dec!(150));
        service.track_entry(internal).await.unwrap();

        let revenue = service
            .revenue_in_period(
                "anna",
                "2024-05-13".parse().unwrap(),
                "2024-05-19".parse().unwrap(),
            )
            .unwrap();
        assert_eq!(revenue, dec!(450));
    }

    #[tokio::test]
    async fn test_delete_entry_removes_only_that_entry() {
        let service = service();
        let kept = service
            .track_entry(entry("anna", "2024-05-14", 3600, true, "timer"))
            .await
            .unwrap();
        let dropped = service
            .track_entry(entry("anna", "2024-05-15", 3600, true, "timer"))
            .await
            .unwrap();

        service.delete_entry("anna", &dropped.id).await.unwrap();
        let remaining = service.get_entries("anna").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);

        assert!(service.delete_entry("anna", &dropped.id).await.is_err());
    }
}
