use chrono::{Duration, NaiveDate};

use crate::streaks::streaks_model::StreakSummary;
use crate::timesheet::timesheet_model::TimeEntry;
use crate::utils::time_utils::get_days_between;

/// Per-day compliance flags for the `lookback_days` days ending at
/// `end_date`, oldest first. A day complies when its qualifying billable
/// hours reach `min_hours`.
pub fn daily_compliance(
    entries: &[TimeEntry],
    min_hours: f64,
    end_date: NaiveDate,
    lookback_days: u32,
) -> Vec<bool> {
    let start_date = end_date - Duration::days(lookback_days.saturating_sub(1) as i64);
    get_days_between(start_date, end_date)
        .into_iter()
        .map(|day| {
            let hours: f64 = entries
                .iter()
                .filter(|entry| {
                    entry.date == day && entry.billable && entry.qualifies_for_goals()
                })
                .map(TimeEntry::hours)
                .sum();
            hours >= min_hours
        })
        .collect()
}

/// Counts streaks over ordered per-period compliance flags (oldest first).
/// The current streak runs backwards from the most recent period.
pub fn streak_summary(periods_met: &[bool]) -> StreakSummary {
    let current = periods_met.iter().rev().take_while(|met| **met).count() as u32;

    let mut longest = 0u32;
    let mut run = 0u32;
    for met in periods_met {
        if *met {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    StreakSummary { current, longest }
}
