use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{QUALIFYING_SOURCES, SECONDS_PER_HOUR};

/// Domain model for one logged block of work.
///
/// `duration` is in seconds. `source` tags how the entry was produced
/// ("manual-form", "timer", "import", ...); only qualifying sources count
/// toward goal recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub duration: i64,
    pub billable: bool,
    pub source: String,
    pub description: Option<String>,
    pub case_id: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

impl TimeEntry {
    pub fn hours(&self) -> f64 {
        self.duration as f64 / SECONDS_PER_HOUR
    }

    pub fn qualifies_for_goals(&self) -> bool {
        QUALIFYING_SOURCES.contains(&self.source.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub id: Option<String>,
    pub user_id: String,
    pub date: NaiveDate,
    pub duration: i64,
    pub billable: bool,
    pub source: String,
    pub description: Option<String>,
    pub case_id: Option<String>,
    pub hourly_rate: Option<Decimal>,
}

impl NewTimeEntry {
    pub fn into_entry(self) -> TimeEntry {
        TimeEntry {
            id: self.id.unwrap_or_else(generate_entry_id),
            user_id: self.user_id,
            date: self.date,
            duration: self.duration,
            billable: self.billable,
            source: self.source,
            description: self.description,
            case_id: self.case_id,
            hourly_rate: self.hourly_rate,
            created_at: Utc::now().naive_utc(),
        }
    }
}

pub fn generate_entry_id() -> String {
    format!(
        "entry-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}
