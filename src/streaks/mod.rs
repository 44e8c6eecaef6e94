pub mod streaks_model;
pub mod streaks_service;

pub use streaks_model::StreakSummary;
pub use streaks_service::{daily_compliance, streak_summary};
