/// Seconds per logged hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Time-entry sources that count toward goal recomputation
pub const QUALIFYING_SOURCES: [&str; 2] = ["manual-form", "timer"];

/// Storage key for the personal-goals document (userId -> goals)
pub const PERSONAL_GOALS_KEY: &str = "personal-goals";

/// Storage key for the company-goals singleton document
pub const COMPANY_GOALS_KEY: &str = "company-goals";

/// Storage key for the goal evaluation history document
pub const GOAL_HISTORY_KEY: &str = "goal-history";

/// Storage key for the time-entries document (userId -> entries)
pub const TIME_ENTRIES_KEY: &str = "time-entries";

/// Weight of the billable ratio in the contribution value score
pub const CVS_BILLABLE_WEIGHT: f64 = 0.8;

/// Weight of non-billable contribution points in the contribution value score
pub const CVS_NON_BILLABLE_WEIGHT: f64 = 0.2;

/// Fraction of target below which a dashboard metric counts as partially met
pub const PARTIAL_BAND_THRESHOLD: f64 = 0.9;
