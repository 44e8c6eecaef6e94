pub mod metrics_model;
pub mod metrics_service;

pub use metrics_model::PerformanceBand;
pub use metrics_service::{cvs_score, efficiency, realization_rate, revenue, utilization};
