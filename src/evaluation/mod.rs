pub mod evaluation_model;
pub mod evaluation_repository;
pub mod evaluation_service;
pub mod evaluation_traits;

pub use evaluation_model::{
    EvaluationScope, GoalEvaluation, GoalOutcome, GoalPeriod, GoalTypeBucket,
};
pub use evaluation_repository::GoalHistoryRepository;
pub use evaluation_service::{
    goal_outcome, goal_period, is_goal_expired, to_history_entry, EvaluationService,
};
pub use evaluation_traits::{EvaluationServiceTrait, GoalHistoryRepositoryTrait};
