pub mod intents_model;
pub mod intents_service;

pub use intents_model::{
    CanonicalGoalIntent, Comparator, GoalScope, IntentDefaults, MetricKey, TargetUnit,
};
pub use intents_service::{
    apply_canonical_to_company_goals, map_canonical_to_personal_goal,
    resolve_goal_intent_from_text,
};
