use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::error;

use crate::evaluation::evaluation_model::{
    EvaluationScope, GoalEvaluation, GoalOutcome, GoalPeriod, GoalTypeBucket,
};
use crate::evaluation::evaluation_traits::{EvaluationServiceTrait, GoalHistoryRepositoryTrait};
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalStatus, Timeframe};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::utils::time_utils::{
    end_of_day, month_end, month_start, quarter_end, quarter_start, start_of_day, week_end,
    week_start, year_end, year_start,
};

/// Whether the goal's tracking period has closed as of `now`.
///
/// Daily goals are always considered expired, so every evaluation pass
/// records them even mid-day ("evaluate at least once per pass"). The
/// longer frequencies expire once `now` reaches the period's final day
/// (final Sunday second for weekly).
pub fn is_goal_expired(goal: &Goal, now: NaiveDateTime) -> bool {
    let today = now.date();
    match goal.frequency {
        Timeframe::Daily => true,
        Timeframe::Weekly => now >= week_end(today).and_hms_opt(23, 59, 59).unwrap(),
        Timeframe::Monthly => today >= month_end(today),
        Timeframe::Quarterly => today >= quarter_end(today),
        Timeframe::Annual => today >= year_end(today),
    }
}

/// Boundaries of the current period containing `now`, start at midnight
/// and end at 23:59:59.999 of the period's last day. Weeks run Monday
/// through Sunday.
pub fn goal_period(frequency: Timeframe, now: NaiveDateTime) -> GoalPeriod {
    let today = now.date();
    let (start, end) = match frequency {
        Timeframe::Daily => (today, today),
        Timeframe::Weekly => (week_start(today), week_end(today)),
        Timeframe::Monthly => (month_start(today), month_end(today)),
        Timeframe::Quarterly => (quarter_start(today), quarter_end(today)),
        Timeframe::Annual => (year_start(today), year_end(today)),
    };
    GoalPeriod {
        period_start: start_of_day(start),
        period_end: end_of_day(end),
    }
}

/// Binary classification: target-inclusive on the met side.
pub fn goal_outcome(current: f64, target: f64) -> GoalOutcome {
    if current >= target {
        GoalOutcome::Met
    } else {
        GoalOutcome::Missed
    }
}

/// Builds the history record for a goal whose period is understood to have
/// just closed. The completion date is the period end, not the wall-clock
/// moment the evaluation ran.
pub fn to_history_entry(goal: &Goal, user_id: &str, now: NaiveDateTime) -> GoalEvaluation {
    let period = goal_period(goal.frequency, now);
    GoalEvaluation {
        goal_id: goal.id.clone(),
        user_id: user_id.to_string(),
        goal_name: goal.name.clone(),
        goal_type: GoalTypeBucket::classify(&goal.goal_type),
        frequency: goal.frequency,
        target_value: goal.target,
        actual_value: goal.current,
        status: goal_outcome(goal.current, goal.target),
        period_start: period.period_start,
        period_end: period.period_end,
        completion_date: period.period_end,
        goal_scope: EvaluationScope::Personal,
    }
}

pub struct EvaluationService<G: GoalRepositoryTrait, H: GoalHistoryRepositoryTrait> {
    goal_repo: Arc<G>,
    history_repo: Arc<H>,
}

impl<G: GoalRepositoryTrait, H: GoalHistoryRepositoryTrait> EvaluationService<G, H> {
    pub fn new(goal_repo: Arc<G>, history_repo: Arc<H>) -> Self {
        EvaluationService {
            goal_repo,
            history_repo,
        }
    }

    fn convert_expired(
        &self,
        user_id: &str,
        goals: Vec<Goal>,
        now: NaiveDateTime,
    ) -> Vec<GoalEvaluation> {
        goals
            .iter()
            .filter(|goal| goal.status == GoalStatus::Active && is_goal_expired(goal, now))
            .map(|goal| to_history_entry(goal, user_id, now))
            .collect()
    }

    async fn complete_goals(&self, user_id: &str, evaluations: &[GoalEvaluation]) -> Result<()> {
        let goals = self.goal_repo.load_goals_for_user(user_id)?;
        for goal in goals {
            if evaluations.iter().any(|e| e.goal_id == goal.id) {
                let completed = Goal {
                    status: GoalStatus::Completed,
                    ..goal
                };
                self.goal_repo.update_goal(user_id, completed).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<G: GoalRepositoryTrait, H: GoalHistoryRepositoryTrait> EvaluationServiceTrait
    for EvaluationService<G, H>
{
    /// A failed read is reported the same as "no expired goals": callers of
    /// this surface cannot distinguish an absent store from a corrupt one.
    fn expired_goals_for_user(&self, user_id: &str, now: NaiveDateTime) -> Vec<GoalEvaluation> {
        let goals = match self.goal_repo.load_goals_for_user(user_id) {
            Ok(goals) => goals,
            Err(e) => {
                error!("Failed to load goals for {}: {}", user_id, e);
                return Vec::new();
            }
        };
        self.convert_expired(user_id, goals, now)
    }

    fn all_expired_goals(&self, now: NaiveDateTime) -> Vec<GoalEvaluation> {
        let all_goals = match self.goal_repo.load_all_goals() {
            Ok(map) => map,
            Err(e) => {
                error!("Failed to load goals: {}", e);
                return Vec::new();
            }
        };

        all_goals
            .into_iter()
            .flat_map(|(user_id, goals)| self.convert_expired(&user_id, goals, now))
            .collect()
    }

    async fn evaluate_user(
        &self,
        user_id: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<GoalEvaluation>> {
        let evaluations = self.expired_goals_for_user(user_id, now);
        self.history_repo.append_evaluations(&evaluations).await?;
        self.complete_goals(user_id, &evaluations).await?;
        Ok(evaluations)
    }

    async fn evaluate_all(&self, now: NaiveDateTime) -> Result<Vec<GoalEvaluation>> {
        let evaluations = self.all_expired_goals(now);
        self.history_repo.append_evaluations(&evaluations).await?;

        let mut user_ids: Vec<&str> = evaluations.iter().map(|e| e.user_id.as_str()).collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        for user_id in user_ids {
            let for_user: Vec<GoalEvaluation> = evaluations
                .iter()
                .filter(|e| e.user_id == user_id)
                .cloned()
                .collect();
            self.complete_goals(user_id, &for_user).await?;
        }

        Ok(evaluations)
    }
}
