use chrono::{NaiveDate, NaiveDateTime};
use lextime_core::evaluation::{EvaluationServiceTrait, GoalOutcome};
use lextime_core::goals::{GoalServiceTrait, GoalStatus, NewGoal, Timeframe};
use lextime_core::intents::IntentDefaults;
use lextime_core::timesheet::{NewTimeEntry, TimeEntryServiceTrait};

mod common;

fn at(date: &str, h: u32, m: u32, s: u32) -> NaiveDateTime {
    date.parse::<NaiveDate>()
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn timer_entry(user_id: &str, date: &str, hours: f64) -> NewTimeEntry {
    NewTimeEntry {
        id: None,
        user_id: user_id.to_string(),
        date: date.parse().unwrap(),
        duration: (hours * 3600.0) as i64,
        billable: true,
        source: "timer".to_string(),
        description: None,
        case_id: None,
        hourly_rate: None,
    }
}

#[tokio::test]
async fn test_free_text_onboarding_through_evaluation() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let ctx = common::TestContext::new(dir.path());

    // Onboarding: one resolvable sentence, one that must be skipped.
    let texts = vec![
        "Log at least 8 billable hours daily".to_string(),
        "just do your best".to_string(),
    ];
    let created = ctx
        .goal_service
        .create_goals_from_text("anna", &texts, &IntentDefaults::default())
        .await?;
    assert_eq!(created.len(), 1);
    let goal = &created[0];
    assert_eq!(goal.name, "Billable Hours");
    assert_eq!(goal.frequency, Timeframe::Daily);
    assert_eq!(goal.target, 8.0);
    assert_eq!(goal.current, 0.0);
    assert_eq!(goal.status, GoalStatus::Active);

    // Log 5 billable hours, then recompute progress from the timesheet.
    ctx.timesheet
        .track_entry(timer_entry("anna", "2024-05-15", 5.0))
        .await?;
    let now = at("2024-05-15", 18, 0, 0);
    let goals = ctx
        .goal_service
        .recompute_billable_currents("anna", now)
        .await?;
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].current, 5.0);

    // Daily goals are evaluated on every pass, even mid-day.
    let evaluations = ctx.evaluation.evaluate_user("anna", now).await?;
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].status, GoalOutcome::Missed);
    assert_eq!(evaluations[0].actual_value, 5.0);
    assert_eq!(evaluations[0].target_value, 8.0);
    assert_eq!(evaluations[0].completion_date, evaluations[0].period_end);

    // The evaluated goal is flipped to completed...
    let goals = ctx.goal_service.get_goals("anna")?;
    assert_eq!(goals[0].status, GoalStatus::Completed);

    // ...so a second pass finds nothing left to evaluate.
    assert!(ctx.evaluation.evaluate_user("anna", now).await?.is_empty());

    // History is persisted in the documented wrapper shape.
    let raw = std::fs::read_to_string(dir.path().join("goal-history.json"))?;
    let doc: serde_json::Value = serde_json::from_str(&raw)?;
    let history = &doc["data"]["goalHistory"];
    assert_eq!(history.as_array().map(|h| h.len()), Some(1));
    assert_eq!(history[0]["status"], "Missed");
    assert_eq!(history[0]["goalScope"], "PERSONAL");
    assert_eq!(history[0]["goalType"], "BILLABLE_HOURS");

    Ok(())
}

#[tokio::test]
async fn test_weekly_goal_waits_for_sunday() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let ctx = common::TestContext::new(dir.path());

    let texts = vec!["Log at least 30 billable hours weekly".to_string()];
    ctx.goal_service
        .create_goals_from_text("ben", &texts, &IntentDefaults::default())
        .await?;

    // Wednesday: the week is still open.
    let midweek = at("2024-05-15", 12, 0, 0);
    assert!(ctx.evaluation.evaluate_user("ben", midweek).await?.is_empty());
    assert_eq!(ctx.goal_service.get_goals("ben")?[0].status, GoalStatus::Active);

    // Entries across the week, including one that must not count.
    ctx.timesheet
        .track_entry(timer_entry("ben", "2024-05-14", 20.0))
        .await?;
    ctx.timesheet
        .track_entry(timer_entry("ben", "2024-05-17", 12.0))
        .await?;
    let mut imported = timer_entry("ben", "2024-05-18", 40.0);
    imported.source = "import".to_string();
    ctx.timesheet.track_entry(imported).await?;

    let sunday_close = at("2024-05-19", 23, 59, 59);
    ctx.goal_service
        .recompute_billable_currents("ben", sunday_close)
        .await?;

    let evaluations = ctx.evaluation.evaluate_user("ben", sunday_close).await?;
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].status, GoalOutcome::Met);
    assert_eq!(evaluations[0].actual_value, 32.0);
    assert_eq!(evaluations[0].period_start, at("2024-05-13", 0, 0, 0));

    Ok(())
}

#[tokio::test]
async fn test_company_goals_merge_and_persist() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let ctx = common::TestContext::new(dir.path());

    let texts = vec![
        "30 billable hours weekly".to_string(),
        "120 billable hours monthly".to_string(),
        "company-wide realization rate of 85%".to_string(),
    ];
    let merged = ctx
        .goal_service
        .merge_company_goals_from_text(&texts, &IntentDefaults::default())
        .await?;
    assert_eq!(merged.weekly_billable, 30.0);
    assert_eq!(merged.monthly_billable, 120.0);
    assert_eq!(merged.annual_billable, 0.0);

    // A smaller weekly target later never lowers the stored one.
    let smaller = vec!["25 billable hours weekly".to_string()];
    let merged = ctx
        .goal_service
        .merge_company_goals_from_text(&smaller, &IntentDefaults::default())
        .await?;
    assert_eq!(merged.weekly_billable, 30.0);

    let stored = ctx.goal_service.get_company_goals()?;
    assert_eq!(stored.weekly_billable, 30.0);
    assert_eq!(stored.monthly_billable, 120.0);
    assert!(stored.updated_at.is_some());

    Ok(())
}

#[tokio::test]
async fn test_corrupt_goals_document_reads_as_no_expired_goals() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let ctx = common::TestContext::new(dir.path());

    std::fs::write(dir.path().join("personal-goals.json"), "{broken")?;

    // The evaluator surface reports a corrupt store as "nothing expired"...
    let now = at("2024-05-15", 12, 0, 0);
    assert!(ctx.evaluation.expired_goals_for_user("anna", now).is_empty());
    assert!(ctx.evaluation.all_expired_goals(now).is_empty());

    // ...while the goal CRUD surface surfaces the error.
    assert!(ctx.goal_service.get_goals("anna").is_err());

    Ok(())
}

#[tokio::test]
async fn test_recompute_leaves_non_billable_goals_alone() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let ctx = common::TestContext::new(dir.path());

    let billable = ctx
        .goal_service
        .create_goal(
            "anna",
            NewGoal {
                id: None,
                name: "Billable Hours".to_string(),
                description: None,
                goal_type: "Billable / Work Output".to_string(),
                frequency: Timeframe::Weekly,
                target: 30.0,
            },
        )
        .await?;
    let meetings = ctx
        .goal_service
        .create_goal(
            "anna",
            NewGoal {
                id: None,
                name: "Meetings Attended".to_string(),
                description: None,
                goal_type: "Culture / Contribution".to_string(),
                frequency: Timeframe::Weekly,
                target: 4.0,
            },
        )
        .await?;

    // Give the meetings goal hand-written progress the timesheet knows
    // nothing about.
    let mut attended = meetings.clone();
    attended.current = 3.0;
    ctx.goal_service.update_goal("anna", attended).await?;

    ctx.timesheet
        .track_entry(timer_entry("anna", "2024-05-15", 6.0))
        .await?;
    let goals = ctx
        .goal_service
        .recompute_billable_currents("anna", at("2024-05-15", 18, 0, 0))
        .await?;

    // Only the billable goal is recomputed from the timesheet.
    let billable_after = goals.iter().find(|g| g.id == billable.id).unwrap();
    assert_eq!(billable_after.current, 6.0);
    let meetings_after = goals.iter().find(|g| g.id == meetings.id).unwrap();
    assert_eq!(meetings_after.current, 3.0);

    // The untouched progress is also what got persisted.
    let stored = ctx.goal_service.get_goals("anna")?;
    assert_eq!(
        stored.iter().find(|g| g.id == meetings.id).unwrap().current,
        3.0
    );

    Ok(())
}

#[tokio::test]
async fn test_per_user_goal_isolation() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let ctx = common::TestContext::new(dir.path());
    let defaults = IntentDefaults::default();

    ctx.goal_service
        .create_goals_from_text("anna", &["8 billable hours daily".to_string()], &defaults)
        .await?;
    ctx.goal_service
        .create_goals_from_text("ben", &["40 billable hours weekly".to_string()], &defaults)
        .await?;

    ctx.goal_service.delete_goals_for_user("anna").await?;
    assert!(ctx.goal_service.get_goals("anna")?.is_empty());
    assert_eq!(ctx.goal_service.get_goals("ben")?.len(), 1);

    Ok(())
}
