use lazy_static::lazy_static;
use regex::Regex;

use crate::goals::goals_model::{CompanyGoals, NewGoal, Timeframe};
use crate::intents::intents_model::{
    CanonicalGoalIntent, Comparator, GoalScope, IntentDefaults, MetricKey, TargetUnit,
};

/// One entry of an ordered detection table. Entries are tried in sequence
/// and the first whose pattern matches (and exclusion does not) wins, so
/// table order is load-bearing.
struct MetricPattern {
    key: MetricKey,
    pattern: Regex,
    exclude: Option<Regex>,
}

lazy_static! {
    static ref METRIC_PATTERNS: Vec<MetricPattern> = vec![
        MetricPattern {
            key: MetricKey::BillableHours,
            pattern: Regex::new(r"(?i)\bbillable\b|\bbilled\s+hours?\b").unwrap(),
            exclude: Some(Regex::new(r"(?i)\bnon[\s-]?billable\b").unwrap()),
        },
        MetricPattern {
            key: MetricKey::NonBillableHours,
            pattern: Regex::new(r"(?i)\bnon[\s-]?billable\b|\bpro\s+bono\b|\badmin(?:istrative)?\s+(?:hours?|work|time)\b")
                .unwrap(),
            exclude: None,
        },
        MetricPattern {
            key: MetricKey::Revenue,
            pattern: Regex::new(r"(?i)\brevenue\b|\bcollections?\b|\bfees\s+(?:billed|collected)\b").unwrap(),
            exclude: None,
        },
        MetricPattern {
            key: MetricKey::RealizationRate,
            pattern: Regex::new(r"(?i)\brealization\b").unwrap(),
            exclude: None,
        },
        MetricPattern {
            key: MetricKey::Utilization,
            pattern: Regex::new(r"(?i)\butili[sz]ation\b").unwrap(),
            exclude: None,
        },
        MetricPattern {
            key: MetricKey::Retention,
            pattern: Regex::new(r"(?i)\bretention\b|\bretain(?:ing)?\s+clients?\b").unwrap(),
            exclude: None,
        },
        MetricPattern {
            key: MetricKey::Cvs,
            pattern: Regex::new(r"(?i)\bcvs\b|\bcontribution\s+value\b").unwrap(),
            exclude: None,
        },
        MetricPattern {
            key: MetricKey::Meetings,
            pattern: Regex::new(r"(?i)\bmeetings?\b").unwrap(),
            exclude: None,
        },
        MetricPattern {
            key: MetricKey::FocusHours,
            pattern: Regex::new(r"(?i)\bfocus\b|\bdeep\s+work\b").unwrap(),
            exclude: None,
        },
    ];

    static ref TIMEFRAME_PATTERNS: Vec<(Timeframe, Regex)> = vec![
        (
            Timeframe::Daily,
            Regex::new(r"(?i)\b(?:daily|every\s+day|each\s+day|per\s+day|a\s+day)\b").unwrap(),
        ),
        (
            Timeframe::Weekly,
            Regex::new(r"(?i)\b(?:weekly|every\s+week|each\s+week|per\s+week|a\s+week)\b").unwrap(),
        ),
        (
            Timeframe::Monthly,
            Regex::new(r"(?i)\b(?:monthly|every\s+month|each\s+month|per\s+month|a\s+month)\b").unwrap(),
        ),
        (
            Timeframe::Quarterly,
            Regex::new(r"(?i)\b(?:quarterly|every\s+quarter|each\s+quarter|per\s+quarter|a\s+quarter)\b")
                .unwrap(),
        ),
        (
            Timeframe::Annual,
            Regex::new(r"(?i)\b(?:annual(?:ly)?|yearly|every\s+year|each\s+year|per\s+year|a\s+year)\b")
                .unwrap(),
        ),
    ];

    static ref SCOPE_PATTERNS: Vec<(GoalScope, Regex)> = vec![
        (
            GoalScope::Company,
            Regex::new(r"(?i)\b(?:company|firm|organization)(?:[\s-]wide)?\b").unwrap(),
        ),
        (
            GoalScope::Team,
            Regex::new(r"(?i)\bteam\b|\bpractice\s+group\b|\bdepartment\b").unwrap(),
        ),
        (
            GoalScope::User,
            Regex::new(r"(?i)\bpersonal(?:ly)?\b|\bindividual\b|\bmy\b|\bmyself\b").unwrap(),
        ),
    ];

    static ref COMPARATOR_PATTERNS: Vec<(Comparator, Regex)> = vec![
        (
            Comparator::AtLeast,
            Regex::new(r"(?i)\bat\s+least\b|\bminimum\s+of\b|\bor\s+more\b|>=").unwrap(),
        ),
        (
            Comparator::AtMost,
            Regex::new(r"(?i)\bat\s+most\b|\bno\s+more\s+than\b|\bmaximum\s+of\b|\bor\s+less\b|\bunder\b|<=")
                .unwrap(),
        ),
        (
            Comparator::Exactly,
            Regex::new(r"(?i)\bexactly\b|==").unwrap(),
        ),
    ];

    static ref HOURS_HEURISTIC_RE: Regex = Regex::new(r"(?i)\bhours?\b|\bhrs?\b").unwrap();
    static ref PERCENT_RE: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:%|percent\b)").unwrap();
    static ref CURRENCY_RE: Regex =
        Regex::new(r"(?i)\$\s*([\d,]+(?:\.\d+)?)|\busd\s+([\d,]+(?:\.\d+)?)").unwrap();
    static ref HOURS_TARGET_RE: Regex = Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s*(?:billable\s+|non[\s-]?billable\s+|focus\s+)?(?:hours?|hrs?)\b"
    )
    .unwrap();
    static ref BARE_NUMBER_RE: Regex = Regex::new(r"(\d+(?:\.\d+)?)").unwrap();
    static ref TEAM_NAME_RE: Regex =
        Regex::new(r"(?i)\bfor\s+(?:the\s+)?([a-z][a-z\s&-]{1,40}?)\s+team\b").unwrap();
}

fn detect_metric(text: &str) -> Option<MetricKey> {
    for entry in METRIC_PATTERNS.iter() {
        if let Some(exclude) = &entry.exclude {
            if exclude.is_match(text) {
                continue;
            }
        }
        if entry.pattern.is_match(text) {
            return Some(entry.key);
        }
    }

    // Heuristic fallback when no named metric appears.
    if HOURS_HEURISTIC_RE.is_match(text) {
        return Some(MetricKey::BillableHours);
    }
    if text.contains('%') {
        return Some(MetricKey::RealizationRate);
    }
    None
}

fn detect_timeframe(text: &str) -> Option<Timeframe> {
    TIMEFRAME_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(timeframe, _)| *timeframe)
}

fn detect_scope(text: &str) -> Option<GoalScope> {
    SCOPE_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(scope, _)| *scope)
}

fn detect_comparator(text: &str) -> Option<Comparator> {
    COMPARATOR_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(comparator, _)| *comparator)
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

/// Target extraction, tried in strict priority order: percent, currency,
/// hours, then any bare number. Percent targets become decimal fractions.
fn extract_target(text: &str) -> Option<(f64, TargetUnit)> {
    if let Some(caps) = PERCENT_RE.captures(text) {
        let value = parse_number(&caps[1])?;
        return Some((value / 100.0, TargetUnit::Percent));
    }

    if let Some(caps) = CURRENCY_RE.captures(text) {
        let raw = caps.get(1).or_else(|| caps.get(2))?;
        let value = parse_number(raw.as_str())?;
        return Some((value, TargetUnit::Dollars));
    }

    if let Some(caps) = HOURS_TARGET_RE.captures(text) {
        let value = parse_number(&caps[1])?;
        return Some((value, TargetUnit::Hours));
    }

    if let Some(caps) = BARE_NUMBER_RE.captures(text) {
        let value = parse_number(&caps[1])?;
        return Some((value, TargetUnit::Count));
    }

    None
}

fn detect_entity_name(text: &str) -> Option<String> {
    TEAM_NAME_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Resolves one free-text goal sentence into a canonical intent.
///
/// Returns `None` when no metric can be identified or no nonzero target is
/// found; callers skip such entries rather than treating them as errors.
pub fn resolve_goal_intent_from_text(
    text: &str,
    defaults: &IntentDefaults,
) -> Option<CanonicalGoalIntent> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let metric_key = detect_metric(trimmed)?;
    let (target, unit) = extract_target(trimmed)?;
    if target == 0.0 {
        return None;
    }

    let timeframe = detect_timeframe(trimmed)
        .or(defaults.timeframe)
        .unwrap_or(Timeframe::Weekly);
    let scope = detect_scope(trimmed)
        .or(defaults.scope)
        .unwrap_or(GoalScope::User);
    let comparator = detect_comparator(trimmed)
        .or(defaults.comparator)
        .unwrap_or(Comparator::AtLeast);

    Some(CanonicalGoalIntent {
        metric_key,
        scope,
        timeframe,
        comparator,
        target,
        unit,
        entity_name: detect_entity_name(trimmed),
        original_text: trimmed.to_string(),
    })
}

/// Human-facing name and coarse type bucket for each metric.
fn metric_display(metric_key: MetricKey) -> (&'static str, &'static str) {
    match metric_key {
        MetricKey::BillableHours => ("Billable Hours", "Billable / Work Output"),
        MetricKey::NonBillableHours => ("Non-Billable Contribution", "Culture / Contribution"),
        MetricKey::Revenue => ("Revenue Target", "Revenue"),
        MetricKey::RealizationRate => ("Realization Rate", "Billing Efficiency"),
        MetricKey::Utilization => ("Utilization", "Time Management"),
        MetricKey::Retention => ("Client Retention", "Client Relations"),
        MetricKey::Cvs => ("Contribution Value Score", "Culture / Contribution"),
        MetricKey::Meetings => ("Meetings Attended", "Culture / Contribution"),
        MetricKey::FocusHours => ("Focus Hours", "Time Management"),
    }
}

/// Builds a personal-goal skeleton from a resolved intent. The goal starts
/// active with zero progress and its description carries the source text.
pub fn map_canonical_to_personal_goal(intent: &CanonicalGoalIntent) -> NewGoal {
    let (name, goal_type) = metric_display(intent.metric_key);

    NewGoal {
        id: None,
        name: name.to_string(),
        description: Some(intent.original_text.clone()),
        goal_type: goal_type.to_string(),
        frequency: intent.timeframe,
        target: intent.target,
    }
}

/// Merges billable-hour intents into the firm-wide goal record.
///
/// Only `billable_hours` intents apply, and each timeframe field merges via
/// `max(existing, target)`: re-applying the same or a smaller goal never
/// lowers a company target, so the merge is idempotent. Daily and quarterly
/// intents have no company field and are skipped.
pub fn apply_canonical_to_company_goals(
    intents: &[CanonicalGoalIntent],
    base: Option<&CompanyGoals>,
) -> CompanyGoals {
    let mut merged = base.cloned().unwrap_or_default();

    for intent in intents {
        if intent.metric_key != MetricKey::BillableHours {
            continue;
        }
        match intent.timeframe {
            Timeframe::Weekly => {
                merged.weekly_billable = merged.weekly_billable.max(intent.target)
            }
            Timeframe::Monthly => {
                merged.monthly_billable = merged.monthly_billable.max(intent.target)
            }
            Timeframe::Annual => {
                merged.annual_billable = merged.annual_billable.max(intent.target)
            }
            Timeframe::Daily | Timeframe::Quarterly => {}
        }
    }

    merged
}
