use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{CVS_BILLABLE_WEIGHT, CVS_NON_BILLABLE_WEIGHT};
use crate::timesheet::timesheet_model::TimeEntry;

/// Share of available time that was billable. Zero availability yields
/// zero rather than a division error.
pub fn utilization(billable_hours: f64, available_hours: f64) -> f64 {
    if available_hours <= 0.0 {
        return 0.0;
    }
    billable_hours / available_hours
}

/// Fraction of worked hours that were actually billed.
pub fn realization_rate(billed_hours: f64, worked_hours: f64) -> f64 {
    if worked_hours <= 0.0 {
        return 0.0;
    }
    billed_hours / worked_hours
}

pub fn efficiency(output_hours: f64, input_hours: f64) -> f64 {
    if input_hours <= 0.0 {
        return 0.0;
    }
    output_hours / input_hours
}

/// Contribution value score on a 0-100-ish points scale: a weighted ratio
/// of actual to expected billable hours plus weighted non-billable
/// contribution points (themselves on a 0-100 scale). Exceeding the
/// billable expectation pushes the score above 100.
pub fn cvs_score(actual_billable: f64, expected_billable: f64, non_billable_points: f64) -> f64 {
    let billable_ratio = if expected_billable <= 0.0 {
        0.0
    } else {
        actual_billable / expected_billable
    };
    (billable_ratio * CVS_BILLABLE_WEIGHT + (non_billable_points / 100.0) * CVS_NON_BILLABLE_WEIGHT)
        * 100.0
}

/// Total billable value of the given entries (duration x hourly rate,
/// over billable entries that carry a rate).
pub fn revenue(entries: &[TimeEntry]) -> Decimal {
    entries
        .iter()
        .filter(|entry| entry.billable)
        .filter_map(|entry| {
            entry
                .hourly_rate
                .map(|rate| Decimal::from(entry.duration) / dec!(3600) * rate)
        })
        .sum()
}
