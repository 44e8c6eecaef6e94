use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

/// Inclusive end of a calendar day, to millisecond resolution.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Sunday of the week containing `date` (weeks are Monday-start).
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}

pub fn quarter_start(date: NaiveDate) -> NaiveDate {
    let first_month = ((date.month() - 1) / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap()
}

pub fn quarter_end(date: NaiveDate) -> NaiveDate {
    let first_month = ((date.month() - 1) / 3) * 3 + 1;
    month_end(NaiveDate::from_ymd_opt(date.year(), first_month + 2, 1).unwrap())
}

pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap()
}

pub fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap()
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            // Should not happen for typical date ranges
            break;
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_bounds_are_monday_to_sunday() {
        // 2024-05-15 is a Wednesday
        assert_eq!(week_start(d(2024, 5, 15)), d(2024, 5, 13));
        assert_eq!(week_end(d(2024, 5, 15)), d(2024, 5, 19));
        // A Monday maps to itself
        assert_eq!(week_start(d(2024, 5, 13)), d(2024, 5, 13));
        // A Sunday stays in the preceding-Monday week
        assert_eq!(week_start(d(2024, 5, 19)), d(2024, 5, 13));
    }

    #[test]
    fn test_month_end_handles_february_and_december() {
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2023, 2, 10)), d(2023, 2, 28));
        assert_eq!(month_end(d(2024, 12, 1)), d(2024, 12, 31));
    }

    #[test]
    fn test_quarter_bounds() {
        assert_eq!(quarter_start(d(2024, 5, 15)), d(2024, 4, 1));
        assert_eq!(quarter_end(d(2024, 5, 15)), d(2024, 6, 30));
        assert_eq!(quarter_start(d(2024, 12, 31)), d(2024, 10, 1));
        assert_eq!(quarter_end(d(2024, 10, 1)), d(2024, 12, 31));
    }

    #[test]
    fn test_end_of_day_is_millisecond_inclusive() {
        let end = end_of_day(d(2024, 1, 31));
        assert_eq!(end.to_string(), "2024-01-31 23:59:59.999");
    }
}
