//! Calendar arithmetic: month bounds, weekday classification and day counting.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::{DaysError, Result};
use crate::types::{DateRange, DayCounts};

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month. December of the final representable year has no
/// following month and ends at `NaiveDate::MAX`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Whole months covering `range`: first day of `from`'s month through the
/// last day of `to`'s month.
pub fn month_span(range: &DateRange) -> DateRange {
    DateRange::new(first_of_month(range.from), last_of_month(range.to))
}

/// Count workdays and weekend days in the inclusive range.
pub fn count_days(range: &DateRange) -> DayCounts {
    range
        .days()
        .fold(DayCounts::default(), |mut counts, date| {
            if is_weekend(date.weekday()) {
                counts.weekend_days += 1;
            } else {
                counts.workdays += 1;
            }
            counts
        })
}

/// Resolve a start date and a signed day offset into a range.
///
/// A positive delta extends forward from `start`; zero or negative moves the
/// beginning of the range backward and keeps `start` as the end.
pub fn apply_delta(start: NaiveDate, delta: i64) -> Result<DateRange> {
    let shift = Days::new(delta.unsigned_abs());
    let shifted = if delta > 0 {
        start.checked_add_days(shift)
    } else {
        start.checked_sub_days(shift)
    }
    .ok_or(DaysError::DeltaOutOfRange { delta })?;

    Ok(DateRange::new(start, shifted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_bounds() {
        assert_eq!(first_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(last_of_month(date(2023, 12, 31)), date(2023, 12, 31));
        assert_eq!(last_of_month(date(1900, 2, 10)), date(1900, 2, 28));
        assert_eq!(last_of_month(date(2000, 2, 10)), date(2000, 2, 29));
    }

    #[test]
    fn month_bounds_at_calendar_limits() {
        assert_eq!(last_of_month(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(first_of_month(NaiveDate::MIN).day(), 1);
    }

    #[test]
    fn month_span_crosses_year() {
        let span = month_span(&DateRange::new(date(2023, 12, 20), date(2024, 1, 3)));
        assert_eq!(span.from, date(2023, 12, 1));
        assert_eq!(span.to, date(2024, 1, 31));
    }

    #[test]
    fn delta_forward_and_backward() {
        let fwd = apply_delta(date(2024, 1, 1), 5).unwrap();
        assert_eq!((fwd.from, fwd.to), (date(2024, 1, 1), date(2024, 1, 6)));

        let back = apply_delta(date(2024, 1, 10), -5).unwrap();
        assert_eq!((back.from, back.to), (date(2024, 1, 5), date(2024, 1, 10)));
    }

    #[test]
    fn zero_delta_is_single_day() {
        let range = apply_delta(date(2024, 3, 3), 0).unwrap();
        assert!(range.is_single_day());
    }

    #[test]
    fn delta_overflow() {
        assert!(matches!(
            apply_delta(NaiveDate::MAX, 1),
            Err(DaysError::DeltaOutOfRange { delta: 1 })
        ));
    }
}
