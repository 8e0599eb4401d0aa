//! Service-period calculation under the 30/360 day-count convention.
//!
//! This module computes elapsed service between two calendar dates the way
//! benefit statutes count it: every month is 30 days, every year 360, with
//! month-end dates clamped to the 30th and inclusive counting except on
//! exact anniversaries.

use chrono::{Datelike, NaiveDate};

use crate::models::ServiceBreakdown;

/// Returns true if `date` is the last calendar day of its month.
fn is_last_day_of_month(date: NaiveDate) -> bool {
    match date.succ_opt() {
        Some(next) => next.month() != date.month(),
        None => true,
    }
}

/// Day-of-month value adjusted for 30/360 arithmetic: the 31st and the last
/// day of any month (which matters for February) count as the 30th.
fn adjusted_day(date: NaiveDate) -> i32 {
    if date.day() == 31 || is_last_day_of_month(date) {
        30
    } else {
        date.day() as i32
    }
}

/// Computes elapsed service between `start_date` and `end_date` as a
/// 30/360 breakdown.
///
/// Both the start day and the end day count as service, so the result
/// includes a +1 day adjustment — except when the raw difference is already
/// an exact whole number of years, in which case a clean N-year anniversary
/// is exactly N years rather than N years and one day.
///
/// A reversed or same-day range yields a zero breakdown rather than an
/// error; callers that need to distinguish "no service" from "bad input"
/// check for [`ServiceBreakdown::is_zero`].
///
/// # Examples
///
/// ```
/// use esb_engine::calculation::compute_service_period;
/// use esb_engine::models::ServiceBreakdown;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(
///     compute_service_period(hire, as_of),
///     ServiceBreakdown { years: 6, months: 0, days: 0 }
/// );
/// ```
pub fn compute_service_period(start_date: NaiveDate, end_date: NaiveDate) -> ServiceBreakdown {
    let d1 = adjusted_day(start_date);
    let d2 = adjusted_day(end_date);

    let mut years = end_date.year() - start_date.year();
    let mut months = end_date.month() as i32 - start_date.month() as i32;
    let mut days = d2 - d1;

    // Y/M/D subtraction with borrowing, 30 days to a month
    if days < 0 {
        days += 30;
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    if years < 0 || (years == 0 && months < 0) || (years == 0 && months == 0 && days <= 0) {
        return ServiceBreakdown::ZERO;
    }

    if days >= 30 {
        days = 0;
        months += 1;
    }
    if months >= 12 {
        months = 0;
        years += 1;
    }

    // Both endpoints count, except on a clean anniversary
    let exact_anniversary = years > 0 && months == 0 && days == 0;
    if !exact_anniversary {
        days += 1;
        if days >= 30 {
            days = 0;
            months += 1;
        }
        if months >= 12 {
            months = 0;
            years += 1;
        }
    }

    ServiceBreakdown {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    }
}
