//! Monthly provisioning schedule.
//!
//! Provisioning reports reconstruct liability at the end of each month and
//! difference consecutive snapshots to obtain the accrual booked in that
//! month. This module performs that batch computation for one employee over
//! a list of month-end dates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, EsbSnapshot};

use super::snapshot_as_of;

/// One month's row in a provisioning schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    /// The month-end date this row covers.
    pub period_end: NaiveDate,
    /// The full liability snapshot at `period_end`.
    pub snapshot: EsbSnapshot,
    /// Liability growth during the month: total liability at `period_end`
    /// minus total liability at the previous month end. Negative after a
    /// salary decrease; preserved as-is.
    pub accrual: Decimal,
}

/// The last day of the month preceding `month_end`'s month.
fn previous_month_end(month_end: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(month_end.year(), month_end.month(), 1)
        .and_then(|first_of_month| first_of_month.pred_opt())
        .unwrap_or(month_end)
}

/// Builds a provisioning schedule for one employee across the given
/// month-end dates.
///
/// Each invocation of the snapshot assembler is independent, so the rows
/// for many employees and months can be computed in any order or in
/// parallel and always agree.
///
/// # Examples
///
/// ```
/// use esb_engine::calculation::monthly_accrual_schedule;
/// use esb_engine::models::{Employee, EmployeeStatus, ServicePeriodSource};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     contract_end_date: None,
///     status: EmployeeStatus::Active,
///     termination_date: None,
///     termination_reason: None,
///     basic_salary: Decimal::from(9600),
///     housing_allowance: Decimal::ZERO,
///     transport_allowance: Decimal::ZERO,
///     other_allowances: Decimal::ZERO,
///     opening_balance: Decimal::ZERO,
///     salary_history: vec![],
///     service_period: ServicePeriodSource::Computed,
///     payout_amount: None,
///     payout_date: None,
/// };
///
/// let month_ends = [NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()];
/// let schedule = monthly_accrual_schedule(&employee, &month_ends);
/// assert_eq!(schedule.len(), 1);
/// assert!(schedule[0].accrual > Decimal::ZERO);
/// ```
pub fn monthly_accrual_schedule(
    employee: &Employee,
    month_ends: &[NaiveDate],
) -> Vec<AccrualPeriod> {
    month_ends
        .iter()
        .map(|&period_end| {
            let snapshot = snapshot_as_of(employee, period_end);
            let previous = snapshot_as_of(employee, previous_month_end(period_end));
            let accrual = snapshot.total_liability - previous.total_liability;
            AccrualPeriod {
                period_end,
                snapshot,
                accrual,
            }
        })
        .collect()
}
