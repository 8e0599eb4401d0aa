//! Snapshot assembly.
//!
//! This module composes the service-period calculator, salary resolver,
//! benefit calculator and provision rate into a full per-employee liability
//! snapshot. Two explicit operations are exposed: [`current_snapshot`] for
//! "liability as of today", where a terminated employee's termination date
//! supersedes the supplied date, and [`snapshot_as_of`] for point-in-time
//! historical reconstruction, where the supplied date is used verbatim.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Employee, EsbSnapshot, ServicePeriodSource};

use super::{compute_benefit, compute_service_period, monthly_provision, salary_at_date};

/// Computes the present liability snapshot for an employee.
///
/// `today` is the caller's current date; it is an explicit parameter so the
/// engine never reads the wall clock. For a terminated employee with a
/// recorded termination date, salary and service are frozen at that date no
/// matter what `today` is — the liability of a closed record does not keep
/// growing.
///
/// # Examples
///
/// ```
/// use esb_engine::calculation::current_snapshot;
/// use esb_engine::models::{Employee, EmployeeStatus, ServicePeriodSource};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
///     contract_end_date: None,
///     status: EmployeeStatus::Active,
///     termination_date: None,
///     termination_reason: None,
///     basic_salary: Decimal::from(10000),
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
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let snapshot = current_snapshot(&employee, today);
/// assert_eq!(snapshot.accrued_benefit, Decimal::from(35000));
/// ```
pub fn current_snapshot(employee: &Employee, today: NaiveDate) -> EsbSnapshot {
    let effective_end = if employee.is_terminated() {
        employee.termination_date.unwrap_or(today)
    } else {
        today
    };
    assemble(employee, effective_end)
}

/// Computes the liability snapshot as of an arbitrary historical date.
///
/// The supplied date is used as-is for both salary resolution and service
/// computation, including for terminated employees — this is the operation
/// behind month-by-month provisioning reports that reconstruct liability at
/// past month ends.
pub fn snapshot_as_of(employee: &Employee, as_of: NaiveDate) -> EsbSnapshot {
    assemble(employee, as_of)
}

fn assemble(employee: &Employee, effective_end: NaiveDate) -> EsbSnapshot {
    let monthly_salary = salary_at_date(employee, effective_end);

    let breakdown = match employee.service_period {
        ServicePeriodSource::Manual(breakdown) => breakdown,
        ServicePeriodSource::Computed => {
            compute_service_period(employee.hire_date, effective_end)
        }
    };

    let benefit = compute_benefit(monthly_salary, &breakdown, employee.termination_reason);
    let provision = monthly_provision(
        employee.status,
        monthly_salary,
        benefit.total_service_years,
    );

    let total_liability = employee.opening_balance + benefit.accrued_benefit;
    let paid = employee.payout_amount.unwrap_or(Decimal::ZERO);
    let remaining_liability = (total_liability - paid).max(Decimal::ZERO);

    EsbSnapshot {
        employee_id: employee.id.clone(),
        total_service_days: breakdown.total_days(),
        total_service_years: benefit.total_service_years,
        accrued_benefit: benefit.accrued_benefit,
        monthly_provision: provision,
        total_liability,
        reduction_ratio: benefit.reduction_ratio,
        remaining_liability,
        breakdown,
    }
}
