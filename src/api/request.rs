//! Request types for the ESB Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/snapshot` and
//! `/provision-schedule` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Employee, EmployeeStatus, SalaryHistoryEntry, ServicePeriodSource, TerminationReason,
};

/// Request body for the `/snapshot` endpoint.
///
/// When `as_of_date` is omitted the engine computes the present snapshot,
/// in which case a terminated employee's termination date supersedes the
/// server's current date. When `as_of_date` is supplied it is used verbatim
/// as a point-in-time historical query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRequest {
    /// The employee record to compute the snapshot for.
    pub employee: EmployeeRequest,
    /// Optional historical as-of date.
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
}

/// Request body for the `/provision-schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionScheduleRequest {
    /// The employee record to build the schedule for.
    pub employee: EmployeeRequest,
    /// The month-end dates to reconstruct, usually the last day of each
    /// month in a reporting year.
    pub month_ends: Vec<NaiveDate>,
}

/// Employee information in a calculation request.
///
/// Optional monetary fields default to zero so sparse records imported from
/// spreadsheets deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Optional fixed contract end date.
    #[serde(default)]
    pub contract_end_date: Option<NaiveDate>,
    /// Current employment status.
    pub status: EmployeeStatus,
    /// The date service ended, if terminated.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Why service ended, if terminated.
    #[serde(default)]
    pub termination_reason: Option<TerminationReason>,
    /// Current basic monthly salary.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Current monthly housing allowance.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Current monthly transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Current other monthly allowances.
    #[serde(default)]
    pub other_allowances: Decimal,
    /// Liability carried over from before this system's records began.
    #[serde(default)]
    pub opening_balance: Decimal,
    /// Salary change ledger.
    #[serde(default)]
    pub salary_history: Vec<SalaryHistoryEntry>,
    /// Whether the service period is computed or manually overridden.
    #[serde(default)]
    pub service_period: ServicePeriodSource,
    /// Amount already paid out against the liability.
    #[serde(default)]
    pub payout_amount: Option<Decimal>,
    /// The date any payout was made.
    #[serde(default)]
    pub payout_date: Option<NaiveDate>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            hire_date: req.hire_date,
            contract_end_date: req.contract_end_date,
            status: req.status,
            termination_date: req.termination_date,
            termination_reason: req.termination_reason,
            basic_salary: req.basic_salary,
            housing_allowance: req.housing_allowance,
            transport_allowance: req.transport_allowance,
            other_allowances: req.other_allowances,
            opening_balance: req.opening_balance,
            salary_history: req.salary_history,
            service_period: req.service_period,
            payout_amount: req.payout_amount,
            payout_date: req.payout_date,
        }
    }
}
