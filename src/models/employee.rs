//! Employee model and related types.
//!
//! This module defines the Employee aggregate along with its status,
//! termination-reason and service-period-source enums.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{SalaryHistoryEntry, ServiceBreakdown};

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    /// Currently employed and accruing benefit.
    Active,
    /// On the books but not accruing a forward provision.
    Inactive,
    /// Employment has ended; liability is frozen at the termination date.
    Terminated,
}

/// The reason an employee's service ended.
///
/// Resignation triggers the Article-85 reduction brackets; the other reasons
/// leave the accrued benefit unreduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminationReason {
    /// The employee resigned (Article 85 reduction applies).
    Resignation,
    /// Employment ended by mutual agreement.
    MutualAgreement,
    /// The employer terminated the contract.
    TerminationByEmployer,
}

/// How an employee's service period is determined.
///
/// The manual variant is an explicit administrative override that bypasses
/// date-based computation entirely, used for migrated records whose paper
/// service dates cannot be reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "source", content = "breakdown", rename_all = "snake_case")]
pub enum ServicePeriodSource {
    /// Service is computed from the hire date and the as-of date.
    #[default]
    Computed,
    /// Service is fixed to the given breakdown regardless of dates.
    Manual(ServiceBreakdown),
}

/// An employee record, the aggregate root consumed by the engine.
///
/// The four live salary component fields represent the latest authoritative
/// state; `salary_history` is the append-mostly ledger used to reconstruct
/// the salary in effect at past dates. The engine only ever reads this type;
/// persistence and mutation sequencing belong to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Optional fixed contract end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_end_date: Option<NaiveDate>,
    /// Current employment status.
    pub status: EmployeeStatus,
    /// The date service ended, if terminated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<NaiveDate>,
    /// Why service ended, if terminated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
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
    /// Salary change ledger, ordered by effective date for resolution.
    #[serde(default)]
    pub salary_history: Vec<SalaryHistoryEntry>,
    /// Whether the service period is computed or manually overridden.
    #[serde(default)]
    pub service_period: ServicePeriodSource,
    /// Amount already paid out against the liability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_amount: Option<Decimal>,
    /// The date any payout was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_date: Option<NaiveDate>,
}

impl Employee {
    /// Sum of the four live salary component fields.
    pub fn current_salary_total(&self) -> Decimal {
        self.basic_salary + self.housing_allowance + self.transport_allowance
            + self.other_allowances
    }

    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns true if the employee's service has ended.
    pub fn is_terminated(&self) -> bool {
        self.status == EmployeeStatus::Terminated
    }

    /// Records a salary change: appends a history entry for `effective_date`
    /// and replaces the live salary fields with the new components.
    pub fn record_salary_change(
        &mut self,
        effective_date: NaiveDate,
        basic_salary: Decimal,
        housing_allowance: Decimal,
        transport_allowance: Decimal,
        other_allowances: Decimal,
        reason: Option<String>,
    ) {
        self.salary_history.push(SalaryHistoryEntry::from_components(
            effective_date,
            basic_salary,
            housing_allowance,
            transport_allowance,
            other_allowances,
            reason,
        ));
        self.basic_salary = basic_salary;
        self.housing_allowance = housing_allowance;
        self.transport_allowance = transport_allowance;
        self.other_allowances = other_allowances;
    }

    /// Marks the employee as terminated on `date` for `reason`.
    pub fn terminate(&mut self, date: NaiveDate, reason: TerminationReason) {
        self.status = EmployeeStatus::Terminated;
        self.termination_date = Some(date);
        self.termination_reason = Some(reason);
    }

    /// Records a payout made against the accrued liability.
    pub fn record_payout(&mut self, amount: Decimal, date: NaiveDate) {
        self.payout_amount = Some(amount);
        self.payout_date = Some(date);
    }

    /// Validates the record before it enters the engine.
    ///
    /// All monetary fields, including every history entry, must be
    /// non-negative. The calculators themselves do not re-check this
    /// invariant, so callers run validation once at the input boundary.
    pub fn validate(&self) -> EngineResult<()> {
        let monetary_fields = [
            ("basic_salary", self.basic_salary),
            ("housing_allowance", self.housing_allowance),
            ("transport_allowance", self.transport_allowance),
            ("other_allowances", self.other_allowances),
            ("opening_balance", self.opening_balance),
        ];
        for (field, value) in monetary_fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::NegativeAmount {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if let Some(payout) = self.payout_amount {
            if payout.is_sign_negative() && !payout.is_zero() {
                return Err(EngineError::NegativeAmount {
                    field: "payout_amount".to_string(),
                    value: payout.to_string(),
                });
            }
        }

        for (index, entry) in self.salary_history.iter().enumerate() {
            let entry_fields = [
                ("basic_salary", entry.basic_salary),
                ("housing_allowance", entry.housing_allowance),
                ("transport_allowance", entry.transport_allowance),
                ("other_allowances", entry.other_allowances),
                ("total", entry.total),
            ];
            for (field, value) in entry_fields {
                if value.is_sign_negative() && !value.is_zero() {
                    return Err(EngineError::InvalidHistoryEntry {
                        index,
                        message: format!("{} cannot be negative: {}", field, value),
                    });
                }
            }
        }

        Ok(())
    }
}
