//! Liability snapshot model.
//!
//! This module defines [`EsbSnapshot`], the full per-employee financial
//! picture produced by the snapshot assembler.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceBreakdown;

/// A complete end-of-service liability snapshot for one employee at one
/// as-of date.
///
/// Snapshots are always freshly derived from the employee record; they are
/// never the system of record. Recomputing for any as-of date yields the
/// same value given the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsbSnapshot {
    /// The employee this snapshot belongs to.
    pub employee_id: String,
    /// Total service in 30/360 days.
    pub total_service_days: u32,
    /// Total service in fractional years (360-day-year basis).
    pub total_service_years: Decimal,
    /// Gross benefit accrued from tenure and salary, after any resignation
    /// reduction.
    pub accrued_benefit: Decimal,
    /// Forward-looking monthly accrual rate; zero unless the employee is
    /// active.
    pub monthly_provision: Decimal,
    /// Opening balance plus accrued benefit.
    pub total_liability: Decimal,
    /// Reduction applied to the accrued benefit (1 unless resignation-reduced).
    pub reduction_ratio: Decimal,
    /// Total liability minus any payout, floored at zero.
    pub remaining_liability: Decimal,
    /// The service breakdown the snapshot was computed from.
    pub breakdown: ServiceBreakdown,
}
