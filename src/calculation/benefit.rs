//! Tiered benefit and reduction-ratio calculation.
//!
//! This module applies the Article 84 accrual formula (half a month's salary
//! per year for the first five years, a full month per year thereafter) and
//! the Article 85 resignation reduction brackets.

use rust_decimal::Decimal;

use crate::models::{ServiceBreakdown, TerminationReason};

/// Years of service covered by the half-month accrual tier.
const HALF_MONTH_TIER_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Resignation bracket boundaries (Article 85).
const FORFEIT_BELOW_YEARS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
const FULL_BENEFIT_FROM_YEARS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// The result of a benefit calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenefitResult {
    /// Accrued benefit after any resignation reduction, never negative.
    pub accrued_benefit: Decimal,
    /// Total service in fractional years (360-day-year basis).
    pub total_service_years: Decimal,
    /// The reduction ratio that was applied (1 for non-resignation cases).
    pub reduction_ratio: Decimal,
}

/// Returns the Article 85 reduction ratio for a resignation after
/// `total_service_years` of service.
///
/// - under 2 years: 0 (the benefit is forfeited entirely)
/// - 2 to under 5 years: one third
/// - 5 to under 10 years: two thirds
/// - 10 years or more: 1 (no reduction)
pub fn resignation_reduction_ratio(total_service_years: Decimal) -> Decimal {
    if total_service_years < FORFEIT_BELOW_YEARS {
        Decimal::ZERO
    } else if total_service_years < HALF_MONTH_TIER_YEARS {
        Decimal::ONE / Decimal::from(3)
    } else if total_service_years < FULL_BENEFIT_FROM_YEARS {
        Decimal::TWO / Decimal::from(3)
    } else {
        Decimal::ONE
    }
}

/// Computes the accrued end-of-service benefit for a monthly salary and a
/// service breakdown.
///
/// The first five years accrue at half a month's salary per year, pro-rated
/// fractionally; service beyond five years accrues at a full month per year.
/// Exactly 5.0 years still falls in the half-month tier. When the service
/// ended in resignation the Article 85 ratio is applied; any other reason
/// (or none) leaves the benefit unreduced.
///
/// # Examples
///
/// ```
/// use esb_engine::calculation::compute_benefit;
/// use esb_engine::models::ServiceBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = ServiceBreakdown { years: 6, months: 0, days: 0 };
/// let result = compute_benefit(Decimal::from(10000), &breakdown, None);
/// // 5 * 5000 + 1 * 10000
/// assert_eq!(result.accrued_benefit, Decimal::from(35000));
/// ```
pub fn compute_benefit(
    monthly_salary: Decimal,
    breakdown: &ServiceBreakdown,
    termination_reason: Option<TerminationReason>,
) -> BenefitResult {
    let total_service_years = breakdown.total_years();
    let half_month = monthly_salary / Decimal::TWO;

    let mut accrued_benefit = if total_service_years <= HALF_MONTH_TIER_YEARS {
        total_service_years * half_month
    } else {
        let first_five_years = HALF_MONTH_TIER_YEARS * half_month;
        let remaining_years = (total_service_years - HALF_MONTH_TIER_YEARS) * monthly_salary;
        first_five_years + remaining_years
    };

    let mut reduction_ratio = Decimal::ONE;
    if termination_reason == Some(TerminationReason::Resignation) {
        reduction_ratio = resignation_reduction_ratio(total_service_years);
        accrued_benefit *= reduction_ratio;
    }

    BenefitResult {
        accrued_benefit: accrued_benefit.max(Decimal::ZERO),
        total_service_years,
        reduction_ratio,
    }
}
