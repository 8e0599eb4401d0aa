//! Forward monthly provision rate.
//!
//! The monthly provision is the rate at which an active employee's liability
//! is expected to grow, used by accounting for forward provisioning. It
//! mirrors the accrual tiers: 1/24 of the monthly salary while in the
//! half-month tier, 1/12 once past five years.

use rust_decimal::Decimal;

use crate::models::EmployeeStatus;

const HALF_MONTH_TIER_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Returns the forward-looking monthly accrual rate.
///
/// Only active employees carry a provision; inactive and terminated
/// employees return zero.
///
/// # Examples
///
/// ```
/// use esb_engine::calculation::monthly_provision;
/// use esb_engine::models::EmployeeStatus;
/// use rust_decimal::Decimal;
///
/// let rate = monthly_provision(
///     EmployeeStatus::Active,
///     Decimal::from(10000),
///     Decimal::from(6),
/// );
/// assert_eq!(rate.round_dp(2), Decimal::new(83333, 2)); // 10000 / 12
/// ```
pub fn monthly_provision(
    status: EmployeeStatus,
    monthly_salary: Decimal,
    total_service_years: Decimal,
) -> Decimal {
    if status != EmployeeStatus::Active {
        return Decimal::ZERO;
    }

    if total_service_years < HALF_MONTH_TIER_YEARS {
        monthly_salary / Decimal::from(24)
    } else {
        monthly_salary / Decimal::from(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PR-001: under 5 years provisions at 1/24
    #[test]
    fn test_under_five_years_provisions_at_one_twenty_fourth() {
        let rate = monthly_provision(EmployeeStatus::Active, dec("12000"), dec("3"));
        assert_eq!(rate, dec("500"));
    }

    /// PR-002: at or past 5 years provisions at 1/12
    #[test]
    fn test_past_five_years_provisions_at_one_twelfth() {
        let rate = monthly_provision(EmployeeStatus::Active, dec("12000"), dec("5"));
        assert_eq!(rate, dec("1000"));

        let rate = monthly_provision(EmployeeStatus::Active, dec("10000"), dec("6"));
        assert_eq!(rate.round_dp(2), dec("833.33"));
    }

    /// PR-003: inactive employees carry no provision
    #[test]
    fn test_inactive_has_no_provision() {
        let rate = monthly_provision(EmployeeStatus::Inactive, dec("12000"), dec("3"));
        assert_eq!(rate, Decimal::ZERO);
    }

    /// PR-004: terminated employees carry no provision
    #[test]
    fn test_terminated_has_no_provision() {
        let rate = monthly_provision(EmployeeStatus::Terminated, dec("12000"), dec("8"));
        assert_eq!(rate, Decimal::ZERO);
    }
}
