//! Service-period breakdown model.
//!
//! This module defines the [`ServiceBreakdown`] struct representing elapsed
//! service under the 30/360 day-count convention.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Elapsed service expressed as whole years, months and days under the
/// 30/360 convention (every month counts as 30 days, every year as 360).
///
/// Valid breakdowns keep `months` in `0..=11` and `days` in `0..=29`; a
/// same-day or reversed date range is represented as all zeros.
///
/// # Example
///
/// ```
/// use esb_engine::models::ServiceBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = ServiceBreakdown { years: 2, months: 6, days: 0 };
/// assert_eq!(breakdown.total_days(), 900);
/// assert_eq!(breakdown.total_years(), Decimal::new(25, 1)); // 2.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBreakdown {
    /// Whole years of service.
    pub years: u32,
    /// Whole months beyond the full years (0-11).
    pub months: u32,
    /// Days beyond the full months (0-29).
    pub days: u32,
}

impl ServiceBreakdown {
    /// A zero-length service period (no service, or a reversed range).
    pub const ZERO: ServiceBreakdown = ServiceBreakdown {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Returns true if this breakdown represents no service at all.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total service in 30/360 days: `years * 360 + months * 30 + days`.
    pub fn total_days(&self) -> u32 {
        self.years * 360 + self.months * 30 + self.days
    }

    /// Total service in fractional years on a 360-day-year basis.
    pub fn total_years(&self) -> Decimal {
        Decimal::from(self.total_days()) / Decimal::from(360)
    }
}
