//! Calculation logic for the ESB Calculation Engine.
//!
//! This module contains the calculation functions for determining end-of-service
//! liability: the 30/360 service-period calculator, the salary-at-date resolver,
//! the tiered benefit calculator with Article 85 resignation reduction, the
//! forward monthly-provision rate, the snapshot assembler, and the monthly
//! provisioning schedule built on top of it.

mod benefit;
mod provision;
mod salary_resolution;
mod schedule;
mod service_period;
mod snapshot;

pub use benefit::{BenefitResult, compute_benefit, resignation_reduction_ratio};
pub use provision::monthly_provision;
pub use salary_resolution::salary_at_date;
pub use schedule::{AccrualPeriod, monthly_accrual_schedule};
pub use service_period::compute_service_period;
pub use snapshot::{current_snapshot, snapshot_as_of};
