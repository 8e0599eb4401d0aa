//! Data models for the ESB Calculation Engine.
//!
//! This module contains the value types consumed and produced by the engine:
//! employees with their salary history, service-period breakdowns, and the
//! computed liability snapshot.

mod employee;
mod salary_history;
mod service_breakdown;
mod snapshot;

pub use employee::{Employee, EmployeeStatus, ServicePeriodSource, TerminationReason};
pub use salary_history::SalaryHistoryEntry;
pub use service_breakdown::ServiceBreakdown;
pub use snapshot::EsbSnapshot;
