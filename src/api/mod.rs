//! HTTP API module for the ESB Calculation Engine.
//!
//! This module provides the REST endpoints for computing liability
//! snapshots and monthly provisioning schedules. It is also the boundary
//! where wall-clock "today" is injected; the calculation modules never read
//! the clock themselves.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{EmployeeRequest, ProvisionScheduleRequest, SnapshotRequest};
pub use response::ApiError;
