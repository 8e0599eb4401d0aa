//! End-of-Service Benefit (ESB) calculation engine for Saudi labor law.
//!
//! This crate computes end-of-service gratuity under Article 84/85-style rules:
//! 30/360 service-period arithmetic, point-in-time salary resolution, the tiered
//! half-month/full-month benefit formula with resignation reduction, and full
//! per-employee liability snapshots at arbitrary as-of dates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
