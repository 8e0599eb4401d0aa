//! Error types for the ESB Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The core calculators are total functions (reversed date ranges and empty
//! salary history resolve to defined fallback values), so these errors arise
//! only at the input boundary where employee records are validated before
//! entering the engine.

use thiserror::Error;

/// The main error type for the ESB Calculation Engine.
///
/// # Example
///
/// ```
/// use esb_engine::error::EngineError;
///
/// let error = EngineError::NegativeAmount {
///     field: "basic_salary".to_string(),
///     value: "-100".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Monetary field 'basic_salary' cannot be negative: -100"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A monetary field on an employee record was negative.
    #[error("Monetary field '{field}' cannot be negative: {value}")]
    NegativeAmount {
        /// The name of the offending field.
        field: String,
        /// The rejected value, rendered as text.
        value: String,
    },

    /// A salary history entry was invalid.
    #[error("Invalid salary history entry at index {index}: {message}")]
    InvalidHistoryEntry {
        /// Position of the entry in the employee's history collection.
        index: usize,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// An employee record was invalid or internally inconsistent.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
