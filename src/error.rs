//! Error types for the Appraisal Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during scoring and bonus allocation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Appraisal Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use appraisal_engine::error::EngineError;
///
/// let error = EngineError::NoSalaryBasis {
///     period: "2025 H1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No salary basis for period '2025 H1': sum of active staff annual salaries is zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The category weights do not form a valid split of the performance rating.
    #[error(
        "Invalid category weights (strategic {strategic}, soft skill {soft_skill}): {message}"
    )]
    InvalidCategoryWeights {
        /// The configured strategic-objective weight.
        strategic: Decimal,
        /// The configured soft-skill weight.
        soft_skill: Decimal,
        /// Why the weights were rejected.
        message: String,
    },

    /// A record failed validation before being stored.
    #[error("Invalid {entity}: {message}")]
    InvalidRecord {
        /// The kind of record (e.g. "performance target").
        entity: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A record with the same unique key already exists.
    #[error("Duplicate {entity}: {key}")]
    DuplicateRecord {
        /// The kind of record.
        entity: String,
        /// The unique key that collided.
        key: String,
    },

    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    RecordNotFound {
        /// The kind of record.
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// The active staff salary sum is zero, so no proportional share exists.
    #[error(
        "No salary basis for period '{period}': sum of active staff annual salaries is zero"
    )]
    NoSalaryBasis {
        /// The review period of the rejected run.
        period: String,
    },

    /// The bonus pool supplied by the caller is not a positive amount.
    #[error("Invalid bonus pool {amount}: must be greater than zero")]
    InvalidBonusPool {
        /// The rejected amount.
        amount: Decimal,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
