//! Error types for the salary engine.
//!
//! The calculation functions themselves never fail; these errors come from
//! the layers around them: configuration loading, input validation and
//! report period construction.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use detailing_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/compensation.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/compensation.yaml"
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

    /// A compensation policy value is outside its allowed range.
    #[error("Invalid compensation policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A report period ends before it starts.
    #[error("Invalid report period: start {start_date} is after end {end_date}")]
    InvalidPeriod {
        /// The first day of the requested period.
        start_date: NaiveDate,
        /// The last day of the requested period.
        end_date: NaiveDate,
    },

    /// An employee directory record was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A request value is outside the range the engine accepts.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
