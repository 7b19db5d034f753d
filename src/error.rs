//! Error types for the paystub engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! resolving pay periods, and exporting statements.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the paystub engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paystub_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/employee.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/employee.yaml");
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

    /// A date string could not be parsed as a calendar date.
    #[error("Invalid date for '{field}': '{value}' ({message})")]
    InvalidDate {
        /// The configuration field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
        /// The parser's description of the failure.
        message: String,
    },

    /// Stepping back from a date left the representable calendar range.
    #[error("Date out of range: {date} minus {days} days")]
    DateOutOfRange {
        /// The date the subtraction started from.
        date: NaiveDate,
        /// The number of days that were subtracted.
        days: u64,
    },

    /// A money amount grew past what the decimal type can hold.
    #[error("Amount out of range while calculating '{field}'")]
    AmountOverflow {
        /// The amount being calculated when the overflow happened.
        field: String,
    },

    /// A request parameter was outside its accepted range.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Writing an exported statement failed.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
