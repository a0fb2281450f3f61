//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll run.

use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::PolicyNotLoaded;
/// assert_eq!(
///     error.to_string(),
///     "Policy settings have not been loaded; reload policy before calculating"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A calculation was requested before policy settings were loaded.
    #[error("Policy settings have not been loaded; reload policy before calculating")]
    PolicyNotLoaded,

    /// A policy setting value could not be coerced to a number.
    #[error("Invalid value for policy setting '{key}': '{value}'")]
    SettingParseError {
        /// The setting key whose value failed to parse.
        key: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// Policy settings file was not found at the specified path.
    #[error("Policy settings file not found: {path}")]
    SettingsFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy settings file could not be parsed.
    #[error("Failed to parse policy settings file '{path}': {message}")]
    SettingsFileParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time record was invalid or contained inconsistent data.
    #[error("Invalid time record for employee '{employee_id}': {message}")]
    InvalidTimeRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The caller supplied an empty employee selection.
    #[error("Employee selection is empty; at least one employee id is required")]
    EmptySelection,

    /// An upstream fetch (employees, time records, or loans) failed.
    ///
    /// Any store failure aborts the whole run; no partial payroll is
    /// produced.
    #[error("Upstream store error: {message}")]
    StoreError {
        /// A description of the fetch failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
