//! Error types for the timesheet generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a timesheet.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the timesheet generator.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use bctd_timesheet::error::TimesheetError;
///
/// let error = TimesheetError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TimesheetError {
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

    /// The requested date range cannot be turned into timesheet periods.
    #[error("Invalid date range {start_date} to {end_date}: {message}")]
    InvalidDateRange {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
        /// Why the range was rejected.
        message: String,
    },

    /// An employee identifier is not present in the employee directory.
    #[error("Employee not found in directory: {employee_id}")]
    EmployeeNotFound {
        /// The identifier that could not be resolved.
        employee_id: u32,
    },

    /// A quick-access token could not be resolved from the secrets.
    #[error("Quick access token '{token}' could not be resolved: {message}")]
    QuickAccessFailed {
        /// The token without its leading marker.
        token: String,
        /// What was missing.
        message: String,
    },

    /// The template workbook does not exist.
    #[error("Template not found: {path}")]
    TemplateNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The template workbook could not be read or lacks the timesheet sheet.
    #[error("Malformed template '{path}': {message}")]
    TemplateMalformed {
        /// The template path (or `<memory>` for in-memory workbooks).
        path: String,
        /// A description of the problem.
        message: String,
    },

    /// Two sheets of one document would share a title.
    #[error("Duplicate sheet title: {title}")]
    DuplicateSheetTitle {
        /// The clashing title.
        title: String,
    },

    /// Writing the assembled document to a workbook failed.
    #[error("Failed to export document: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },

    /// The rendering service rejected or failed the conversion.
    #[error("Rendering failed: {message}")]
    RenderFailed {
        /// A description of the rendering failure.
        message: String,
    },

    /// A request field was missing or inconsistent.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return TimesheetError.
pub type TimesheetResult<T> = Result<T, TimesheetError>;
