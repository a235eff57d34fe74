//! Error types for the Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating leave applications and moving them through their lifecycle.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::LeaveStatus;

/// The main error type for the Leave Engine.
///
/// Counting business days and resolving eligibility never fail; every
/// variant here comes from configuration loading, application validation
/// or the application store.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::MissingField {
///     field: "employee_id".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: employee_id");
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

    /// A required field of a leave application was absent or blank.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The end date of a leave application does not come after its start date.
    #[error("Invalid leave range: end date {end_date} must be after start date {start_date}")]
    InvalidRange {
        /// The requested first day of leave.
        start_date: NaiveDate,
        /// The requested last day of leave.
        end_date: NaiveDate,
    },

    /// A leave application covers more calendar days than allowed.
    #[error("Leave from {start_date} to {end_date} spans {days} days, more than the limit of {max_days}")]
    SpanTooLong {
        /// The requested first day of leave.
        start_date: NaiveDate,
        /// The requested last day of leave.
        end_date: NaiveDate,
        /// Calendar days in the requested range.
        days: u32,
        /// The configured limit.
        max_days: u32,
    },

    /// No leave application exists with the given id.
    #[error("Leave application not found: {id}")]
    ApplicationNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// No employee exists with the given id in the directory.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A status transition is not allowed from the application's current status.
    #[error("Cannot move leave application {id} from {from} to {to}")]
    InvalidStatusTransition {
        /// The application id.
        id: Uuid,
        /// The status the application currently has.
        from: LeaveStatus,
        /// The status that was requested.
        to: LeaveStatus,
    },
}

impl EngineError {
    /// Returns true for errors the caller can fix by correcting its input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::MissingField { .. }
                | EngineError::InvalidRange { .. }
                | EngineError::SpanTooLong { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
