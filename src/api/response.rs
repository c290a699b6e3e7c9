//! Response types for the timesheet API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::TimesheetError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TimesheetError> for ApiErrorResponse {
    fn from(error: TimesheetError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            TimesheetError::ConfigNotFound { .. } | TimesheetError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            TimesheetError::InvalidDateRange { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    "Check the starting and ending dates of the hitch",
                ),
            ),
            TimesheetError::EmployeeNotFound { employee_id } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    message,
                    format!("Employee {} is not in the employee directory", employee_id),
                ),
            ),
            TimesheetError::InvalidField { .. } => {
                (StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            TimesheetError::DuplicateSheetTitle { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "DUPLICATE_EMPLOYEE",
                    message,
                    "Each employee may appear only once per request",
                ),
            ),
            TimesheetError::QuickAccessFailed { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("QUICK_ACCESS_FAILED", message),
            ),
            TimesheetError::TemplateNotFound { .. } | TimesheetError::TemplateMalformed { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("TEMPLATE_ERROR", "Template could not be loaded", message),
            ),
            TimesheetError::Export { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("EXPORT_ERROR", "Timesheet could not be written", message),
            ),
            TimesheetError::RenderFailed { .. } => (
                StatusCode::BAD_GATEWAY,
                ApiError::with_details("RENDER_ERROR", "Timesheet could not be rendered", message),
            ),
        };

        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_date_range_is_bad_request() {
        let error = TimesheetError::InvalidDateRange {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            message: "starting date must be earlier than ending date".to_string(),
        };
        let api_error: ApiErrorResponse = error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE_RANGE");
    }

    #[test]
    fn test_employee_not_found_is_unprocessable() {
        let api_error: ApiErrorResponse = TimesheetError::EmployeeNotFound { employee_id: 99 }.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[test]
    fn test_quick_access_failure_is_unprocessable() {
        let api_error: ApiErrorResponse = TimesheetError::QuickAccessFailed {
            token: "nobody".to_string(),
            message: "no quick access entry".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "QUICK_ACCESS_FAILED");
    }

    #[test]
    fn test_template_error_is_internal() {
        let api_error: ApiErrorResponse = TimesheetError::TemplateNotFound {
            path: "template.xlsx".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "TEMPLATE_ERROR");
    }

    #[test]
    fn test_render_error_is_bad_gateway() {
        let api_error: ApiErrorResponse = TimesheetError::RenderFailed {
            message: "HTTP 401".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api_error.error.code, "RENDER_ERROR");
    }
}
