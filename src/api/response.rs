//! Response types for the utility backend API.
//!
//! This module defines the JSON response bodies for all endpoints and the
//! error response structures mapped from [`ServiceError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::holiday::{Classification, DayCategory};

/// Response body for the holiday endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayResponse {
    /// The classified date.
    pub date: String,
    /// Whether the date is a declared public holiday.
    pub is_holiday: bool,
    /// Whether the date is a required workday.
    pub is_workday: bool,
    /// Display label, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The four-way day category.
    pub category: DayCategory,
}

impl From<Classification> for HolidayResponse {
    fn from(result: Classification) -> Self {
        Self {
            date: result.date,
            is_holiday: result.is_holiday,
            is_workday: result.is_workday,
            name: result.name,
            category: result.category,
        }
    }
}

/// Response body for the IP lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpResponse {
    /// The client IP as extracted from headers or the peer address.
    pub ip: String,
    /// "IPv4", "IPv6", or "unknown" when the value did not parse.
    pub version: String,
    /// Country name from the geolocation stub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Country code from the geolocation stub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Region, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// City, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Latitude, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Response body for the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving.
    pub status: String,
}

impl HealthResponse {
    /// Creates the standard healthy response.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

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

    /// Creates an invalid-date error response.
    pub fn invalid_date(input: &str) -> Self {
        Self::with_details(
            "INVALID_DATE",
            "Invalid date format. Use YYYY-MM-DD",
            format!("'{}' does not parse as a calendar date", input),
        )
    }

    /// Creates a not-found error response for unknown API paths.
    pub fn not_found() -> Self {
        Self::new("NOT_FOUND", "API endpoint not found")
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

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::InvalidDate { input } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_date(&input),
            },
            ServiceError::HolidayDataNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATA_ERROR",
                    "Holiday data unavailable",
                    format!("Holiday data not found: {}", path),
                ),
            },
            ServiceError::HolidayDataParse { origin, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATA_ERROR",
                    "Holiday data unavailable",
                    format!("Failed to parse {}: {}", origin, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_invalid_date_error() {
        let error = ApiError::invalid_date("2026-13-40");
        assert_eq!(error.code, "INVALID_DATE");
        assert!(error.details.unwrap().contains("2026-13-40"));
    }

    #[test]
    fn test_service_error_to_api_error() {
        let service_error = ServiceError::InvalidDate {
            input: "junk".to_string(),
        };
        let api_error: ApiErrorResponse = service_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE");
    }

    #[test]
    fn test_data_errors_map_to_500() {
        let service_error = ServiceError::HolidayDataNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = service_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "DATA_ERROR");
    }

    #[test]
    fn test_holiday_response_skips_absent_name() {
        let response = HolidayResponse {
            date: "2026-03-02".to_string(),
            is_holiday: false,
            is_workday: true,
            name: None,
            category: DayCategory::Weekday,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"name\""));
        assert!(json.contains("\"category\":\"weekday\""));
    }

    #[test]
    fn test_ip_response_skips_absent_geo_fields() {
        let response = IpResponse {
            ip: "unknown".to_string(),
            version: "unknown".to_string(),
            country: None,
            country_code: None,
            region: None,
            city: None,
            latitude: None,
            longitude: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("country"));
        assert!(!json.contains("latitude"));
    }
}
