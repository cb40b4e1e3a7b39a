//! Error types for the utility backend.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while loading data or validating input.

use thiserror::Error;

/// The main error type for the utility backend.
///
/// Note that holiday classification itself never returns this type: a
/// classification query degrades to a weekday result on malformed input
/// instead of failing. Errors arise only from loading the exception table
/// and from request validation in the API layer.
///
/// # Example
///
/// ```
/// use utils_backend::error::ServiceError;
///
/// let error = ServiceError::HolidayDataNotFound {
///     path: "/missing/holidays.json".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Holiday data not found: /missing/holidays.json"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The holiday data file was not found at the specified path.
    #[error("Holiday data not found: {path}")]
    HolidayDataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The holiday data could not be parsed as a date-keyed JSON map.
    #[error("Failed to parse holiday data from '{origin}': {message}")]
    HolidayDataParse {
        /// Which data source failed to parse (a file path or "embedded").
        origin: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date supplied by a client was not in `YYYY-MM-DD` form.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_data_not_found_displays_path() {
        let error = ServiceError::HolidayDataNotFound {
            path: "/missing/holidays.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday data not found: /missing/holidays.json"
        );
    }

    #[test]
    fn test_holiday_data_parse_displays_origin_and_message() {
        let error = ServiceError::HolidayDataParse {
            origin: "embedded".to_string(),
            message: "expected a map".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse holiday data from 'embedded': expected a map"
        );
    }

    #[test]
    fn test_holiday_data_parse_has_no_error_source() {
        // The parse failure is self-contained; nothing should be exposed
        // through the std::error::Error source chain.
        use std::error::Error;

        let error = ServiceError::HolidayDataParse {
            origin: "embedded".to_string(),
            message: "expected a map".to_string(),
        };
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_date_displays_input() {
        let error = ServiceError::InvalidDate {
            input: "2026-13-40".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2026-13-40': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ServiceError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> ServiceResult<()> {
            Err(ServiceError::HolidayDataNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> ServiceResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
