//! Conversion API errors.
//!
//! Every failure reaches the client as `{ "error": "<message>" }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::birthday::ProjectionError;
use crate::chinese;

/// Result type for conversion requests
pub type ApiResult<T> = Result<T, ApiError>;

/// Conversion API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Missing or malformed request field
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Date outside the calendar table, or a malformed lunar date
    #[error("{0}")]
    Calendar(#[from] chinese::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Calendar(e) if e.is_out_of_range() => StatusCode::BAD_REQUEST,
            ApiError::Calendar(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProjectionError> for ApiError {
    fn from(err: ProjectionError) -> Self {
        match err {
            ProjectionError::Calendar(e) => ApiError::Calendar(e),
            other => ApiError::InvalidRequest(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese::Month;
    use crate::date::Date;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidRequest("years_count".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let before = Date::from_gregorian(1899, 12, 31).unwrap();
        assert_eq!(
            ApiError::from(chinese::Error::DateOutOfRange(before)).status_code(),
            StatusCode::BAD_REQUEST
        );
        let invalid = chinese::Error::InvalidLunarDate {
            year: 2001,
            month: Month::Common(11),
            day: 30,
        };
        assert_eq!(
            ApiError::from(invalid).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_projection_error_mapping() {
        let err = ApiError::from(ProjectionError::EmptySpan);
        assert!(matches!(err, ApiError::InvalidRequest(_)));
        let err = ApiError::from(ProjectionError::Calendar(chinese::Error::YearOutOfRange(2101)));
        assert!(matches!(err, ApiError::Calendar(_)));
    }

    #[test]
    fn test_error_body() {
        let body = ErrorResponse::from(ApiError::InvalidRequest("missing birth_date".into()));
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(r#"{"error":"invalid request: missing birth_date"}"#, json);
    }
}
