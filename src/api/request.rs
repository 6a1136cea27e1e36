//! Conversion request parsing and validation.

use serde::Deserialize;

use super::errors::{ApiError, ApiResult};
use crate::config::ProjectionConfig;
use crate::date::Date;

/// Raw body of `POST /api/convert`.
///
/// Fields stay loosely typed so that a missing or negative value is reported
/// as an invalid request rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertRequest {
    /// Birth date, `YYYY-MM-DD`.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Number of lunar years to project.
    #[serde(default)]
    pub years_count: Option<i64>,
    /// Use leap-month dates in years repeating the leap month of birth.
    #[serde(default)]
    pub include_leap: Option<bool>,
    /// First lunar year to project; the birth year if absent.
    #[serde(default)]
    pub start_year: Option<i32>,
}

/// A validated conversion request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ConversionRequest {
    pub birth_date: Date,
    pub years_count: u32,
    pub include_leap: bool,
    pub start_year: Option<i32>,
}

impl ConvertRequest {
    /// Checks every field and applies defaults from `limits`.
    pub fn validate(&self, limits: &ProjectionConfig) -> ApiResult<ConversionRequest> {
        let text = self
            .birth_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| invalid("birth_date is required"))?;
        let birth_date = Date::parse_iso(text)
            .ok_or_else(|| invalid(format!("birth_date {text:?} is not a valid YYYY-MM-DD date")))?;

        let years_count = match self.years_count {
            None => limits.default_years,
            Some(n) if n <= 0 => return Err(invalid("years_count must be a positive integer")),
            Some(n) if n > i64::from(limits.max_years) => {
                return Err(invalid(format!(
                    "years_count must not exceed {}",
                    limits.max_years
                )));
            }
            Some(n) => n as u32,
        };

        Ok(ConversionRequest {
            birth_date,
            years_count,
            include_leap: self.include_leap.unwrap_or(true),
            start_year: self.start_year,
        })
    }
}

fn invalid(message: impl Into<String>) -> ApiError {
    ApiError::InvalidRequest(message.into())
}
