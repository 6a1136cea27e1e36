//! # Conversion API
//!
//! Boundary between the birthday engine and the presentation layer: request
//! validation, the response schema, and error mapping.

pub mod errors;
pub mod request;
pub mod response;

use tracing::debug;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use request::{ConversionRequest, ConvertRequest};
pub use response::{ConvertResponse, OccurrenceRow};

use crate::birthday::{Birth, Projection};
use crate::date::Date;

/// Runs a validated request. The whole span is computed or the request fails.
///
/// ```
/// use lunar_birthday::Date;
/// use lunar_birthday::api::{self, ConversionRequest};
///
/// let request = ConversionRequest {
///     birth_date: Date::from_gregorian(2000, 5, 11).unwrap(),
///     years_count: 3,
///     include_leap: true,
///     start_year: Some(2024),
/// };
/// let response = api::convert(&request, Date::from_gregorian(2025, 6, 1).unwrap()).unwrap();
/// assert_eq!("四月", response.lunar_month_name);
/// assert_eq!(3, response.results.len());
/// ```
pub fn convert(request: &ConversionRequest, today: Date) -> ApiResult<ConvertResponse> {
    let birth = Birth::from_date(request.birth_date)?;
    let projection = Projection {
        start_year: request.start_year.unwrap_or(birth.lunar.year),
        years_count: request.years_count,
        include_leap: request.include_leap,
    };
    let occurrences = birth.project(&projection, today)?;
    debug!(
        birth = %request.birth_date.iso_gregorian(),
        start_year = projection.start_year,
        rows = occurrences.len(),
        "projected lunar birthdays"
    );
    Ok(ConvertResponse::new(&birth, &occurrences))
}
