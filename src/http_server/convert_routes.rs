//! Conversion HTTP Routes
//!
//! `POST /convert` runs a birthday projection, `GET /health` reports liveness.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::api::{self, ApiError, ApiResult, ConvertRequest, ConvertResponse};
use crate::config::ProjectionConfig;
use crate::date::Date;

/// Shared, read-only state of the conversion routes
pub struct ConvertState {
    limits: ProjectionConfig,
    today: fn() -> Date,
}

impl ConvertState {
    pub fn new(limits: ProjectionConfig) -> Self {
        Self::with_clock(limits, Date::today)
    }

    /// State whose notion of "today" comes from `today`.
    pub fn with_clock(limits: ProjectionConfig, today: fn() -> Date) -> Self {
        Self { limits, today }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create conversion routes
pub fn convert_routes(state: Arc<ConvertState>) -> Router {
    Router::new()
        .route("/convert", post(convert_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn convert_handler(
    State(state): State<Arc<ConvertState>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> ApiResult<Json<ConvertResponse>> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected malformed conversion request");
        ApiError::InvalidRequest(rejection.body_text())
    })?;
    let request = body.validate(&state.limits).inspect_err(|e| {
        warn!(error = %e, "rejected conversion request");
    })?;
    let response = api::convert(&request, (state.today)())?;
    Ok(Json(response))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }
}
