//! HTTP error mapping.
//!
//! Three error kinds leave this service: bad request shape, an unavailable
//! holiday source, and everything else. Each maps to one status code and a
//! structured `{error, message}` payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use workday_engine::WorkdayError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidParameters(String),

    #[error("The holiday service is unavailable.")]
    HolidayUnavailable,

    #[error("An unexpected error occurred.")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            ApiError::HolidayUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidParameters(_) => "InvalidParameters",
            ApiError::HolidayUnavailable => "HolidayApiError",
            ApiError::Internal => "InternalServerError",
        }
    }
}

impl From<WorkdayError> for ApiError {
    fn from(err: WorkdayError) -> Self {
        match err {
            WorkdayError::HolidaySource(reason) => {
                tracing::warn!(%reason, "holiday source failure");
                ApiError::HolidayUnavailable
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
