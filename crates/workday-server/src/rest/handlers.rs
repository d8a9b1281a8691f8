//! Request handlers and parameter validation.
//!
//! The engine assumes well-formed input, so every shape rule lives here:
//! bounds on the two counts, the at-least-one rule, and the start-instant
//! format. Bounds match the upstream contract — about two calendar years of
//! days, about one working year of hours — to keep the stepping loops short.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use workday_engine::{calculate, CalculationRequest, HolidayProvider};

use super::AppState;
use crate::error::ApiError;

/// Upper bound on `days` (~2 calendar years).
pub const MAX_DAYS: u32 = 730;
/// Upper bound on `hours` (~1 working year).
pub const MAX_HOURS: u32 = 2080;

/// Query parameters of `GET /calculate`.
///
/// Kept as raw strings so range and format failures produce the structured
/// error payload instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateParams {
    /// Start instant, RFC 3339. Defaults to now.
    pub date: Option<String>,
    /// Business days to add, 1..=730.
    pub days: Option<String>,
    /// Business hours to add, 1..=2080.
    pub hours: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// The computed instant, RFC 3339 UTC with milliseconds.
    pub date: String,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn calculate_business_date<P>(
    State(state): State<AppState<P>>,
    Query(params): Query<CalculateParams>,
) -> Result<Json<CalculateResponse>, ApiError>
where
    P: HolidayProvider + Send + Sync + 'static,
{
    let request = build_request(&params, Utc::now())?;
    tracing::debug!(start = %request.start, days = request.days, minutes = request.minutes, "calculating");
    let result = calculate(state.provider.as_ref(), &request).await?;
    Ok(Json(CalculateResponse {
        date: result.to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Validate the query shape and assemble the engine request.
fn build_request(params: &CalculateParams, now: DateTime<Utc>) -> Result<CalculationRequest, ApiError> {
    let days = parse_bounded(params.days.as_deref(), "days", MAX_DAYS)?;
    let hours = parse_bounded(params.hours.as_deref(), "hours", MAX_HOURS)?;

    if days.is_none() && hours.is_none() {
        return Err(ApiError::InvalidParameters(
            "At least one of 'days' or 'hours' must be provided.".to_string(),
        ));
    }

    let start = match params.date.as_deref() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                ApiError::InvalidParameters("Invalid ISO 8601 date format.".to_string())
            })?,
        None => now,
    };

    Ok(CalculationRequest {
        start,
        days: days.unwrap_or(0),
        minutes: hours.unwrap_or(0) * 60,
    })
}

fn parse_bounded(raw: Option<&str>, name: &str, max: u32) -> Result<Option<u32>, ApiError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: u32 = raw.parse().map_err(|_| out_of_range(name, max))?;
    if value < 1 || value > max {
        return Err(out_of_range(name, max));
    }
    Ok(Some(value))
}

fn out_of_range(name: &str, max: u32) -> ApiError {
    ApiError::InvalidParameters(format!("'{name}' must be an integer between 1 and {max}."))
}

// ── Tests ───────────────────────────────────────────────────────────────────
