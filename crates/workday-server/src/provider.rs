//! Holiday provider backed by the upstream holiday API.
//!
//! Fetches a JSON array of `"YYYY-MM-DD"` strings, validates the shape,
//! filters to the requested year, and caches the resulting set per year. The
//! cache lives inside the provider instance behind an async `RwLock`, so
//! concurrent calculations share fetched years safely; nothing is
//! process-global.

use std::collections::HashMap;
use std::future::Future;

use chrono::{Datelike, NaiveDate};
use tokio::sync::RwLock;
use workday_engine::{HolidayProvider, HolidaySet, Result, WorkdayError};

pub struct HolidayApiProvider {
    client: reqwest::Client,
    url: String,
    cache: RwLock<HashMap<i32, HolidaySet>>,
}

impl HolidayApiProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    async fn fetch(&self, year: i32) -> Result<HolidaySet> {
        let payload: Vec<String> = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| WorkdayError::HolidaySource(e.to_string()))?
            .json()
            .await
            .map_err(|e| WorkdayError::HolidaySource(e.to_string()))?;

        parse_holiday_payload(year, &payload)
    }
}

/// Validate the upstream payload and keep the dates belonging to `year`.
///
/// The upstream list spans multiple years; a single malformed entry rejects
/// the whole payload rather than silently dropping dates.
pub fn parse_holiday_payload(year: i32, payload: &[String]) -> Result<HolidaySet> {
    let mut set = HolidaySet::new();
    for entry in payload {
        let date = NaiveDate::parse_from_str(entry, "%Y-%m-%d").map_err(|_| {
            WorkdayError::HolidaySource("Invalid data format received from holiday API.".into())
        })?;
        if date.year() == year {
            set.insert(date);
        }
    }
    Ok(set)
}

impl HolidayProvider for HolidayApiProvider {
    fn holidays(&self, year: i32) -> impl Future<Output = Result<HolidaySet>> + Send {
        async move {
            if let Some(set) = self.cache.read().await.get(&year) {
                tracing::debug!(year, "holiday cache hit");
                return Ok(set.clone());
            }

            tracing::info!(year, url = %self.url, "fetching holidays");
            let set = self.fetch(year).await?;
            self.cache.write().await.insert(year, set.clone());
            Ok(set)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
