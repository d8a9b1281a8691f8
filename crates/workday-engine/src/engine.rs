//! The business-time arithmetic engine.
//!
//! A calculation is three ordered stages over a business-local moment, each a
//! pure function whose output feeds the next:
//!
//! 1. [`snap_to_business`] — move an arbitrary start to a well-defined
//!    business moment (backward, to the close of the last business window).
//! 2. [`add_business_days`] — step forward whole calendar days, skipping
//!    weekends and holidays, leaving the time of day untouched.
//! 3. [`add_business_minutes`] — consume a minute budget inside business
//!    blocks, jumping over nights, lunches, weekends, and holidays without
//!    spending any of it.
//!
//! [`calculate`] wraps the pipeline between the timezone boundary's two
//! conversions and performs the single holiday fetch, keyed by the
//! business-local start year. Day-stepping across a year boundary does not
//! re-fetch; a span that crosses into a new year runs against the start
//! year's set.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::calendar::{
    at_hour, is_business_day, is_business_time, LUNCH_END_HOUR, LUNCH_START_HOUR, WORK_END_HOUR,
    WORK_START_HOUR,
};
use crate::error::Result;
use crate::holiday::{HolidayProvider, HolidaySet};
use crate::zone::{to_instant, to_local};

/// One calculation: a start instant plus whole business days and minutes.
///
/// Both quantities default to zero; callers supplying whole hours multiply by
/// 60. Shape validation (bounds, at-least-one) belongs to the caller — the
/// engine assumes well-formed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationRequest {
    /// The starting instant, timezone-independent.
    pub start: DateTime<Utc>,
    /// Whole business days to add.
    pub days: u32,
    /// Whole business minutes to add.
    pub minutes: u32,
}

/// Compute the target instant for `request`.
///
/// Fetches the holiday set once, for the business-local start year, then runs
/// the three stages and converts the result back to an absolute instant.
///
/// # Errors
///
/// Propagates the provider's failure verbatim; no partial result is produced.
pub async fn calculate<P: HolidayProvider>(
    provider: &P,
    request: &CalculationRequest,
) -> Result<DateTime<Utc>> {
    let start = to_local(request.start);
    let holidays = provider.holidays(start.year()).await?;
    let end = calculate_local(start, request.days, request.minutes, &holidays);
    Ok(to_instant(end))
}

/// The pure pipeline: adjust, add days, add minutes.
///
/// Exposed separately so each calculation can be driven from local fixtures
/// without a provider or a timezone conversion.
pub fn calculate_local(
    start: NaiveDateTime,
    days: u32,
    minutes: u32,
    holidays: &HolidaySet,
) -> NaiveDateTime {
    let adjusted = snap_to_business(start, holidays);
    let after_days = add_business_days(adjusted, days, holidays);
    add_business_minutes(after_days, minutes, holidays)
}

/// Stage A: snap the start backward to the most recent valid business moment.
///
/// A moment already inside business time is returned unchanged. Anything else
/// is treated as if submitted at the close of the last business window:
///
/// - non-business day → nearest earlier business day at 17:00;
/// - business day at or after 17:00 → same day 17:00;
/// - business day inside the lunch gap → same day 12:00;
/// - business day before 08:00 → previous business day at 17:00.
pub fn snap_to_business(local: NaiveDateTime, holidays: &HolidaySet) -> NaiveDateTime {
    if is_business_time(local, holidays) {
        return local;
    }

    let date = local.date();
    if !is_business_day(date, holidays) {
        return back_to_business_day(date, holidays).and_time(at_hour(WORK_END_HOUR));
    }

    let hour = local.time().hour();
    if hour >= WORK_END_HOUR {
        date.and_time(at_hour(WORK_END_HOUR))
    } else if hour == LUNCH_START_HOUR {
        date.and_time(at_hour(LUNCH_START_HOUR))
    } else {
        // Before the morning opening: close of the previous business day.
        let prev = previous_day(date);
        back_to_business_day(prev, holidays).and_time(at_hour(WORK_END_HOUR))
    }
}

/// Stage B: add whole business days, skipping weekends and holidays.
///
/// The time of day is carried through unchanged, including any off-boundary
/// minutes inherited from the start.
pub fn add_business_days(local: NaiveDateTime, days: u32, holidays: &HolidaySet) -> NaiveDateTime {
    let mut date = local.date();
    for _ in 0..days {
        date = next_business_day(date, holidays);
    }
    date.and_time(local.time())
}

/// Stage C: add business minutes, skipping non-business windows.
///
/// Inside business time the budget is consumed up to the end of the current
/// block (12:00 in the morning, 17:00 in the afternoon). Outside business
/// time the moment advances to the next opening without consuming anything:
/// 08:00 the same day before the opening, 13:00 after lunch, or 08:00 on the
/// next business day otherwise. Terminates because every jump strictly
/// advances the moment and every consuming step spends at least one minute.
pub fn add_business_minutes(
    local: NaiveDateTime,
    minutes: u32,
    holidays: &HolidaySet,
) -> NaiveDateTime {
    let mut current = local;
    let mut remaining = i64::from(minutes);

    while remaining > 0 {
        if is_business_time(current, holidays) {
            let block_end = current.date().and_time(block_end_time(current));
            let available = (block_end - current).num_minutes();
            let step = available.min(remaining);
            current += Duration::minutes(step);
            remaining -= step;
        } else {
            current = next_opening(current, holidays);
        }
    }
    current
}

/// End of the business block containing `moment`: noon for the morning
/// block, the work-end boundary for the afternoon block.
fn block_end_time(moment: NaiveDateTime) -> chrono::NaiveTime {
    if moment.time().hour() < LUNCH_START_HOUR {
        at_hour(LUNCH_START_HOUR)
    } else {
        at_hour(WORK_END_HOUR)
    }
}

/// The next business-time entry point strictly after an out-of-window moment.
fn next_opening(current: NaiveDateTime, holidays: &HolidaySet) -> NaiveDateTime {
    let date = current.date();
    let hour = current.time().hour();

    if is_business_day(date, holidays) {
        if hour < WORK_START_HOUR {
            return date.and_time(at_hour(WORK_START_HOUR));
        }
        if hour >= LUNCH_START_HOUR && hour < LUNCH_END_HOUR {
            return date.and_time(at_hour(LUNCH_END_HOUR));
        }
    }
    // At or after the close, or not a business day at all.
    next_business_day(date, holidays).and_time(at_hour(WORK_START_HOUR))
}

/// The first business day strictly after `date`.
fn next_business_day(date: NaiveDate, holidays: &HolidaySet) -> NaiveDate {
    let mut date = date;
    loop {
        match date.succ_opt() {
            Some(next) => date = next,
            None => return date,
        }
        if is_business_day(date, holidays) {
            return date;
        }
    }
}

/// The nearest business day at or before `date`.
fn back_to_business_day(date: NaiveDate, holidays: &HolidaySet) -> NaiveDate {
    let mut date = date;
    while !is_business_day(date, holidays) {
        match date.pred_opt() {
            Some(prev) => date = prev,
            None => break,
        }
    }
    date
}

fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

// ── Tests ───────────────────────────────────────────────────────────────────
