//! The timezone boundary of the engine.
//!
//! Every calculation happens on business-local wall-clock fields. This module
//! owns the two conversions at the edges: an absolute instant into a local
//! moment on the way in, and the final local moment back into an absolute
//! instant on the way out. The business timezone is a fixed constant, not a
//! per-request input.
//!
//! Local moments carry minute granularity only — [`to_local`] drops seconds
//! and sub-seconds, so every value the arithmetic stages see is minute-aligned.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// The fixed business timezone (UTC-5, no DST observed since 1993).
pub const BUSINESS_TZ: Tz = chrono_tz::America::Bogota;

/// Convert an absolute instant to business-local wall-clock fields.
///
/// The result is truncated to minute granularity: the business-local moment
/// is a (year, month, day, hour, minute) tuple and nothing finer.
pub fn to_local(instant: DateTime<Utc>) -> NaiveDateTime {
    let local = instant.with_timezone(&BUSINESS_TZ).naive_local();
    local
        .with_second(0)
        .and_then(|l| l.with_nanosecond(0))
        .unwrap_or(local)
}

/// Convert a business-local moment back to an absolute instant.
///
/// Exact inverse of [`to_local`] for every minute-representable local moment:
/// `to_instant(to_local(x)) == x` whenever `x` is minute-aligned. Total — an
/// ambiguous local time resolves to its earliest mapping and a nonexistent one
/// slides forward past the gap. Neither case occurs in the business zone.
pub fn to_instant(local: NaiveDateTime) -> DateTime<Utc> {
    match BUSINESS_TZ.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // A DST gap. Wall-clock times inside a gap are at most an hour
            // wide, so the moment one hour later always exists.
            let shifted = local + Duration::hours(1);
            BUSINESS_TZ
                .from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&local))
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
