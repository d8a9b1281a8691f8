//! The business calendar predicate.
//!
//! Decides, for business-local dates and moments, what counts as a business
//! day and what counts as business time. The work window and the lunch gap
//! are fixed constants of the business calendar, not request inputs.
//!
//! The lunch check is hour-granular on purpose: any minute within hour 12 is
//! lunch, in the start-adjustment stage and the minute-stepping stage alike.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::holiday::HolidaySet;

/// First hour of the work day (inclusive).
pub const WORK_START_HOUR: u32 = 8;
/// First hour of the lunch gap (inclusive).
pub const LUNCH_START_HOUR: u32 = 12;
/// First hour after the lunch gap.
pub const LUNCH_END_HOUR: u32 = 13;
/// First hour after the work day.
pub const WORK_END_HOUR: u32 = 17;

/// Local time at the top of `hour`.
pub(crate) fn at_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Whether the local date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the local date is in the holiday set.
pub fn is_holiday(date: NaiveDate, holidays: &HolidaySet) -> bool {
    holidays.contains(date)
}

/// Whether the local date is a working day: not a weekend, not a holiday.
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !is_weekend(date) && !is_holiday(date, holidays)
}

/// Whether the local moment is inside business time.
///
/// Business day, hour in `[8, 17)`, and not the lunch hour. 12:00 through
/// 12:59 is out; 13:00 is back in; 17:00 is already out.
pub fn is_business_time(moment: NaiveDateTime, holidays: &HolidaySet) -> bool {
    let hour = moment.time().hour();
    is_business_day(moment.date(), holidays)
        && (WORK_START_HOUR..WORK_END_HOUR).contains(&hour)
        && hour != LUNCH_START_HOUR
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn moment(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn holidays() -> HolidaySet {
        [date(2025, 1, 1), date(2025, 4, 17), date(2025, 4, 18)]
            .into_iter()
            .collect()
    }

    // ── is_weekend / is_business_day ─────────────────────────────────────

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date(2025, 9, 20))); // Saturday
        assert!(is_weekend(date(2025, 9, 21))); // Sunday
        assert!(!is_weekend(date(2025, 9, 19))); // Friday
        assert!(!is_weekend(date(2025, 9, 22))); // Monday
    }

    #[test]
    fn test_holiday_membership() {
        let h = holidays();
        assert!(is_holiday(date(2025, 4, 17), &h));
        assert!(!is_holiday(date(2025, 4, 16), &h));
    }

    #[test]
    fn test_business_day_excludes_weekends_and_holidays() {
        let h = holidays();
        assert!(is_business_day(date(2025, 9, 23), &h)); // Tuesday
        assert!(!is_business_day(date(2025, 9, 20), &h)); // Saturday
        assert!(!is_business_day(date(2025, 4, 18), &h)); // Good Friday (holiday)
        // A holiday on a weekday is not a business day even though it is a weekday
        assert!(!is_weekend(date(2025, 4, 18)));
    }

    // ── is_business_time ─────────────────────────────────────────────────

    #[test]
    fn test_business_time_window_boundaries() {
        let h = holidays();
        // Tuesday 2025-09-23
        assert!(is_business_time(moment(2025, 9, 23, 8, 0), &h));
        assert!(is_business_time(moment(2025, 9, 23, 11, 59), &h));
        assert!(is_business_time(moment(2025, 9, 23, 13, 0), &h));
        assert!(is_business_time(moment(2025, 9, 23, 16, 59), &h));
        assert!(!is_business_time(moment(2025, 9, 23, 7, 59), &h));
        assert!(!is_business_time(moment(2025, 9, 23, 17, 0), &h));
        assert!(!is_business_time(moment(2025, 9, 23, 22, 30), &h));
    }

    #[test]
    fn test_lunch_hour_excluded_at_any_minute() {
        let h = holidays();
        assert!(!is_business_time(moment(2025, 9, 23, 12, 0), &h));
        assert!(!is_business_time(moment(2025, 9, 23, 12, 30), &h));
        assert!(!is_business_time(moment(2025, 9, 23, 12, 59), &h));
    }

    #[test]
    fn test_business_time_requires_business_day() {
        let h = holidays();
        assert!(!is_business_time(moment(2025, 9, 20, 10, 0), &h)); // Saturday
        assert!(!is_business_time(moment(2025, 4, 17, 10, 0), &h)); // holiday
    }
}
