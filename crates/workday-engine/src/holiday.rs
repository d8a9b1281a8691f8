//! The holiday set and the capability trait that supplies it.
//!
//! The engine consumes holidays as an opaque set of calendar dates for one
//! year. Where the set comes from (network fetch, fixture, file) is the
//! provider's concern; the engine performs exactly one `holidays` call per
//! calculation, keyed by the business-local start year, and treats the
//! returned set as read-only.

use std::collections::HashSet;
use std::future::Future;

use chrono::NaiveDate;

use crate::error::Result;

/// Non-working calendar dates for a given year.
///
/// Timezone-less: membership is decided on business-local dates only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Source of the holiday set for a given year.
///
/// One capability, one method. The call may fail (network source); on failure
/// the engine propagates the error verbatim and produces no partial result.
pub trait HolidayProvider {
    /// Fetch the holiday set for `year`.
    fn holidays(&self, year: i32) -> impl Future<Output = Result<HolidaySet>> + Send;
}

/// Provider backed by a fixed set, returned for every year.
///
/// The test double mandated by the provider seam: calculations run against a
/// known calendar without any external source.
#[derive(Debug, Clone, Default)]
pub struct FixedHolidays {
    set: HolidaySet,
}

impl FixedHolidays {
    pub fn new(set: HolidaySet) -> Self {
        Self { set }
    }
}

impl HolidayProvider for FixedHolidays {
    fn holidays(&self, _year: i32) -> impl Future<Output = Result<HolidaySet>> + Send {
        let set = self.set.clone();
        async move { Ok(set) }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
