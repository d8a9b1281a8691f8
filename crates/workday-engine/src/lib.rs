//! # workday-engine
//!
//! Business-time arithmetic for SLA deadlines: advance an instant by whole
//! business days and business hours, honoring a fixed business timezone, a
//! fixed daily work window with a lunch break, weekends, and a dynamically
//! supplied set of holiday dates.
//!
//! The engine is a pure, stateless function over its inputs. The caller's
//! instant is converted to business-local wall-clock fields, adjusted and
//! advanced there, and converted back — so results are timezone-correct
//! regardless of how the caller represents instants.
//!
//! ## Modules
//!
//! - [`zone`] — the timezone boundary: absolute instant ↔ business-local moment
//! - [`calendar`] — business day and business time predicates
//! - [`holiday`] — the holiday set and the provider capability trait
//! - [`engine`] — start adjustment, day-stepping, and minute-stepping
//! - [`error`] — error types

pub mod calendar;
pub mod engine;
pub mod error;
pub mod holiday;
pub mod zone;

pub use calendar::{is_business_day, is_business_time, is_holiday, is_weekend};
pub use engine::{
    add_business_days, add_business_minutes, calculate, calculate_local, snap_to_business,
    CalculationRequest,
};
pub use error::{Result, WorkdayError};
pub use holiday::{FixedHolidays, HolidayProvider, HolidaySet};
pub use zone::{to_instant, to_local, BUSINESS_TZ};
