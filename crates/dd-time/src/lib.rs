//! # dd-time
//!
//! Calendar-date type, floating-holiday arithmetic, and holiday calendars
//! for datedim-rs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────

/// Floating-holiday date arithmetic (last / nth weekday of month).
pub mod arith;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Ecclesiastical Easter computation.
pub mod easter;

/// Holiday maps and the public-holiday provider trait.
pub mod holidays;

/// `Month` — month-of-year enum.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────

pub use arith::{last_weekday_of_month, nth_weekday_of_month};
pub use calendars::{
    company_holidays, default_company_holidays, dynamic_company_holidays, UsFederalCalendar,
};
pub use date::{Date, DateRange};
pub use easter::easter_sunday;
pub use holidays::{holiday_map_from_ymd, HolidayMap, PublicHolidayProvider};
pub use month::Month;
pub use weekday::Weekday;
