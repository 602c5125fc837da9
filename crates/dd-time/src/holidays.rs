//! Holiday lookup maps and the public-holiday provider seam.
//!
//! Two independent holiday spaces exist: *public* holidays come from a
//! [`PublicHolidayProvider`], *company* holidays from the calendars in
//! [`crate::calendars`]. A date may appear in both; downstream business-day
//! logic consults only the company space.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::date::Date;
use dd_core::{Error, Result};

/// A holiday lookup for one space: at most one display name per date.
pub type HolidayMap = HashMap<Date, String>;

/// Source of public (government) holidays for a jurisdiction.
///
/// [`UsFederalCalendar`](crate::calendars::UsFederalCalendar) is the built-in
/// default; anything implementing this trait (including an adapter over an
/// external authoritative source) can be plugged into the dimension builder.
pub trait PublicHolidayProvider: std::fmt::Debug + Send + Sync {
    /// Human-readable jurisdiction name.
    fn name(&self) -> &str;

    /// Date → holiday-name lookup covering the inclusive year range.
    fn holidays(&self, years: RangeInclusive<i32>) -> Result<HolidayMap>;

    /// Whether `date` is a public holiday.
    fn contains(&self, date: Date) -> bool {
        self.holidays(date.year()..=date.year())
            .map(|map| map.contains_key(&date))
            .unwrap_or(false)
    }
}

/// Build a holiday map from raw `(year, month, day) → name` entries.
///
/// The validation boundary for caller-supplied company-holiday overrides: a
/// non-calendar date (February 30, month 13, …) fails fast with
/// [`Error::InvalidConfig`] before any dimension row is produced.
pub fn holiday_map_from_ymd<I, S>(entries: I) -> Result<HolidayMap>
where
    I: IntoIterator<Item = ((i32, u8, u8), S)>,
    S: Into<String>,
{
    let mut map = HolidayMap::new();
    for ((y, m, d), name) in entries {
        let date = Date::from_ymd(y, m, d).map_err(|e| {
            Error::InvalidConfig(format!("holiday entry {y:04}-{m:02}-{d:02}: {e}"))
        })?;
        map.insert(date, name.into());
    }
    Ok(map)
}
