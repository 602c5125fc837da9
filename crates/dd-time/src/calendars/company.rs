//! Company holiday calendars.
//!
//! The fixed set observes the same month/day every year; the dynamic set is
//! derived per year from weekday rules and the Easter computation. Both are
//! pure factories — every call returns a fresh map the caller owns outright.

use std::ops::RangeInclusive;

use crate::arith::{last_weekday_of_month, nth_weekday_of_month};
use crate::date::Date;
use crate::easter::easter_sunday;
use crate::holidays::HolidayMap;
use crate::weekday::Weekday;
use dd_core::Result;

/// Fixed company holidays, observed on the same month/day every year.
const FIXED_COMPANY_HOLIDAYS: [(u8, u8, &str); 5] = [
    (2, 14, "Valentine's Day"),
    (3, 14, "Pi Day"),
    (4, 22, "Earth Day"),
    (5, 4, "Star Wars Day"),
    (10, 31, "Halloween"),
];

/// Build the default fixed company-holiday map for the inclusive year range.
pub fn default_company_holidays(years: RangeInclusive<i32>) -> Result<HolidayMap> {
    let mut map = HolidayMap::new();
    for year in years {
        for (month, day, name) in FIXED_COMPANY_HOLIDAYS {
            map.insert(Date::from_ymd(year, month, day)?, name.to_string());
        }
    }
    Ok(map)
}

/// Derive the floating company holidays for the inclusive year range.
///
/// Per year: Memorial Day (last Monday of May), Black Friday (the day after
/// the fourth Thursday of November), and Easter Sunday. A key collision
/// between derived entries is not expected, but were one to occur the entry
/// computed later wins.
pub fn dynamic_company_holidays(years: RangeInclusive<i32>) -> Result<HolidayMap> {
    let mut map = HolidayMap::new();
    for year in years {
        let memorial = last_weekday_of_month(year, 5, Weekday::Monday)?;
        map.insert(Date::from_ymd(year, 5, memorial)?, "Memorial Day".to_string());

        // Zero-based ordinal: n = 3 is the fourth Thursday. It falls on day
        // 22..=28, so the day after always stays within November.
        if let Some(thursday) = nth_weekday_of_month(year, 11, Weekday::Thursday, 3) {
            map.insert(
                Date::from_ymd(year, 11, thursday + 1)?,
                "Black Friday".to_string(),
            );
        }

        map.insert(easter_sunday(year)?, "Easter".to_string());
    }
    Ok(map)
}

/// Resolve the company holiday map for a generation run.
///
/// A caller-supplied `override_map` replaces the built-in fixed set
/// wholesale; otherwise the defaults are built fresh. When
/// `include_dynamic` is set, the derived floating holidays are merged on
/// top and win on any key collision.
pub fn company_holidays(
    years: RangeInclusive<i32>,
    override_map: Option<HolidayMap>,
    include_dynamic: bool,
) -> Result<HolidayMap> {
    let mut map = match override_map {
        Some(map) => map,
        None => default_company_holidays(years.clone())?,
    };
    if include_dynamic {
        map.extend(dynamic_company_holidays(years)?);
    }
    Ok(map)
}
