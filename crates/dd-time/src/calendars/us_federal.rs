//! United States federal holiday calendar.

use std::ops::RangeInclusive;

use crate::arith::{last_weekday_of_month, nth_weekday_of_month};
use crate::date::Date;
use crate::holidays::{HolidayMap, PublicHolidayProvider};
use crate::weekday::Weekday;
use dd_core::Result;

/// Public-holiday provider for the United States federal calendar.
///
/// Holidays per year:
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
/// * Washington's Birthday (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth National Independence Day (Jun 19, from 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving (4th Thu in Nov)
/// * Christmas Day (Dec 25)
///
/// A fixed-date holiday falling on a Saturday or Sunday additionally emits a
/// `"… (observed)"` entry on the preceding Friday or following Monday, so
/// both the nominal and the observed date appear in the lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsFederalCalendar;

impl UsFederalCalendar {
    fn fixed_with_observed(
        map: &mut HolidayMap,
        year: i32,
        month: u8,
        day: u8,
        name: &str,
    ) -> Result<()> {
        let date = Date::from_ymd(year, month, day)?;
        map.insert(date, name.to_string());
        match date.weekday() {
            Weekday::Saturday => {
                map.insert(date - 1, format!("{name} (observed)"));
            }
            Weekday::Sunday => {
                map.insert(date + 1, format!("{name} (observed)"));
            }
            _ => {}
        }
        Ok(())
    }

    fn nth_monday(map: &mut HolidayMap, year: i32, month: u8, n: u8, name: &str) -> Result<()> {
        // Zero-based ordinal, like every nth-weekday call site.
        if let Some(day) = nth_weekday_of_month(year, month, Weekday::Monday, n) {
            map.insert(Date::from_ymd(year, month, day)?, name.to_string());
        }
        Ok(())
    }

    fn year_holidays(map: &mut HolidayMap, year: i32) -> Result<()> {
        Self::fixed_with_observed(map, year, 1, 1, "New Year's Day")?;
        if year >= 1986 {
            Self::nth_monday(map, year, 1, 2, "Martin Luther King Jr. Day")?;
        }
        Self::nth_monday(map, year, 2, 2, "Washington's Birthday")?;

        let memorial = last_weekday_of_month(year, 5, Weekday::Monday)?;
        map.insert(
            Date::from_ymd(year, 5, memorial)?,
            "Memorial Day".to_string(),
        );

        if year >= 2021 {
            Self::fixed_with_observed(map, year, 6, 19, "Juneteenth National Independence Day")?;
        }
        Self::fixed_with_observed(map, year, 7, 4, "Independence Day")?;
        Self::nth_monday(map, year, 9, 0, "Labor Day")?;
        Self::nth_monday(map, year, 10, 1, "Columbus Day")?;
        Self::fixed_with_observed(map, year, 11, 11, "Veterans Day")?;

        if let Some(thursday) = nth_weekday_of_month(year, 11, Weekday::Thursday, 3) {
            map.insert(
                Date::from_ymd(year, 11, thursday)?,
                "Thanksgiving".to_string(),
            );
        }
        Self::fixed_with_observed(map, year, 12, 25, "Christmas Day")?;
        Ok(())
    }
}

impl PublicHolidayProvider for UsFederalCalendar {
    fn name(&self) -> &str {
        "US federal holidays"
    }

    fn holidays(&self, years: RangeInclusive<i32>) -> Result<HolidayMap> {
        let mut map = HolidayMap::new();
        for year in years {
            Self::year_holidays(&mut map, year)?;
        }
        Ok(map)
    }
}
