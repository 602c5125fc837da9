//! Ecclesiastical Easter computation.

use crate::date::Date;
use dd_core::Result;

/// Easter Sunday for `year`.
///
/// Uses the anonymous Gregorian (Oudin) algorithm; the intermediate terms
/// require signed arithmetic. Matches the published Western Easter dates
/// across the representable year range.
pub fn easter_sunday(year: i32) -> Result<Date> {
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}
