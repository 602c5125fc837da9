//! Floating-holiday date arithmetic.
//!
//! These helpers locate weekday-ruled days within a month ("last Monday of
//! May", "fourth Thursday of November") and are the foundation the dynamic
//! holiday derivation builds on.

use crate::date::{days_in_month, Date};
use crate::weekday::Weekday;
use dd_core::Result;

/// Day-of-month of the last `weekday` in `year`/`month`.
///
/// Starts at the month's final calendar day (month length computed directly,
/// so December needs no next-month rollover and leap February is handled)
/// and steps backward until the weekday matches.
pub fn last_weekday_of_month(year: i32, month: u8, weekday: Weekday) -> Result<u8> {
    let mut d = Date::from_ymd(year, month, 1)?.end_of_month();
    while d.weekday() != weekday {
        d = d - 1;
    }
    Ok(d.day_of_month())
}

/// Day-of-month of the `(n + 1)`-th `weekday` in `year`/`month`.
///
/// `n` is a **zero-based ordinal**: `n = 0` finds the first occurrence and
/// `n = 3` the fourth. Every call site in this workspace follows that
/// convention. Returns `None` when the month holds fewer than `n + 1`
/// occurrences — an expected outcome the caller handles by skipping the
/// holiday for that year — and for an out-of-range month or year.
pub fn nth_weekday_of_month(year: i32, month: u8, weekday: Weekday, n: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let target = n as u16 + 1;
    let mut count = 0u16;
    for day in 1..=days_in_month(year, month) {
        let d = Date::from_ymd(year, month, day).ok()?;
        if d.weekday() == weekday {
            count += 1;
            if count == target {
                return Some(day);
            }
        }
    }
    None
}
