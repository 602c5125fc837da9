//! `Date` — the canonical calendar-date type.
//!
//! A date is a serial number of days since an epoch: serial 1 is
//! **January 1, 1900** (a Monday). The valid constructor range is
//! 1900-01-01 ..= 2199-12-31. There is no time-of-day or timezone
//! component; a `Date` is a plain calendar day.
//!
//! `Date` is the sole spine and lookup-key type of the workspace: holiday
//! maps are keyed by it directly, so equality and hashing are exact by
//! construction.
//!
//! Period-bound accessors ([`Date::week_end`] in particular) may step a few
//! days past the nominal constructor range when called on dates at its very
//! edge; the serial arithmetic stays well defined there.

use crate::month::Month;
use crate::weekday::Weekday;
use dd_core::errors::{Error, Result};

use chrono::Datelike;

/// A calendar date represented as a serial number (serial 1 = 1900-01-01).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum constructible date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum constructible date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let len = days_in_month(year, month);
        if day == 0 || day > len {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {len}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Internal constructor bypassing range checks; used where the result of
    /// serial arithmetic is known to stay meaningful (period bounds, ISO
    /// week resolution, spine iteration).
    pub(crate) const fn from_serial_raw(serial: i32) -> Self {
        Date(serial)
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("month always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday. Serial 1 (1900-01-01) is a Monday.
    pub fn weekday(&self) -> Weekday {
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return the calendar quarter (1–4).
    pub fn quarter(&self) -> u8 {
        (self.month() - 1) / 3 + 1
    }

    /// Return the ISO-8601 week number (1–53).
    ///
    /// The Thursday of a date's Monday-based week determines which year's
    /// week numbering it belongs to.
    pub fn iso_week(&self) -> u8 {
        let thursday = self.0 + 4 - self.weekday().ordinal() as i32;
        let (year, _, _) = ymd_from_serial(thursday);
        let jan1 = serial_from_ymd(year, 1, 1);
        ((thursday - jan1) / 7 + 1) as u8
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// Advance by `n` days. Errors if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Number of calendar days from `self` to `other` (positive if
    /// `other` is later).
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Period bounds ────────────────────────────────────────────────────

    /// First day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// The Monday on or before this date.
    pub fn week_start(self) -> Self {
        Date::from_serial_raw(self.0 - (self.weekday().ordinal() as i32 - 1))
    }

    /// The Sunday on or after this date (six days past [`Date::week_start`]).
    pub fn week_end(self) -> Self {
        Date::from_serial_raw(self.week_start().0 + 6)
    }

    // ── Formatting & keys ────────────────────────────────────────────────

    /// ISO date name, e.g. `"2024-03-31"`.
    pub fn iso_name(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }

    /// American date name, e.g. `"03/31/2024"`.
    pub fn american_name(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{m:02}/{d:02}/{y:04}")
    }

    /// Integer surrogate of the form `YYYYMMDD`, e.g. `20240331`.
    pub fn date_key(&self) -> i32 {
        let (y, m, d) = ymd_from_serial(self.0);
        y * 10_000 + m as i32 * 100 + d as i32
    }

    /// String business key of the form `"YYYYMMDD"`.
    pub fn business_key(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}{m:02}{d:02}")
    }

    /// Integer of the form `YYYYMM`, e.g. `202403`.
    pub fn year_month(&self) -> i32 {
        let (y, m, _) = ymd_from_serial(self.0);
        y * 100 + m as i32
    }

    // ── Iteration ────────────────────────────────────────────────────────

    /// Iterate every date in `[start, end]`, ascending. Empty if
    /// `start > end`.
    pub fn range_inclusive(start: Date, end: Date) -> DateRange {
        DateRange {
            next: start.0,
            last: end.0,
        }
    }

    // ── chrono bridge ────────────────────────────────────────────────────

    /// Convert from a [`chrono::NaiveDate`].
    pub fn from_naive(date: chrono::NaiveDate) -> Result<Self> {
        Self::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }

    /// Convert to a [`chrono::NaiveDate`].
    pub fn to_naive(self) -> chrono::NaiveDate {
        let (y, m, d) = ymd_from_serial(self.0);
        chrono::NaiveDate::from_ymd_opt(y, m as u32, d as u32)
            .expect("valid calendar date by construction")
    }

    /// Convert to a midnight [`chrono::NaiveDateTime`].
    pub fn to_naive_datetime(self) -> chrono::NaiveDateTime {
        self.to_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight always valid")
    }

    /// The current local calendar date from the system clock.
    pub fn today() -> Result<Self> {
        Self::from_naive(chrono::Local::now().date_naive())
    }
}

// ── Operators ─────────────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iso_name())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.iso_name())
    }
}

// ── Iteration support ─────────────────────────────────────────────────────

/// Exact-size iterator over an inclusive date range, ascending.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: i32,
    last: i32,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date(self.next);
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

// ── serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Date;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Date {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.iso_name())
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            let mut parts = text.splitn(3, '-');
            let parse = |p: Option<&str>| -> Result<i32, D::Error> {
                p.and_then(|v| v.parse().ok())
                    .ok_or_else(|| de::Error::custom(format!("invalid date string {text:?}")))
            };
            let y = parse(parts.next())?;
            let m = parse(parts.next())?;
            let d = parse(parts.next())?;
            Date::from_ymd(y, m as u8, d as u8).map_err(de::Error::custom)
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number (serial 1 = 1900-01-01).
///
/// Pure Gregorian arithmetic; remains valid a little past the constructor
/// range, which the ISO-week resolution relies on.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let mut serial = (year - 1900) * 365;
    // Leap days in [1900, year)
    serial += (year - 1901) / 4 - (year - 1901) / 100 + (year - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    // Estimate the year, then adjust until the serial falls within it.
    let mut y = serial / 365 + 1900;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let len = days_in_month(y, m) as i32;
        if remaining <= len {
            break;
        }
        remaining -= len;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────
