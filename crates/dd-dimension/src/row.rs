//! Dimension row model.
//!
//! A [`DimensionRow`] carries the date spine plus one optional struct per
//! togglable field group. Disabled groups are `None`, so a consumer can tell
//! "not requested" apart from any in-band default.

use chrono::NaiveDateTime;
use dd_time::Date;

/// Calendar descriptor fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarFields {
    /// `"YYYY-MM-DD"`.
    pub iso_date_name: String,
    /// `"MM/DD/YYYY"`.
    pub american_date_name: String,
    /// Full weekday name, e.g. `"Monday"`.
    pub day_of_week_name: &'static str,
    /// Three-letter weekday abbreviation.
    pub day_of_week_abbrev: &'static str,
    /// Full month name, e.g. `"January"`.
    pub month_name: &'static str,
    /// Three-letter month abbreviation.
    pub month_abbrev: &'static str,
    /// Calendar year.
    pub year: i32,
    /// Calendar quarter label, `"Q1"`–`"Q4"`.
    pub quarter: String,
    /// Month number (1–12).
    pub month: u8,
    /// Day of the month (1–31).
    pub day: u8,
    /// ISO week label, e.g. `"W24"`.
    pub week_number: String,
    /// Integer `YYYYMM`.
    pub year_month: i32,
    /// Integer `YYYYQ`.
    pub year_quarter: i32,
}

/// Signed offsets between a row's date and the generation-time "today".
///
/// Month and quarter offsets are computed from calendar components, not
/// elapsed-day division, so they are exact whole counts and go negative for
/// past dates. Quarter offsets use true calendar quarters (unlike the
/// 90-day burnup approximation).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OffsetFields {
    /// Day count from today (negative in the past).
    pub day_offset: i32,
    /// Whole-month count from today.
    pub month_offset: i32,
    /// Whole-quarter count from today.
    pub quarter_offset: i32,
    /// Whole-year count from today.
    pub year_offset: i32,
}

/// Holiday flags and display names, one pair per holiday space.
///
/// The spaces are independent: a date can be both a public and a company
/// holiday. Names are empty strings on non-holidays.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolidayFields {
    /// Public (government) holiday flag.
    pub public_holiday_flag: bool,
    /// Public holiday name, or `""`.
    pub public_holiday_name: String,
    /// Company holiday flag.
    pub company_holiday_flag: bool,
    /// Company holiday name, or `""`.
    pub company_holiday_name: String,
}

/// Boolean day-classification flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagFields {
    /// Whether the row's date equals the generation-time "today".
    pub today_flag: bool,
    /// Monday–Friday.
    pub weekday_flag: bool,
    /// `weekday_flag && !company_holiday_flag`. Public holidays do not
    /// suppress business-day status; only company holidays do.
    pub business_day_flag: bool,
}

/// Period-progress ("burnup") indicators: 1 when the row's day falls within
/// the portion of its period already elapsed as of today, else 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BurnupFields {
    /// Day of the month (1–31).
    pub day_of_month: u8,
    /// Day of the year (1–366).
    pub day_of_year: u16,
    /// Weekday ordinal, Monday = 1 … Sunday = 7.
    pub day_of_week_starting_monday: u8,
    /// Same ordinal as `day_of_week_starting_monday`; both columns ship
    /// downstream.
    pub day_of_week: u8,
    /// Position within a fixed 90-day period (`day_of_year % 90`). A rough
    /// stand-in for the true calendar quarter, kept as-is for downstream
    /// compatibility.
    pub day_of_quarter: u16,
    /// Weekly burnup on the Monday-based ordinal.
    pub weekly_burnup_starting_monday: u8,
    /// Weekly burnup; equals `weekly_burnup_starting_monday`.
    pub weekly_burnup: u8,
    /// Monthly burnup (`day_of_month` vs today's).
    pub monthly_burnup: u8,
    /// Quarterly burnup on the 90-day approximation.
    pub quarterly_burnup: u8,
    /// Yearly burnup (`day_of_year` vs today's).
    pub yearly_burnup: u8,
}

/// Week and month boundary dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundFields {
    /// The Monday on or before the row's date.
    pub week_start: Date,
    /// `week_start + 6`.
    pub week_end: Date,
    /// First day of the row's month.
    pub month_start: Date,
    /// Last day of the row's month.
    pub month_end: Date,
}

/// Fiscal-calendar fields, derived from the configured fiscal start month.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FiscalFields {
    /// Fiscal year: the calendar year, minus one when the row's month
    /// precedes the fiscal start month.
    pub fiscal_year: i32,
    /// Fiscal quarter label, `"Q1"`–`"Q4"`.
    pub fiscal_quarter: String,
}

/// One row of the date dimension.
///
/// The spine date and its `YYYYMMDD` key are always present; every other
/// group is populated only when its toggle is on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DimensionRow {
    /// The spine date.
    pub date: Date,
    /// Integer `YYYYMMDD` key.
    pub date_key: i32,
    /// Midnight-normalized timestamp.
    pub date_ts: Option<NaiveDateTime>,
    /// `"YYYYMMDD"` business key.
    pub date_bk: Option<String>,
    /// 1-based surrogate key (position in the generated table).
    pub date_sk: Option<u32>,
    /// Calendar descriptors.
    pub calendar: Option<CalendarFields>,
    /// Offsets from today.
    pub offsets: Option<OffsetFields>,
    /// Holiday flags and names.
    pub holidays: Option<HolidayFields>,
    /// Boolean day flags.
    pub flags: Option<FlagFields>,
    /// Burnup indicators.
    pub burnups: Option<BurnupFields>,
    /// Week/month bounds.
    pub bounds: Option<BoundFields>,
    /// Fiscal fields.
    pub fiscal: Option<FiscalFields>,
}
