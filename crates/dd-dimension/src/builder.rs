//! `DateDimensionBuilder` — assembles the date-dimension table.
//!
//! Generation is a stateless single pass: validate the configuration,
//! resolve "today" exactly once, build the holiday maps once, then derive
//! every enabled field group for each date of the inclusive spine. Nothing
//! is cached across calls and per-row derivation cannot fail once the
//! inputs have been validated.

use dd_core::{ensure, ensure_range, Error, Result, Settings};
use dd_time::{company_holidays, Date, HolidayMap, PublicHolidayProvider, UsFederalCalendar};

use crate::row::{
    BoundFields, BurnupFields, CalendarFields, DimensionRow, FiscalFields, FlagFields,
    HolidayFields, OffsetFields,
};
use crate::toggles::FieldToggles;

/// The finished date-dimension artifact: one row per calendar day of the
/// requested range, strictly ascending, no gaps or duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateDimension {
    rows: Vec<DimensionRow>,
    today: Date,
}

impl DateDimension {
    /// All rows, in date order.
    pub fn rows(&self) -> &[DimensionRow] {
        &self.rows
    }

    /// Number of rows (the inclusive day count of the range).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return `true` if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return the `i`-th row.
    pub fn get(&self, i: usize) -> Option<&DimensionRow> {
        self.rows.get(i)
    }

    /// First spine date.
    pub fn start_date(&self) -> Option<Date> {
        self.rows.first().map(|r| r.date)
    }

    /// Last spine date.
    pub fn end_date(&self) -> Option<Date> {
        self.rows.last().map(|r| r.date)
    }

    /// The "today" snapshot every offset, flag, and burnup was derived from.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Iterate the rows in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, DimensionRow> {
        self.rows.iter()
    }
}

impl std::ops::Index<usize> for DateDimension {
    type Output = DimensionRow;

    fn index(&self, i: usize) -> &DimensionRow {
        &self.rows[i]
    }
}

impl<'a> IntoIterator for &'a DateDimension {
    type Item = &'a DimensionRow;
    type IntoIter = std::slice::Iter<'a, DimensionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Builder for [`DateDimension`].
///
/// ```
/// use dd_dimension::DateDimensionBuilder;
/// use dd_time::Date;
///
/// let dim = DateDimensionBuilder::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 1, 31).unwrap(),
/// )
/// .with_today(Date::from_ymd(2024, 1, 15).unwrap())
/// .build()
/// .unwrap();
/// assert_eq!(dim.len(), 31);
/// ```
#[derive(Debug)]
pub struct DateDimensionBuilder<'a> {
    start: Date,
    end: Date,
    fiscal_year_start: u8,
    today: Option<Date>,
    toggles: FieldToggles,
    company_override: Option<HolidayMap>,
    provider: &'a dyn PublicHolidayProvider,
}

impl<'a> DateDimensionBuilder<'a> {
    /// Begin building a dimension over the inclusive range `[start, end]`.
    ///
    /// Defaults: fiscal year starts in January, all field groups enabled,
    /// built-in company holidays, US federal public holidays, "today"
    /// resolved from [`Settings`] or the system clock at build time.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            fiscal_year_start: 1,
            today: None,
            toggles: FieldToggles::default(),
            company_override: None,
            provider: &UsFederalCalendar,
        }
    }

    /// Set the fiscal-year start month (1–12; validated at build time).
    pub fn with_fiscal_year_start(mut self, month: u8) -> Self {
        self.fiscal_year_start = month;
        self
    }

    /// Pin the "today" reference date instead of consulting [`Settings`] or
    /// the system clock.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Set the field-group toggles.
    pub fn with_toggles(mut self, toggles: FieldToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Replace the built-in fixed company holidays with a caller-supplied
    /// map. Dynamic holidays, when enabled, are still merged on top of it.
    pub fn with_company_holidays(mut self, map: HolidayMap) -> Self {
        self.company_override = Some(map);
        self
    }

    /// Use a different public-holiday provider.
    pub fn with_public_holidays(mut self, provider: &'a dyn PublicHolidayProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Build the dimension.
    ///
    /// Fails fast — before any row is produced — on an inverted range, a
    /// fiscal start month outside 1–12, or a provider error.
    pub fn build(self) -> Result<DateDimension> {
        let DateDimensionBuilder {
            start,
            end,
            fiscal_year_start,
            today,
            toggles,
            company_override,
            provider,
        } = self;

        ensure_range!(start <= end, "end date {end} precedes start date {start}");
        ensure!(
            (1..=12).contains(&fiscal_year_start),
            "fiscal year start month {fiscal_year_start} out of range [1, 12]"
        );

        let today = resolve_today(today)?;
        let years = start.year()..=end.year();

        // Business-day flags consult the company map, so it is built whenever
        // either the holiday or the flag group is on.
        let company = if toggles.holidays || toggles.flags {
            company_holidays(years.clone(), company_override, toggles.dynamic_holidays)?
        } else {
            HolidayMap::new()
        };
        let public = if toggles.holidays {
            provider.holidays(years).map_err(|e| match e {
                Error::Provider(_) => e,
                other => Error::Provider(other.to_string()),
            })?
        } else {
            HolidayMap::new()
        };

        let ctx = RowContext {
            today,
            fiscal_year_start,
            toggles,
            company: &company,
            public: &public,
        };

        let mut rows = Vec::with_capacity((end - start) as usize + 1);
        for (position, date) in Date::range_inclusive(start, end).enumerate() {
            rows.push(make_row(date, position as u32, &ctx));
        }
        Ok(DateDimension { rows, today })
    }
}

/// Shared read-only inputs for per-row derivation.
struct RowContext<'m> {
    today: Date,
    fiscal_year_start: u8,
    toggles: FieldToggles,
    company: &'m HolidayMap,
    public: &'m HolidayMap,
}

/// Resolve the "today" snapshot: explicit builder value, then the pinned
/// [`Settings`] evaluation date, then the system clock.
fn resolve_today(explicit: Option<Date>) -> Result<Date> {
    if let Some(t) = explicit {
        return Ok(t);
    }
    if let Some(serial) = Settings::instance().evaluation_date_serial() {
        return Date::from_serial(serial);
    }
    Date::today()
}

fn make_row(date: Date, position: u32, ctx: &RowContext) -> DimensionRow {
    let t = ctx.toggles;
    let company_holiday = ctx.company.contains_key(&date);
    DimensionRow {
        date,
        date_key: date.date_key(),
        date_ts: t.date_ts.then(|| date.to_naive_datetime()),
        date_bk: t.date_bk.then(|| date.business_key()),
        date_sk: t.date_sk.then_some(position + 1),
        calendar: t.calendar_fields.then(|| calendar_fields(date)),
        offsets: t.offsets.then(|| offset_fields(date, ctx.today)),
        holidays: t
            .holidays
            .then(|| holiday_fields(date, ctx.company, ctx.public)),
        flags: t.flags.then(|| flag_fields(date, ctx.today, company_holiday)),
        burnups: t.burnups.then(|| burnup_fields(date, ctx.today)),
        bounds: t.week_month_bounds.then(|| bound_fields(date)),
        fiscal: t
            .fiscal_fields
            .then(|| fiscal_fields(date, ctx.fiscal_year_start)),
    }
}

fn calendar_fields(date: Date) -> CalendarFields {
    let weekday = date.weekday();
    let month = date.month_of_year();
    CalendarFields {
        iso_date_name: date.iso_name(),
        american_date_name: date.american_name(),
        day_of_week_name: weekday.long_name(),
        day_of_week_abbrev: weekday.short_name(),
        month_name: month.long_name(),
        month_abbrev: month.short_name(),
        year: date.year(),
        quarter: format!("Q{}", date.quarter()),
        month: date.month(),
        day: date.day_of_month(),
        week_number: format!("W{}", date.iso_week()),
        year_month: date.year_month(),
        year_quarter: date.year() * 10 + date.quarter() as i32,
    }
}

fn offset_fields(date: Date, today: Date) -> OffsetFields {
    OffsetFields {
        day_offset: date - today,
        month_offset: (date.year() - today.year()) * 12 + date.month() as i32
            - today.month() as i32,
        quarter_offset: (date.year() - today.year()) * 4 + date.quarter() as i32
            - today.quarter() as i32,
        year_offset: date.year() - today.year(),
    }
}

fn holiday_fields(date: Date, company: &HolidayMap, public: &HolidayMap) -> HolidayFields {
    let public_name = public.get(&date);
    let company_name = company.get(&date);
    HolidayFields {
        public_holiday_flag: public_name.is_some(),
        public_holiday_name: public_name.cloned().unwrap_or_default(),
        company_holiday_flag: company_name.is_some(),
        company_holiday_name: company_name.cloned().unwrap_or_default(),
    }
}

fn flag_fields(date: Date, today: Date, company_holiday: bool) -> FlagFields {
    let weekday_flag = date.weekday().is_weekday();
    FlagFields {
        today_flag: date == today,
        weekday_flag,
        business_day_flag: weekday_flag && !company_holiday,
    }
}

fn burnup_fields(date: Date, today: Date) -> BurnupFields {
    let dow = date.weekday().ordinal();
    let doy = date.day_of_year();
    let day_of_quarter = doy % 90;
    let today_dow = today.weekday().ordinal();
    let today_doy = today.day_of_year();
    BurnupFields {
        day_of_month: date.day_of_month(),
        day_of_year: doy,
        day_of_week_starting_monday: dow,
        day_of_week: dow,
        day_of_quarter,
        weekly_burnup_starting_monday: u8::from(dow <= today_dow),
        weekly_burnup: u8::from(dow <= today_dow),
        monthly_burnup: u8::from(date.day_of_month() <= today.day_of_month()),
        quarterly_burnup: u8::from(day_of_quarter <= today_doy % 90),
        yearly_burnup: u8::from(doy <= today_doy),
    }
}

fn bound_fields(date: Date) -> BoundFields {
    BoundFields {
        week_start: date.week_start(),
        week_end: date.week_end(),
        month_start: date.start_of_month(),
        month_end: date.end_of_month(),
    }
}

fn fiscal_fields(date: Date, start_month: u8) -> FiscalFields {
    let fiscal_year = if date.month() >= start_month {
        date.year()
    } else {
        date.year() - 1
    };
    let quarter = (date.month() as i32 - start_month as i32).rem_euclid(12) / 3 + 1;
    FiscalFields {
        fiscal_year,
        fiscal_quarter: format!("Q{quarter}"),
    }
}
