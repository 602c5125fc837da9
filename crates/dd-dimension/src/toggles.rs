//! Field-group toggles.

/// Selects which field groups the builder populates.
///
/// Each group is independent; [`FieldToggles::default`] enables everything.
/// Note that business-day derivation consults the company holiday map even
/// when the `holidays` output group itself is switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldToggles {
    /// Calendar descriptors (names, week/quarter numbers).
    pub calendar_fields: bool,
    /// Signed day/month/quarter/year offsets from today.
    pub offsets: bool,
    /// Public and company holiday flags and names.
    pub holidays: bool,
    /// Merge the derived floating holidays into the company set.
    pub dynamic_holidays: bool,
    /// Today/weekday/business-day flags.
    pub flags: bool,
    /// Period-progress (burnup) indicators.
    pub burnups: bool,
    /// Fiscal year and fiscal quarter.
    pub fiscal_fields: bool,
    /// Midnight-normalized timestamp.
    pub date_ts: bool,
    /// `"YYYYMMDD"` business key.
    pub date_bk: bool,
    /// 1-based surrogate key.
    pub date_sk: bool,
    /// Week and month start/end dates.
    pub week_month_bounds: bool,
}

impl Default for FieldToggles {
    fn default() -> Self {
        Self {
            calendar_fields: true,
            offsets: true,
            holidays: true,
            dynamic_holidays: true,
            flags: true,
            burnups: true,
            fiscal_fields: true,
            date_ts: true,
            date_bk: true,
            date_sk: true,
            week_month_bounds: true,
        }
    }
}

impl FieldToggles {
    /// All field groups enabled.
    pub fn all() -> Self {
        Self::default()
    }

    /// No field groups enabled; combine with the `with_*` methods to opt
    /// into the groups a consumer needs.
    pub fn none() -> Self {
        Self {
            calendar_fields: false,
            offsets: false,
            holidays: false,
            dynamic_holidays: false,
            flags: false,
            burnups: false,
            fiscal_fields: false,
            date_ts: false,
            date_bk: false,
            date_sk: false,
            week_month_bounds: false,
        }
    }

    /// Set the calendar-descriptor group.
    pub fn with_calendar_fields(mut self, on: bool) -> Self {
        self.calendar_fields = on;
        self
    }

    /// Set the offsets-from-today group.
    pub fn with_offsets(mut self, on: bool) -> Self {
        self.offsets = on;
        self
    }

    /// Set the holiday flags/names group.
    pub fn with_holidays(mut self, on: bool) -> Self {
        self.holidays = on;
        self
    }

    /// Set whether derived floating holidays join the company set.
    pub fn with_dynamic_holidays(mut self, on: bool) -> Self {
        self.dynamic_holidays = on;
        self
    }

    /// Set the boolean-flags group.
    pub fn with_flags(mut self, on: bool) -> Self {
        self.flags = on;
        self
    }

    /// Set the burnup-indicator group.
    pub fn with_burnups(mut self, on: bool) -> Self {
        self.burnups = on;
        self
    }

    /// Set the fiscal-fields group.
    pub fn with_fiscal_fields(mut self, on: bool) -> Self {
        self.fiscal_fields = on;
        self
    }

    /// Set the normalized-timestamp field.
    pub fn with_date_ts(mut self, on: bool) -> Self {
        self.date_ts = on;
        self
    }

    /// Set the business-key field.
    pub fn with_date_bk(mut self, on: bool) -> Self {
        self.date_bk = on;
        self
    }

    /// Set the surrogate-key field.
    pub fn with_date_sk(mut self, on: bool) -> Self {
        self.date_sk = on;
        self
    }

    /// Set the week/month-bounds group.
    pub fn with_week_month_bounds(mut self, on: bool) -> Self {
        self.week_month_bounds = on;
        self
    }
}
