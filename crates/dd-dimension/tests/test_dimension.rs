//! Integration tests for dimension generation: spine invariants, field
//! derivation against a pinned "today", holiday/business-day interplay,
//! fiscal wraparound, and the toggle surface.

use dd_dimension::{DateDimension, DateDimensionBuilder, FieldToggles};
use dd_time::{holiday_map_from_ymd, Date};

use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn build(start: Date, end: Date, today: Date) -> DateDimension {
    DateDimensionBuilder::new(start, end)
        .with_today(today)
        .build()
        .unwrap()
}

#[test]
fn spine_covers_range_inclusively() {
    let dim = build(date(2024, 1, 1), date(2025, 12, 31), date(2024, 6, 15));
    assert_eq!(dim.len(), 366 + 365);
    assert_eq!(dim.start_date(), Some(date(2024, 1, 1)));
    assert_eq!(dim.end_date(), Some(date(2025, 12, 31)));
    assert!(!dim.is_empty());

    for pair in dim.rows().windows(2) {
        assert_eq!(pair[1].date - pair[0].date, 1);
    }
    // Surrogate keys number the rows 1..=n.
    assert_eq!(dim[0].date_sk, Some(1));
    assert_eq!(dim[dim.len() - 1].date_sk, Some(dim.len() as u32));
}

#[test]
fn single_day_range() {
    let d = date(2024, 6, 15); // Saturday
    let dim = build(d, d, d);
    assert_eq!(dim.len(), 1);

    let row = &dim[0];
    let bounds = row.bounds.as_ref().unwrap();
    assert_eq!(bounds.week_start, date(2024, 6, 10));
    assert_eq!(bounds.week_end, date(2024, 6, 16));
    assert_eq!(bounds.month_start, date(2024, 6, 1));
    assert_eq!(bounds.month_end, date(2024, 6, 30));
    assert!(row.flags.as_ref().unwrap().today_flag);
}

#[test]
fn identity_fields() {
    let dim = build(date(2024, 6, 12), date(2024, 6, 12), date(2024, 6, 12));
    let row = &dim[0];
    assert_eq!(row.date_key, 20240612);
    assert_eq!(row.date_bk.as_deref(), Some("20240612"));
    assert_eq!(row.date_sk, Some(1));
    let ts = row.date_ts.unwrap();
    assert_eq!(ts.date(), date(2024, 6, 12).to_naive());
    assert_eq!(ts.time(), chrono::NaiveTime::MIN);
}

#[test]
fn calendar_descriptors() {
    let dim = build(date(2024, 6, 12), date(2024, 6, 12), date(2024, 6, 12));
    let cal = dim[0].calendar.as_ref().unwrap();
    assert_eq!(cal.iso_date_name, "2024-06-12");
    assert_eq!(cal.american_date_name, "06/12/2024");
    assert_eq!(cal.day_of_week_name, "Wednesday");
    assert_eq!(cal.day_of_week_abbrev, "Wed");
    assert_eq!(cal.month_name, "June");
    assert_eq!(cal.month_abbrev, "Jun");
    assert_eq!(cal.year, 2024);
    assert_eq!(cal.quarter, "Q2");
    assert_eq!(cal.month, 6);
    assert_eq!(cal.day, 12);
    assert_eq!(cal.week_number, "W24");
    assert_eq!(cal.year_month, 202406);
    assert_eq!(cal.year_quarter, 20242);
}

#[test]
fn offsets_from_pinned_today() {
    let today = date(2024, 6, 15);
    let dim = build(date(2023, 12, 31), date(2024, 6, 16), today);

    let past = dim.rows().iter().find(|r| r.date == date(2023, 12, 31)).unwrap();
    let off = past.offsets.as_ref().unwrap();
    assert_eq!(off.day_offset, -167);
    assert_eq!(off.month_offset, -6);
    assert_eq!(off.quarter_offset, -2);
    assert_eq!(off.year_offset, -1);

    let near = dim.rows().iter().find(|r| r.date == date(2024, 5, 31)).unwrap();
    let off = near.offsets.as_ref().unwrap();
    assert_eq!(off.day_offset, -15);
    assert_eq!(off.month_offset, -1);
    assert_eq!(off.quarter_offset, 0);
    assert_eq!(off.year_offset, 0);

    let next = dim.rows().iter().find(|r| r.date == date(2024, 6, 16)).unwrap();
    assert_eq!(next.offsets.as_ref().unwrap().day_offset, 1);
}

#[test]
fn burnups_against_midweek_today() {
    // Wednesday, June 12: day-of-week 3, day-of-month 12, day-of-year 164.
    let today = date(2024, 6, 12);
    let dim = build(date(2024, 6, 10), date(2024, 6, 13), today);

    let monday = dim[0].burnups.as_ref().unwrap();
    assert_eq!(monday.day_of_week, 1);
    assert_eq!(monday.day_of_week_starting_monday, 1);
    assert_eq!(monday.weekly_burnup, 1);
    assert_eq!(monday.weekly_burnup_starting_monday, 1);
    assert_eq!(monday.monthly_burnup, 1);
    assert_eq!(monday.quarterly_burnup, 1);
    assert_eq!(monday.yearly_burnup, 1);

    let wednesday = dim[2].burnups.as_ref().unwrap();
    assert_eq!(wednesday.day_of_year, 164);
    assert_eq!(wednesday.day_of_quarter, 164 % 90);
    assert_eq!(wednesday.weekly_burnup, 1);
    assert_eq!(wednesday.monthly_burnup, 1);
    assert_eq!(wednesday.yearly_burnup, 1);

    let thursday = dim[3].burnups.as_ref().unwrap();
    assert_eq!(thursday.weekly_burnup, 0);
    assert_eq!(thursday.monthly_burnup, 0);
    assert_eq!(thursday.quarterly_burnup, 0);
    assert_eq!(thursday.yearly_burnup, 0);
}

#[test]
fn business_day_ignores_public_holidays() {
    // July 4, 2024 is a Thursday: a US public holiday but not a company
    // holiday, so it stays a business day.
    let dim = build(date(2024, 7, 1), date(2024, 7, 7), date(2024, 7, 1));
    let fourth = &dim[3];
    let holidays = fourth.holidays.as_ref().unwrap();
    assert!(holidays.public_holiday_flag);
    assert_eq!(holidays.public_holiday_name, "Independence Day");
    assert!(!holidays.company_holiday_flag);

    let flags = fourth.flags.as_ref().unwrap();
    assert!(flags.weekday_flag);
    assert!(flags.business_day_flag);
}

#[test]
fn business_day_suppressed_by_company_holiday() {
    // Memorial Day 2024 (May 27, Monday) is in the dynamic company set.
    let dim = build(date(2024, 5, 25), date(2024, 5, 28), date(2024, 5, 25));
    let memorial = &dim[2];
    let holidays = memorial.holidays.as_ref().unwrap();
    assert!(holidays.company_holiday_flag);
    assert_eq!(holidays.company_holiday_name, "Memorial Day");

    let flags = memorial.flags.as_ref().unwrap();
    assert!(flags.weekday_flag);
    assert!(!flags.business_day_flag);

    // The Saturday is a non-business day by weekend, not by holiday.
    let saturday = dim[0].flags.as_ref().unwrap();
    assert!(!saturday.weekday_flag);
    assert!(!saturday.business_day_flag);
}

#[test]
fn business_day_rule_holds_everywhere() {
    let dim = build(date(2024, 1, 1), date(2024, 12, 31), date(2024, 6, 15));
    for row in &dim {
        let flags = row.flags.as_ref().unwrap();
        let holidays = row.holidays.as_ref().unwrap();
        assert_eq!(
            flags.business_day_flag,
            flags.weekday_flag && !holidays.company_holiday_flag,
            "{}",
            row.date
        );
    }
}

#[test]
fn flags_consult_company_holidays_even_when_holiday_group_is_off() {
    let toggles = FieldToggles::none().with_flags(true).with_dynamic_holidays(true);
    let dim = DateDimensionBuilder::new(date(2024, 5, 27), date(2024, 5, 28))
        .with_today(date(2024, 5, 27))
        .with_toggles(toggles)
        .build()
        .unwrap();

    assert!(dim[0].holidays.is_none());
    // Memorial Day still suppresses the business-day flag.
    assert!(!dim[0].flags.as_ref().unwrap().business_day_flag);
    assert!(dim[1].flags.as_ref().unwrap().business_day_flag);
}

#[test]
fn fiscal_wraparound_april_start() {
    let dim = DateDimensionBuilder::new(date(2024, 3, 30), date(2024, 4, 2))
        .with_today(date(2024, 4, 1))
        .with_fiscal_year_start(4)
        .build()
        .unwrap();

    let march = dim.rows().iter().find(|r| r.date == date(2024, 3, 31)).unwrap();
    let fiscal = march.fiscal.as_ref().unwrap();
    assert_eq!(fiscal.fiscal_year, 2023);
    assert_eq!(fiscal.fiscal_quarter, "Q4");

    let april = dim.rows().iter().find(|r| r.date == date(2024, 4, 1)).unwrap();
    let fiscal = april.fiscal.as_ref().unwrap();
    assert_eq!(fiscal.fiscal_year, 2024);
    assert_eq!(fiscal.fiscal_quarter, "Q1");
}

#[test]
fn company_override_keeps_dynamic_merge() {
    let custom = holiday_map_from_ymd([
        ((2024, 3, 14), "Company Pi Day"),
        ((2024, 8, 1), "Founding Day"),
    ])
    .unwrap();

    let dim = DateDimensionBuilder::new(date(2024, 1, 1), date(2024, 12, 31))
        .with_today(date(2024, 6, 15))
        .with_company_holidays(custom)
        .build()
        .unwrap();

    let by_date = |d: Date| {
        dim.rows()
            .iter()
            .find(|r| r.date == d)
            .unwrap()
            .holidays
            .as_ref()
            .unwrap()
            .clone()
    };

    // The override replaced the built-in fixed set wholesale...
    assert!(!by_date(date(2024, 2, 14)).company_holiday_flag);
    assert!(!by_date(date(2024, 10, 31)).company_holiday_flag);
    // ...its own entries are live...
    assert_eq!(by_date(date(2024, 3, 14)).company_holiday_name, "Company Pi Day");
    assert_eq!(by_date(date(2024, 8, 1)).company_holiday_name, "Founding Day");
    // ...and the dynamic holidays still merged on top.
    assert_eq!(by_date(date(2024, 11, 29)).company_holiday_name, "Black Friday");
    assert_eq!(by_date(date(2024, 3, 31)).company_holiday_name, "Easter");
}

#[test]
fn identical_inputs_identical_output() {
    let make = || {
        DateDimensionBuilder::new(date(2024, 1, 1), date(2024, 3, 31))
            .with_today(date(2024, 2, 15))
            .with_fiscal_year_start(7)
            .build()
            .unwrap()
    };
    assert_eq!(make(), make());
}

#[test]
fn disabled_groups_are_absent() {
    let dim = DateDimensionBuilder::new(date(2024, 1, 1), date(2024, 1, 3))
        .with_today(date(2024, 1, 1))
        .with_toggles(FieldToggles::none())
        .build()
        .unwrap();

    let row = &dim[0];
    // Spine and key are unconditional.
    assert_eq!(row.date, date(2024, 1, 1));
    assert_eq!(row.date_key, 20240101);
    assert!(row.date_ts.is_none());
    assert!(row.date_bk.is_none());
    assert!(row.date_sk.is_none());
    assert!(row.calendar.is_none());
    assert!(row.offsets.is_none());
    assert!(row.holidays.is_none());
    assert!(row.flags.is_none());
    assert!(row.burnups.is_none());
    assert!(row.bounds.is_none());
    assert!(row.fiscal.is_none());
}

#[test]
fn dynamic_toggle_off_keeps_fixed_set_only() {
    let toggles = FieldToggles::default().with_dynamic_holidays(false);
    let dim = DateDimensionBuilder::new(date(2024, 11, 28), date(2024, 11, 29))
        .with_today(date(2024, 11, 28))
        .with_toggles(toggles)
        .build()
        .unwrap();
    // No Black Friday without the dynamic set.
    assert!(!dim[1].holidays.as_ref().unwrap().company_holiday_flag);
    assert!(dim[1].flags.as_ref().unwrap().business_day_flag);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_row_count_matches_inclusive_days(
        start_serial in 40_000i32..=80_000,
        len in 0i32..1200,
    ) {
        let start = Date::from_serial(start_serial).unwrap();
        let end = Date::from_serial(start_serial + len).unwrap();
        let dim = DateDimensionBuilder::new(start, end)
            .with_today(start)
            .with_toggles(FieldToggles::none().with_date_sk(true))
            .build()
            .unwrap();

        prop_assert_eq!(dim.len() as i32, len + 1);
        prop_assert!(dim.rows().windows(2).all(|w| w[1].date - w[0].date == 1));
        prop_assert_eq!(dim[dim.len() - 1].date_sk, Some((len + 1) as u32));
    }
}
