//! # datedim
//!
//! Date-dimension table generation for analytics reference data: one row per
//! calendar day over a requested range, enriched with calendar descriptors,
//! offsets from "today", public and company holiday flags, business-day
//! logic, burnup indicators, period bounds, and fiscal fields.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `dd-*` members.
//!
//! ## Quick start
//!
//! ```rust
//! use datedim::dimension::DateDimensionBuilder;
//! use datedim::time::Date;
//!
//! let dim = DateDimensionBuilder::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 12, 31).unwrap(),
//! )
//! .with_today(Date::from_ymd(2024, 6, 15).unwrap())
//! .with_fiscal_year_start(4)
//! .build()
//! .unwrap();
//!
//! assert_eq!(dim.len(), 366);
//! let idx = (Date::from_ymd(2024, 5, 27).unwrap()
//!     - Date::from_ymd(2024, 1, 1).unwrap()) as usize;
//! assert!(!dim[idx].flags.as_ref().unwrap().business_day_flag); // Memorial Day
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, validation macros, and settings.
pub use dd_core as core;

/// Date type, floating-holiday arithmetic, and holiday calendars.
pub use dd_time as time;

/// Dimension row model and builder.
pub use dd_dimension as dimension;
