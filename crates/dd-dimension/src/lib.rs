//! # dd-dimension
//!
//! Date-dimension row model and builder: one row per calendar day over a
//! requested range, with togglable calendar, offset, holiday, flag, burnup,
//! bound, and fiscal field groups.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `DateDimensionBuilder` and the `DateDimension` artifact.
pub mod builder;

/// Dimension row and field-group structs.
pub mod row;

/// Field-group toggles.
pub mod toggles;

pub use builder::{DateDimension, DateDimensionBuilder};
pub use row::{
    BoundFields, BurnupFields, CalendarFields, DimensionRow, FiscalFields, FlagFields,
    HolidayFields, OffsetFields,
};
pub use toggles::FieldToggles;
