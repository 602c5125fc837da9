//! Concrete holiday calendars.

/// Company holiday sets: built-in fixed dates plus derived floating dates.
pub mod company;

/// United States federal public holidays.
pub mod us_federal;

pub use company::{company_holidays, default_company_holidays, dynamic_company_holidays};
pub use us_federal::UsFederalCalendar;
