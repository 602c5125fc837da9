//! Error types for datedim-rs.
//!
//! All fallible operations in the workspace return the single [`Error`] enum
//! defined here. Range and configuration problems are raised before any row
//! of a dimension table is produced; once a date spine and its holiday maps
//! are valid, per-row field derivation is total and cannot fail.

use thiserror::Error;

/// The top-level error type used throughout datedim-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested date range is empty or not representable.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A configuration value is out of bounds or malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// The public-holiday provider failed to produce its lookup.
    #[error("public holiday provider error: {0}")]
    Provider(String),
}

/// Shorthand `Result` type used throughout datedim-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a configuration precondition.
///
/// Returns `Err(Error::InvalidConfig(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dd_core::{ensure, Result};
/// fn fiscal_month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), "fiscal month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(fiscal_month(4).is_ok());
/// assert!(fiscal_month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidConfig(
                format!($($msg)*)
            ));
        }
    };
}

/// Validate a date-range precondition.
///
/// Returns `Err(Error::InvalidRange(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dd_core::{ensure_range, Result};
/// fn ordered(start: i32, end: i32) -> Result<()> {
///     ensure_range!(start <= end, "end {end} precedes start {start}");
///     Ok(())
/// }
/// assert!(ordered(1, 2).is_ok());
/// assert!(ordered(2, 1).is_err());
/// ```
#[macro_export]
macro_rules! ensure_range {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidRange(
                format!($($msg)*)
            ));
        }
    };
}
