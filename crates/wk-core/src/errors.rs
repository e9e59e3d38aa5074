//! Error types for weekend-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below.  The [`ensure!`] and [`fail!`]
//! macros cover the two common early-return shapes: a rejected argument and
//! an exhausted search.

use thiserror::Error;

/// The top-level error type used throughout weekend-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied value is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No holiday calendar is registered for the country code.
    #[error("unknown country code: {0:?}")]
    UnknownCountry(String),

    /// A search ran through its whole range without a match.
    #[error("not found: {0}")]
    NotFound(String),

    /// The time zone name is not a known IANA zone.
    #[error("unknown time zone: {0:?}")]
    UnknownTimeZone(String),

    /// A date or instant could not be represented.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout weekend-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wk_core::{ensure, errors::Error};
/// fn positive(x: i32) -> wk_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::NotFound(...))` immediately.
///
/// # Example
/// ```
/// use wk_core::{fail, errors::Error};
/// fn first_even(xs: &[i32]) -> wk_core::errors::Result<i32> {
///     for &x in xs {
///         if x % 2 == 0 {
///             return Ok(x);
///         }
///     }
///     fail!("no even number in {xs:?}");
/// }
/// assert_eq!(first_even(&[1, 4]), Ok(4));
/// assert!(matches!(first_even(&[1, 3]), Err(Error::NotFound(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::NotFound(format!($($msg)*)))
    };
}
