//! Error types for shukujitsu-rs.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace. The [`ensure!`](crate::ensure) macro turns a failed
//! precondition into an early `Err` return.

use thiserror::Error;

/// The top-level error type used throughout shukujitsu-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out-of-range year, month or day, or date
    /// arithmetic leaving the supported range).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout shukujitsu-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sj_core::{ensure, errors::Error};
/// fn week(n: u8) -> sj_core::errors::Result<u8> {
///     ensure!((1..=5).contains(&n), "week of month must be in [1, 5], got {n}");
///     Ok(n)
/// }
/// assert!(week(2).is_ok());
/// assert_eq!(
///     week(0),
///     Err(Error::Precondition("week of month must be in [1, 5], got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
