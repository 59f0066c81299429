//! Error types for ta4rs.
//!
//! The numeric kernel is mostly total: undefined results become the NaN
//! sentinel instead of an error. What remains are construction failures
//! (bad literals), conversions that have no answer (NaN to an integer) and
//! caller bugs (mixing representation families). They all live in one
//! `thiserror`-derived enum, with the `ensure!` macro for precondition
//! checks.

use thiserror::Error;

/// The top-level error type used throughout ta4rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by [`ensure!`]).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A binary operation received operands from two different
    /// representation families.
    #[error("representation mismatch in `{op}`: {left} and {right} cannot be combined")]
    RepresentationMismatch {
        /// Name of the operation that was attempted.
        op: &'static str,
        /// Family name of the left operand.
        left: &'static str,
        /// Family name of the right operand.
        right: &'static str,
    },

    /// A numeric factory was handed a literal that must not become a number
    /// (the text `"NaN"`, or a floating-point NaN).
    #[error("invalid numeric literal: {0}")]
    InvalidLiteral(String),

    /// Text that is not a decimal number.
    #[error("cannot parse `{0}` as a number")]
    Parse(String),

    /// NaN was asked for an integral value.
    #[error("no integral representation of NaN")]
    NoIntegralRepresentation,

    /// The integral part of an exponent does not fit a machine integer.
    #[error("exponent overflow: integral part of {0} does not fit in i32")]
    ExponentOverflow(String),
}

/// Shorthand `Result` type used throughout ta4rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Error::Precondition` if the condition does not hold.
///
/// # Example
/// ```
/// use ta_core::{ensure, errors::Error};
/// fn positive(precision: u32) -> ta_core::errors::Result<u32> {
///     ensure!(precision > 0, "precision must be positive, got {precision}");
///     Ok(precision)
/// }
/// assert!(positive(32).is_ok());
/// assert_eq!(
///     positive(0),
///     Err(Error::Precondition("precision must be positive, got 0".into()))
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
