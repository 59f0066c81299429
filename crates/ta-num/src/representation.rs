//! Concrete numeric representations.
//!
//! A [`Representation`] is the defined-value half of a family: it knows
//! how to compute but not how to be undefined. Undefined outcomes are
//! reported as `None` (or, for native floats, by [`is_undefined`]) and the
//! generic [`Number`](crate::number::Number) wrapper turns them into the
//! NaN sentinel.
//!
//! [`is_undefined`]: Representation::is_undefined

use std::cmp::Ordering;
use std::fmt;

use ta_core::Result;

use crate::num::Primitive;

/// The arithmetic core of one numeric family.
pub trait Representation: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Family name, e.g. `"DoubleNum"`.
    const NAME: &'static str;

    /// Build a value with the family's default settings.
    ///
    /// # Errors
    /// `Error::InvalidLiteral` for a floating NaN.
    fn from_primitive(value: Primitive) -> Result<Self>;

    /// Build a value with the same settings (precision) as `self`.
    ///
    /// # Errors
    /// `Error::InvalidLiteral` for a floating NaN.
    fn from_primitive_like(&self, value: Primitive) -> Result<Self>;

    /// Parse a literal; `precision`, when given, fixes the significant
    /// digits kept.
    ///
    /// # Errors
    /// `Error::Parse` for malformed text.
    fn parse(literal: &str, precision: Option<u32>) -> Result<Self>;

    /// `true` if the value stands for an undefined result.
    fn is_undefined(&self) -> bool {
        false
    }

    /// Sum.
    fn add(&self, other: &Self) -> Self;
    /// Difference.
    fn sub(&self, other: &Self) -> Self;
    /// Product, `None` when it cannot be represented.
    fn mul(&self, other: &Self) -> Option<Self>;
    /// Quotient, `None` for a zero divisor.
    fn div(&self, other: &Self) -> Option<Self>;
    /// Truncated remainder, `None` for a zero divisor.
    fn rem(&self, other: &Self) -> Option<Self>;

    /// Round towards negative infinity.
    fn floor(&self) -> Self;
    /// Round towards positive infinity.
    fn ceil(&self) -> Self;
    /// Absolute value.
    fn abs(&self) -> Self;
    /// Negation.
    fn neg(&self) -> Self;

    /// Integral power, `None` when undefined.
    fn powi(&self, n: i32) -> Option<Self>;

    /// Real power, `None` when undefined.
    ///
    /// # Errors
    /// `Error::ExponentOverflow` when the exponent cannot be split.
    fn pow_num(&self, exponent: &Self) -> Result<Option<Self>>;

    /// Natural logarithm, `None` for a non-positive operand.
    fn ln(&self) -> Option<Self>;

    /// Square root, `None` for a negative operand.
    fn sqrt(&self, precision: Option<u32>) -> Option<Self>;

    /// Exponential function.
    fn exp(&self) -> Self;

    /// Sign compared with zero.
    fn signum(&self) -> Ordering;

    /// Exact total ordering.
    fn cmp_exact(&self, other: &Self) -> Ordering;

    /// Family equality (may be tolerant).
    fn tolerant_eq(&self, other: &Self) -> bool;

    /// Nearest `f64`.
    fn to_f64(&self) -> f64;
    /// Nearest `f32`.
    fn to_f32(&self) -> f32;
    /// Integral part, saturated.
    fn to_i64(&self) -> i64;
    /// Integral part, saturated.
    fn to_i32(&self) -> i32;
}
