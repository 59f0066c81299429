//! `Number<R>`: a representation or the NaN sentinel.
//!
//! This is where NaN contagion lives. Every operation unwraps the defined
//! operands, lets the representation compute, and maps undefined outcomes
//! back to [`Number::NaN`]. Both operands of a binary operation share `R`,
//! so combining two families does not compile:
//!
//! ```compile_fail
//! use ta_num::{DecimalNum, DoubleNum, Num};
//!
//! let a = DoubleNum::from(1);
//! let b = DecimalNum::from(1);
//! let _ = a.plus(&b);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use ta_core::{Error, Result};

use crate::big_decimal::BigDecimal;
use crate::decimal::Decimal;
use crate::double::Double;
use crate::math_context::MathContext;
use crate::nan::NaN;
use crate::num::{Num, Primitive};
use crate::representation::Representation;

/// A value of family `R`, or NaN.
#[derive(Debug, Clone)]
pub enum Number<R> {
    /// A defined value.
    Value(R),
    /// The undefined value.
    NaN,
}

/// The double-backed fast path.
pub type DoubleNum = Number<Double>;

/// The arbitrary-precision family.
pub type DecimalNum = Number<Decimal>;

impl<R: Representation> Number<R> {
    /// Wrap a representation, turning undefined values into NaN.
    pub fn from_repr(repr: R) -> Self {
        if repr.is_undefined() {
            Number::NaN
        } else {
            Number::Value(repr)
        }
    }

    /// The representation, `None` for NaN.
    pub fn value(&self) -> Option<&R> {
        match self {
            Number::Value(r) => Some(r),
            Number::NaN => None,
        }
    }

    /// Consume into the representation, `None` for NaN.
    pub fn into_value(self) -> Option<R> {
        match self {
            Number::Value(r) => Some(r),
            Number::NaN => None,
        }
    }

    /// Parse a literal with the family's default settings.
    ///
    /// # Errors
    /// `Error::InvalidLiteral` for `"NaN"` in any case, `Error::Parse` for
    /// other malformed text.
    pub fn parse(literal: &str, precision: Option<u32>) -> Result<Self> {
        if literal.trim().eq_ignore_ascii_case(NaN::NAME) {
            return Err(Error::InvalidLiteral(literal.to_string()));
        }
        R::parse(literal, precision).map(Self::from_repr)
    }

    fn unary(&self, op: impl FnOnce(&R) -> Option<R>) -> Self {
        match self {
            Number::Value(r) => op(r).map_or(Number::NaN, Self::from_repr),
            Number::NaN => Number::NaN,
        }
    }

    fn binary(&self, other: &Self, op: impl FnOnce(&R, &R) -> Option<R>) -> Self {
        match (self, other) {
            (Number::Value(a), Number::Value(b)) => op(a, b).map_or(Number::NaN, Self::from_repr),
            _ => Number::NaN,
        }
    }

    fn constant(&self, value: i64) -> Self {
        match self {
            Number::Value(r) => r
                .from_primitive_like(Primitive::Integer(value))
                .map_or(Number::NaN, Self::from_repr),
            Number::NaN => Number::NaN,
        }
    }
}

impl<R: Representation> Num for Number<R> {
    fn name(&self) -> &'static str {
        match self {
            Number::Value(_) => R::NAME,
            Number::NaN => NaN::NAME,
        }
    }

    fn plus(&self, augend: &Self) -> Self {
        self.binary(augend, |a, b| Some(a.add(b)))
    }

    fn minus(&self, subtrahend: &Self) -> Self {
        self.binary(subtrahend, |a, b| Some(a.sub(b)))
    }

    fn multiplied_by(&self, multiplicand: &Self) -> Self {
        self.binary(multiplicand, R::mul)
    }

    fn divided_by(&self, divisor: &Self) -> Self {
        self.binary(divisor, R::div)
    }

    fn remainder(&self, divisor: &Self) -> Self {
        self.binary(divisor, R::rem)
    }

    fn floor(&self) -> Self {
        self.unary(|r| Some(r.floor()))
    }

    fn ceil(&self) -> Self {
        self.unary(|r| Some(r.ceil()))
    }

    fn pow(&self, n: i32) -> Self {
        self.unary(|r| r.powi(n))
    }

    fn pow_num(&self, n: &Self) -> Self {
        self.binary(n, |a, b| a.pow_num(b).unwrap_or_else(|e| panic!("{e}")))
    }

    fn log(&self) -> Self {
        self.unary(R::ln)
    }

    fn sqrt(&self) -> Self {
        self.unary(|r| r.sqrt(None))
    }

    fn sqrt_with_precision(&self, precision: u32) -> Self {
        self.unary(|r| r.sqrt(Some(precision)))
    }

    fn exp(&self) -> Self {
        self.unary(|r| Some(r.exp()))
    }

    fn abs(&self) -> Self {
        self.unary(|r| Some(r.abs()))
    }

    fn negate(&self) -> Self {
        self.unary(|r| Some(r.neg()))
    }

    fn is_nan(&self) -> bool {
        matches!(self, Number::NaN)
    }

    fn signum(&self) -> Option<Ordering> {
        self.value().map(R::signum)
    }

    fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Value(a), Number::Value(b)) => a.tolerant_eq(b),
            (Number::NaN, Number::NaN) => true,
            _ => false,
        }
    }

    fn compare_to(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Value(a), Number::Value(b)) => a.cmp_exact(b),
            _ => Ordering::Equal,
        }
    }

    fn double_value(&self) -> f64 {
        self.value().map_or(f64::NAN, R::to_f64)
    }

    fn float_value(&self) -> f32 {
        self.value().map_or(f32::NAN, R::to_f32)
    }

    fn try_int_value(&self) -> Result<i32> {
        self.value().map(R::to_i32).ok_or(Error::NoIntegralRepresentation)
    }

    fn try_long_value(&self) -> Result<i64> {
        self.value().map(R::to_i64).ok_or(Error::NoIntegralRepresentation)
    }

    fn zero(&self) -> Self {
        self.constant(0)
    }

    fn one(&self) -> Self {
        self.constant(1)
    }

    fn hundred(&self) -> Self {
        self.constant(100)
    }

    fn try_num_of(&self, value: impl Into<Primitive>) -> Result<Self> {
        let value = value.into();
        match self {
            Number::Value(r) => r.from_primitive_like(value).map(Self::from_repr),
            Number::NaN => Ok(Number::NaN),
        }
    }

    fn num_of_str(&self, literal: &str, precision: u32) -> Result<Self> {
        match self {
            Number::Value(_) => Self::parse(literal, Some(precision)),
            Number::NaN => Ok(Number::NaN),
        }
    }
}

impl<R> From<NaN> for Number<R> {
    fn from(_: NaN) -> Self {
        Number::NaN
    }
}

impl<R: Representation> PartialEq for Number<R> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<R: Representation> PartialEq<NaN> for Number<R> {
    fn eq(&self, _: &NaN) -> bool {
        self.is_nan()
    }
}

impl<R: Representation> PartialOrd for Number<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Value(a), Number::Value(b)) => Some(a.cmp_exact(b)),
            (Number::NaN, Number::NaN) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl<R: Representation> fmt::Display for Number<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Value(r) => fmt::Display::fmt(r, f),
            Number::NaN => fmt::Display::fmt(&NaN, f),
        }
    }
}

impl<R: Representation> FromStr for Number<R> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

impl<R: Representation> From<i32> for Number<R> {
    fn from(value: i32) -> Self {
        R::from_primitive(Primitive::Integer(i64::from(value))).map_or(Number::NaN, Self::from_repr)
    }
}

impl<R: Representation> From<i64> for Number<R> {
    fn from(value: i64) -> Self {
        R::from_primitive(Primitive::Integer(value)).map_or(Number::NaN, Self::from_repr)
    }
}

impl<R: Representation> TryFrom<f64> for Number<R> {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        R::from_primitive(Primitive::Double(value)).map(Self::from_repr)
    }
}

impl<R: Representation> TryFrom<f32> for Number<R> {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        R::from_primitive(Primitive::Float(value)).map(Self::from_repr)
    }
}

impl Number<Double> {
    /// 0.0
    pub const ZERO: Self = Number::Value(Double::new(0.0));
    /// 1.0
    pub const ONE: Self = Number::Value(Double::new(1.0));
    /// 100.0
    pub const HUNDRED: Self = Number::Value(Double::new(100.0));

    /// Wrap a raw `f64`; a NaN input becomes the sentinel.
    pub fn of(value: f64) -> Self {
        Self::from_repr(Double::new(value))
    }
}

impl Number<Decimal> {
    /// A decimal value in `context`, rounded to it.
    pub fn with_context(value: BigDecimal, context: MathContext) -> Self {
        Number::Value(Decimal::new(value.round(&context), context))
    }

    /// Parse `literal` and round it to `precision` digits.
    ///
    /// # Errors
    /// As [`Num::num_of_str`].
    pub fn parse_with_precision(literal: &str, precision: u32) -> Result<Self> {
        Self::parse(literal, Some(precision))
    }

    /// Parse `literal` exactly, then round it once into `context` with
    /// the context's own rounding mode.
    ///
    /// # Errors
    /// As [`Num::num_of_str`].
    pub fn parse_in(literal: &str, context: MathContext) -> Result<Self> {
        Ok(Self::parse(literal, None)?.rounded_to(context))
    }

    /// The context, `None` for NaN.
    pub fn context(&self) -> Option<MathContext> {
        self.value().map(Decimal::context)
    }

    /// The decimal value, `None` for NaN.
    pub fn big_decimal_value(&self) -> Option<&BigDecimal> {
        self.value().map(Decimal::value)
    }

    /// Same value rounded into `context`.
    pub fn rounded_to(&self, context: MathContext) -> Self {
        self.unary(|r| Some(r.with_context(context)))
    }

    /// Real power.
    ///
    /// # Errors
    /// `Error::ExponentOverflow` if the exponent's integral part does not
    /// fit `i32`.
    pub fn try_pow_num(&self, exponent: &Self) -> Result<Self> {
        match (self, exponent) {
            (Number::Value(a), Number::Value(b)) => Ok(a.try_pow_num(b)?.map_or(Number::NaN, Number::Value)),
            _ => Ok(Number::NaN),
        }
    }

    /// `true` if both agree once rounded to `precision` digits.
    /// Always `false` when NaN is involved.
    pub fn matches(&self, other: &Self, precision: u32) -> bool {
        match (self, other) {
            (Number::Value(a), Number::Value(b)) => a.matches(b, precision),
            _ => false,
        }
    }

    /// `true` if `|self - other| <= delta`. Always `false` when NaN is
    /// involved.
    pub fn matches_within(&self, other: &Self, delta: &Self) -> bool {
        match (self, other, delta) {
            (Number::Value(a), Number::Value(b), Number::Value(d)) => a.matches_within(b, d),
            _ => false,
        }
    }
}
