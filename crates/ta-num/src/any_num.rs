//! `AnyNum`: a number whose family is chosen at runtime.
//!
//! Generic code over [`Num`] fixes the family at compile time. `AnyNum` is
//! for the places where it cannot, such as configuration-driven pipelines
//! or values read back from storage. Combining two different families is a
//! programming error: the [`Num`] methods and operators panic, and
//! [`AnyNum::try_apply`] reports it as `Error::RepresentationMismatch`.

use std::cmp::Ordering;
use std::fmt;

use ta_core::{Error, Result};

use crate::decimal::Decimal;
use crate::double::Double;
use crate::math_context::MathContext;
use crate::nan::NaN;
use crate::num::{Num, Primitive};
use crate::number::{DecimalNum, DoubleNum, Number};
use crate::representation::Representation;

/// A number of any family.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyNum {
    /// Double-backed value.
    Double(DoubleNum),
    /// Arbitrary-precision value.
    Decimal(DecimalNum),
    /// The NaN sentinel.
    NaN,
}

/// Binary operations of the [`Num`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// [`Num::plus`]
    Plus,
    /// [`Num::minus`]
    Minus,
    /// [`Num::multiplied_by`]
    MultipliedBy,
    /// [`Num::divided_by`]
    DividedBy,
    /// [`Num::remainder`]
    Remainder,
    /// [`Num::pow_num`]
    PowNum,
    /// [`Num::min`]
    Min,
    /// [`Num::max`]
    Max,
}

impl BinaryOp {
    /// Operation name as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::MultipliedBy => "multiplied_by",
            BinaryOp::DividedBy => "divided_by",
            BinaryOp::Remainder => "remainder",
            BinaryOp::PowNum => "pow_num",
            BinaryOp::Min => "min",
            BinaryOp::Max => "max",
        }
    }

    /// Apply the operation to two values of one family.
    pub fn apply<N: Num>(self, left: &N, right: &N) -> N {
        match self {
            BinaryOp::Plus => left.plus(right),
            BinaryOp::Minus => left.minus(right),
            BinaryOp::MultipliedBy => left.multiplied_by(right),
            BinaryOp::DividedBy => left.divided_by(right),
            BinaryOp::Remainder => left.remainder(right),
            BinaryOp::PowNum => left.pow_num(right),
            BinaryOp::Min => left.min(right),
            BinaryOp::Max => left.max(right),
        }
    }
}

/// Run `$body` with `$n` bound to the inner number, re-wrapping the result.
macro_rules! dispatch {
    ($self:expr, $n:ident => $body:expr) => {
        match $self {
            AnyNum::Double($n) => AnyNum::from($body),
            AnyNum::Decimal($n) => AnyNum::from($body),
            AnyNum::NaN => AnyNum::NaN,
        }
    };
}

/// Run `$body` with `$n` bound to the inner number, returning it as is.
macro_rules! query {
    ($self:expr, $n:ident => $body:expr, nan => $nan:expr) => {
        match $self {
            AnyNum::Double($n) => $body,
            AnyNum::Decimal($n) => $body,
            AnyNum::NaN => $nan,
        }
    };
}

impl AnyNum {
    /// Family name: `"DoubleNum"`, `"DecimalNum"` or `"NaN"`.
    pub fn family(&self) -> &'static str {
        match self {
            AnyNum::Double(_) => Double::NAME,
            AnyNum::Decimal(_) => Decimal::NAME,
            AnyNum::NaN => NaN::NAME,
        }
    }

    fn mismatch(&self, op: &'static str, other: &Self) -> Error {
        Error::RepresentationMismatch {
            op,
            left: self.family(),
            right: other.family(),
        }
    }

    /// Apply `op` to `self` and `other`.
    ///
    /// # Errors
    /// `Error::RepresentationMismatch` if the operands are of different
    /// families, `Error::ExponentOverflow` from a decimal `PowNum`.
    pub fn try_apply(&self, op: BinaryOp, other: &Self) -> Result<AnyNum> {
        match (self, other) {
            (a, b) if a.is_nan() || b.is_nan() => Ok(AnyNum::NaN),
            (AnyNum::Double(a), AnyNum::Double(b)) => Ok(op.apply(a, b).into()),
            (AnyNum::Decimal(a), AnyNum::Decimal(b)) if op == BinaryOp::PowNum => {
                a.try_pow_num(b).map(AnyNum::from)
            }
            (AnyNum::Decimal(a), AnyNum::Decimal(b)) => Ok(op.apply(a, b).into()),
            (a, b) => Err(a.mismatch(op.name(), b)),
        }
    }

    /// Exact ordering, `Equal` when either side is NaN.
    ///
    /// # Errors
    /// `Error::RepresentationMismatch` for operands of different families.
    pub fn try_compare_to(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (a, b) if a.is_nan() || b.is_nan() => Ok(Ordering::Equal),
            (AnyNum::Double(a), AnyNum::Double(b)) => Ok(a.compare_to(b)),
            (AnyNum::Decimal(a), AnyNum::Decimal(b)) => Ok(a.compare_to(b)),
            (a, b) => Err(a.mismatch("compare_to", b)),
        }
    }

    fn apply_or_panic(&self, op: BinaryOp, other: &Self) -> Self {
        self.try_apply(op, other).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Convert to the double family.
    pub fn to_double_num(&self) -> DoubleNum {
        match self {
            AnyNum::Double(d) => d.clone(),
            AnyNum::Decimal(d) => DoubleNum::of(d.double_value()),
            AnyNum::NaN => DoubleNum::NaN,
        }
    }

    /// Convert to the decimal family at `precision` digits. Infinite doubles
    /// have no decimal image and become NaN.
    pub fn to_decimal_num(&self, precision: u32) -> DecimalNum {
        let context = MathContext::half_up(precision);
        match self {
            AnyNum::Double(Number::Value(d)) => DecimalNum::parse(&d.to_string(), Some(precision))
                .map_or(DecimalNum::NaN, |n| n.rounded_to(context)),
            AnyNum::Decimal(d) => d.rounded_to(context),
            AnyNum::Double(Number::NaN) | AnyNum::NaN => DecimalNum::NaN,
        }
    }
}

impl From<DoubleNum> for AnyNum {
    fn from(value: DoubleNum) -> Self {
        match value {
            Number::NaN => AnyNum::NaN,
            value => AnyNum::Double(value),
        }
    }
}

impl From<DecimalNum> for AnyNum {
    fn from(value: DecimalNum) -> Self {
        match value {
            Number::NaN => AnyNum::NaN,
            value => AnyNum::Decimal(value),
        }
    }
}

impl From<NaN> for AnyNum {
    fn from(_: NaN) -> Self {
        AnyNum::NaN
    }
}

impl Num for AnyNum {
    fn name(&self) -> &'static str {
        self.family()
    }

    fn plus(&self, augend: &Self) -> Self {
        self.apply_or_panic(BinaryOp::Plus, augend)
    }

    fn minus(&self, subtrahend: &Self) -> Self {
        self.apply_or_panic(BinaryOp::Minus, subtrahend)
    }

    fn multiplied_by(&self, multiplicand: &Self) -> Self {
        self.apply_or_panic(BinaryOp::MultipliedBy, multiplicand)
    }

    fn divided_by(&self, divisor: &Self) -> Self {
        self.apply_or_panic(BinaryOp::DividedBy, divisor)
    }

    fn remainder(&self, divisor: &Self) -> Self {
        self.apply_or_panic(BinaryOp::Remainder, divisor)
    }

    fn floor(&self) -> Self {
        dispatch!(self, n => n.floor())
    }

    fn ceil(&self) -> Self {
        dispatch!(self, n => n.ceil())
    }

    fn pow(&self, exponent: i32) -> Self {
        dispatch!(self, n => n.pow(exponent))
    }

    fn pow_num(&self, n: &Self) -> Self {
        self.apply_or_panic(BinaryOp::PowNum, n)
    }

    fn log(&self) -> Self {
        dispatch!(self, n => n.log())
    }

    fn sqrt(&self) -> Self {
        dispatch!(self, n => n.sqrt())
    }

    fn sqrt_with_precision(&self, precision: u32) -> Self {
        dispatch!(self, n => n.sqrt_with_precision(precision))
    }

    fn exp(&self) -> Self {
        dispatch!(self, n => n.exp())
    }

    fn abs(&self) -> Self {
        dispatch!(self, n => n.abs())
    }

    fn negate(&self) -> Self {
        dispatch!(self, n => n.negate())
    }

    fn is_nan(&self) -> bool {
        query!(self, n => n.is_nan(), nan => true)
    }

    fn signum(&self) -> Option<Ordering> {
        query!(self, n => n.signum(), nan => None)
    }

    /// # Panics
    /// For operands of different families.
    fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyNum::Double(a), AnyNum::Double(b)) => a.is_equal(b),
            (AnyNum::Decimal(a), AnyNum::Decimal(b)) => a.is_equal(b),
            (a, b) if a.is_nan() || b.is_nan() => a.is_nan() && b.is_nan(),
            (a, b) => panic!("{}", a.mismatch("is_equal", b)),
        }
    }

    /// # Panics
    /// For operands of different families.
    fn compare_to(&self, other: &Self) -> Ordering {
        self.try_compare_to(other).unwrap_or_else(|e| panic!("{e}"))
    }

    fn min(&self, other: &Self) -> Self {
        self.apply_or_panic(BinaryOp::Min, other)
    }

    fn max(&self, other: &Self) -> Self {
        self.apply_or_panic(BinaryOp::Max, other)
    }

    fn double_value(&self) -> f64 {
        query!(self, n => n.double_value(), nan => f64::NAN)
    }

    fn float_value(&self) -> f32 {
        query!(self, n => n.float_value(), nan => f32::NAN)
    }

    fn try_int_value(&self) -> Result<i32> {
        query!(self, n => n.try_int_value(), nan => Err(Error::NoIntegralRepresentation))
    }

    fn try_long_value(&self) -> Result<i64> {
        query!(self, n => n.try_long_value(), nan => Err(Error::NoIntegralRepresentation))
    }

    fn zero(&self) -> Self {
        dispatch!(self, n => n.zero())
    }

    fn one(&self) -> Self {
        dispatch!(self, n => n.one())
    }

    fn hundred(&self) -> Self {
        dispatch!(self, n => n.hundred())
    }

    fn try_num_of(&self, value: impl Into<Primitive>) -> Result<Self> {
        let value = value.into();
        Ok(dispatch!(self, n => n.try_num_of(value)?))
    }

    fn num_of_str(&self, literal: &str, precision: u32) -> Result<Self> {
        Ok(dispatch!(self, n => n.num_of_str(literal, precision)?))
    }
}

/// Families never compare equal to each other; NaN equals NaN.
impl PartialEq for AnyNum {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyNum::Double(a), AnyNum::Double(b)) => a == b,
            (AnyNum::Decimal(a), AnyNum::Decimal(b)) => a == b,
            (a, b) => a.is_nan() && b.is_nan(),
        }
    }
}

/// Exact ordering within a family, `None` across families or against NaN.
impl PartialOrd for AnyNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (AnyNum::Double(a), AnyNum::Double(b)) => a.partial_cmp(b),
            (AnyNum::Decimal(a), AnyNum::Decimal(b)) => a.partial_cmp(b),
            (a, b) if a.is_nan() && b.is_nan() => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for AnyNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyNum::Double(n) => fmt::Display::fmt(n, f),
            AnyNum::Decimal(n) => fmt::Display::fmt(n, f),
            AnyNum::NaN => fmt::Display::fmt(&NaN, f),
        }
    }
}
