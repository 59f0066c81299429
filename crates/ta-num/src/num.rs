//! The `Num` contract.
//!
//! Indicators, rules and criteria are written against [`Num`] only; they
//! never learn which representation family they are computing in. Every
//! family (`DoubleNum`, `DecimalNum`, the [`NaN`](crate::nan::NaN) sentinel
//! and the dynamic [`AnyNum`](crate::any_num::AnyNum)) implements it.
//!
//! # NaN contagion
//!
//! Any arithmetic touching NaN yields NaN, and so do division by zero and
//! the undefined cases of `log` and `sqrt`. Predicates stay total: the
//! sign predicates and ordering predicates answer `false` when NaN is
//! involved, while `is_equal` treats NaN as equal to NaN only.

use std::cmp::Ordering;
use std::fmt;

use ta_core::Result;

/// A primitive number handed to a factory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Any integer type, widened to `i64`.
    Integer(i64),
    /// A single-precision float.
    Float(f32),
    /// A double-precision float.
    Double(f64),
}

impl Primitive {
    /// `true` for a floating NaN.
    pub fn is_nan(&self) -> bool {
        match self {
            Primitive::Integer(_) => false,
            Primitive::Float(v) => v.is_nan(),
            Primitive::Double(v) => v.is_nan(),
        }
    }
}

macro_rules! primitive_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Primitive {
            fn from(value: $t) -> Self {
                Primitive::Integer(i64::from(value))
            }
        })*
    };
}

primitive_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Primitive {
    fn from(value: usize) -> Self {
        Primitive::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Primitive {
    fn from(value: f32) -> Self {
        Primitive::Float(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Double(value)
    }
}

/// Arithmetic, comparison and conversion contract shared by every numeric
/// family.
///
/// Binary operations take an operand of the same type. For the generic
/// `Number<R>` this makes mixing families a type error; the dynamic
/// [`AnyNum`](crate::any_num::AnyNum) checks at runtime and panics instead.
pub trait Num: Clone + fmt::Debug + fmt::Display + PartialEq + PartialOrd + Send + Sync {
    /// Name of the representation family, e.g. `"DecimalNum"`.
    fn name(&self) -> &'static str;

    /// `self + augend`.
    fn plus(&self, augend: &Self) -> Self;

    /// `self - subtrahend`.
    fn minus(&self, subtrahend: &Self) -> Self;

    /// `self * multiplicand`.
    fn multiplied_by(&self, multiplicand: &Self) -> Self;

    /// Alias of [`multiplied_by`](Num::multiplied_by).
    fn times(&self, multiplicand: &Self) -> Self {
        self.multiplied_by(multiplicand)
    }

    /// `self / divisor`; NaN when `divisor` is zero.
    fn divided_by(&self, divisor: &Self) -> Self;

    /// Remainder of truncated division; NaN when `divisor` is zero.
    fn remainder(&self, divisor: &Self) -> Self;

    /// Largest integral value not greater than `self`.
    fn floor(&self) -> Self;

    /// Smallest integral value not less than `self`.
    fn ceil(&self) -> Self;

    /// `self^n`.
    fn pow(&self, n: i32) -> Self;

    /// `self^n` for a non-integral exponent.
    ///
    /// # Panics
    /// A decimal exponent whose integral part does not fit `i32`.
    fn pow_num(&self, n: &Self) -> Self;

    /// Natural logarithm; NaN for a non-positive operand.
    fn log(&self) -> Self;

    /// Square root; NaN for a negative operand.
    fn sqrt(&self) -> Self;

    /// Square root to `precision` significant digits. Families without a
    /// precision notion ignore it.
    fn sqrt_with_precision(&self, precision: u32) -> Self;

    /// `e^self`.
    fn exp(&self) -> Self;

    /// Absolute value.
    fn abs(&self) -> Self;

    /// `-self`.
    fn negate(&self) -> Self;

    /// `true` only for the NaN sentinel.
    fn is_nan(&self) -> bool;

    /// Sign compared with zero, `None` for NaN.
    fn signum(&self) -> Option<Ordering>;

    /// `true` if `self == 0`.
    fn is_zero(&self) -> bool {
        self.signum() == Some(Ordering::Equal)
    }

    /// `true` if `self > 0`.
    fn is_positive(&self) -> bool {
        self.signum() == Some(Ordering::Greater)
    }

    /// `true` if `self >= 0`.
    fn is_positive_or_zero(&self) -> bool {
        matches!(self.signum(), Some(Ordering::Greater | Ordering::Equal))
    }

    /// `true` if `self < 0`.
    fn is_negative(&self) -> bool {
        self.signum() == Some(Ordering::Less)
    }

    /// `true` if `self <= 0`.
    fn is_negative_or_zero(&self) -> bool {
        matches!(self.signum(), Some(Ordering::Less | Ordering::Equal))
    }

    /// Family equality: tolerant for doubles, exact for decimals, and NaN
    /// equals NaN only.
    fn is_equal(&self, other: &Self) -> bool;

    /// Exact ordering; `Equal` when either side is NaN.
    fn compare_to(&self, other: &Self) -> Ordering;

    /// `self > other`, `false` if either side is NaN.
    fn is_greater_than(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.compare_to(other) == Ordering::Greater
    }

    /// `self >= other`, `false` if either side is NaN.
    fn is_greater_than_or_equal(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.compare_to(other) != Ordering::Less
    }

    /// `self < other`, `false` if either side is NaN.
    fn is_less_than(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.compare_to(other) == Ordering::Less
    }

    /// `self <= other`, `false` if either side is NaN.
    fn is_less_than_or_equal(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.compare_to(other) != Ordering::Greater
    }

    /// The smaller operand, NaN if either side is NaN.
    fn min(&self, other: &Self) -> Self {
        if self.is_nan() {
            return self.clone();
        }
        if other.is_nan() || self.compare_to(other) == Ordering::Greater {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// The greater operand, NaN if either side is NaN.
    fn max(&self, other: &Self) -> Self {
        if self.is_nan() {
            return self.clone();
        }
        if other.is_nan() || self.compare_to(other) == Ordering::Less {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Nearest `f64`; NaN maps to `f64::NAN`.
    fn double_value(&self) -> f64;

    /// Nearest `f32`; NaN maps to `f32::NAN`.
    fn float_value(&self) -> f32;

    /// Integral part as `i32`.
    ///
    /// # Errors
    /// `Error::NoIntegralRepresentation` for NaN.
    fn try_int_value(&self) -> Result<i32>;

    /// Integral part as `i64`.
    ///
    /// # Errors
    /// `Error::NoIntegralRepresentation` for NaN.
    fn try_long_value(&self) -> Result<i64>;

    /// Integral part as `i32`.
    ///
    /// # Panics
    /// If `self` is NaN.
    fn int_value(&self) -> i32 {
        self.try_int_value().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Integral part as `i64`.
    ///
    /// # Panics
    /// If `self` is NaN.
    fn long_value(&self) -> i64 {
        self.try_long_value().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Zero of the same family (and precision).
    fn zero(&self) -> Self;

    /// One of the same family (and precision).
    fn one(&self) -> Self;

    /// One hundred of the same family (and precision).
    fn hundred(&self) -> Self;

    /// A value of the same family.
    ///
    /// # Errors
    /// `Error::InvalidLiteral` for a floating NaN.
    fn try_num_of(&self, value: impl Into<Primitive>) -> Result<Self>;

    /// A value of the same family.
    ///
    /// # Panics
    /// For a floating NaN; use [`try_num_of`](Num::try_num_of) to recover.
    fn num_of(&self, value: impl Into<Primitive>) -> Self {
        self.try_num_of(value).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Parse a literal into the same family. `precision` is honoured by the
    /// decimal family and ignored by doubles.
    ///
    /// # Errors
    /// `Error::InvalidLiteral` for `"NaN"`, `Error::Parse` for other
    /// malformed text.
    fn num_of_str(&self, literal: &str, precision: u32) -> Result<Self>;
}

/// `true` if `value` is absent or NaN.
pub fn is_nan_or_none<N: Num>(value: Option<&N>) -> bool {
    value.map_or(true, Num::is_nan)
}

/// `true` if `value` is present and not NaN.
pub fn is_valid<N: Num>(value: Option<&N>) -> bool {
    !is_nan_or_none(value)
}
