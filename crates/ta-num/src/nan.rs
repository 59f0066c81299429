//! The NaN sentinel.
//!
//! [`NaN`] is the one "undefined" value shared by every family. It is a
//! zero-sized type, so the sentinel is a single process-wide value by
//! construction. It converts into every `Number<R>` and into
//! [`AnyNum`](crate::any_num::AnyNum).

use std::cmp::Ordering;
use std::fmt;

use ta_core::{Error, Result};

use crate::num::{Num, Primitive};

/// Undefined value. Absorbs every arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
pub struct NaN;

impl NaN {
    /// Family name and display text.
    pub const NAME: &'static str = "NaN";
}

impl fmt::Display for NaN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl Num for NaN {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn plus(&self, _: &Self) -> Self {
        NaN
    }

    fn minus(&self, _: &Self) -> Self {
        NaN
    }

    fn multiplied_by(&self, _: &Self) -> Self {
        NaN
    }

    fn divided_by(&self, _: &Self) -> Self {
        NaN
    }

    fn remainder(&self, _: &Self) -> Self {
        NaN
    }

    fn floor(&self) -> Self {
        NaN
    }

    fn ceil(&self) -> Self {
        NaN
    }

    fn pow(&self, _: i32) -> Self {
        NaN
    }

    fn pow_num(&self, _: &Self) -> Self {
        NaN
    }

    fn log(&self) -> Self {
        NaN
    }

    fn sqrt(&self) -> Self {
        NaN
    }

    fn sqrt_with_precision(&self, _: u32) -> Self {
        NaN
    }

    fn exp(&self) -> Self {
        NaN
    }

    fn abs(&self) -> Self {
        NaN
    }

    fn negate(&self) -> Self {
        NaN
    }

    fn is_nan(&self) -> bool {
        true
    }

    fn signum(&self) -> Option<Ordering> {
        None
    }

    fn is_equal(&self, _: &Self) -> bool {
        true
    }

    fn compare_to(&self, _: &Self) -> Ordering {
        Ordering::Equal
    }

    fn double_value(&self) -> f64 {
        f64::NAN
    }

    fn float_value(&self) -> f32 {
        f32::NAN
    }

    fn try_int_value(&self) -> Result<i32> {
        Err(Error::NoIntegralRepresentation)
    }

    fn try_long_value(&self) -> Result<i64> {
        Err(Error::NoIntegralRepresentation)
    }

    fn zero(&self) -> Self {
        NaN
    }

    fn one(&self) -> Self {
        NaN
    }

    fn hundred(&self) -> Self {
        NaN
    }

    fn try_num_of(&self, _: impl Into<Primitive>) -> Result<Self> {
        Ok(NaN)
    }

    fn num_of_str(&self, _: &str, _: u32) -> Result<Self> {
        Ok(NaN)
    }
}
