//! The double-backed fast path.
//!
//! [`Double`] delegates every operation to native `f64` arithmetic.
//! Equality is tolerant (absolute [`EPSILON`]) while ordering is exact, so
//! two values can be equal and still compare as less-than. Native NaN
//! results are reported through [`Representation::is_undefined`] and turn
//! into the NaN sentinel one level up.

use std::cmp::Ordering;
use std::fmt;

use ta_core::{Error, Result};

use crate::big_decimal::float_text;
use crate::comparison::{close, EPSILON};
use crate::num::Primitive;
use crate::representation::Representation;

/// A native double value.
#[derive(Debug, Clone, Copy)]
pub struct Double(f64);

impl Double {
    /// Wrap a raw `f64`.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The wrapped `f64`.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Representation for Double {
    const NAME: &'static str = "DoubleNum";

    fn from_primitive(value: Primitive) -> Result<Self> {
        match value {
            Primitive::Integer(v) => Ok(Self(v as f64)),
            Primitive::Float(v) if v.is_nan() => Err(Error::InvalidLiteral(v.to_string())),
            Primitive::Float(v) => Ok(Self(f64::from(v))),
            Primitive::Double(v) if v.is_nan() => Err(Error::InvalidLiteral(v.to_string())),
            Primitive::Double(v) => Ok(Self(v)),
        }
    }

    fn from_primitive_like(&self, value: Primitive) -> Result<Self> {
        Self::from_primitive(value)
    }

    fn parse(literal: &str, _precision: Option<u32>) -> Result<Self> {
        let value: f64 = literal
            .trim()
            .parse()
            .map_err(|_| Error::Parse(literal.to_string()))?;
        if value.is_nan() {
            return Err(Error::InvalidLiteral(literal.to_string()));
        }
        Ok(Self(value))
    }

    fn is_undefined(&self) -> bool {
        self.0.is_nan()
    }

    fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        Self(self.0 - other.0)
    }

    fn mul(&self, other: &Self) -> Option<Self> {
        Some(Self(self.0 * other.0))
    }

    fn div(&self, other: &Self) -> Option<Self> {
        (other.0 != 0.0).then(|| Self(self.0 / other.0))
    }

    fn rem(&self, other: &Self) -> Option<Self> {
        (other.0 != 0.0).then(|| Self(self.0 % other.0))
    }

    fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    fn ceil(&self) -> Self {
        Self(self.0.ceil())
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn neg(&self) -> Self {
        Self(-self.0)
    }

    fn powi(&self, n: i32) -> Option<Self> {
        Some(Self(self.0.powf(f64::from(n))))
    }

    fn pow_num(&self, exponent: &Self) -> Result<Option<Self>> {
        Ok(Some(Self(self.0.powf(exponent.0))))
    }

    fn ln(&self) -> Option<Self> {
        (self.0 > 0.0).then(|| Self(self.0.ln()))
    }

    fn sqrt(&self, _precision: Option<u32>) -> Option<Self> {
        (self.0 >= 0.0).then(|| Self(self.0.sqrt()))
    }

    fn exp(&self) -> Self {
        Self(self.0.exp())
    }

    fn signum(&self) -> Ordering {
        self.0.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }

    fn cmp_exact(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    fn tolerant_eq(&self, other: &Self) -> bool {
        close(self.0, other.0, EPSILON)
    }

    fn to_f64(&self) -> f64 {
        self.0
    }

    fn to_f32(&self) -> f32 {
        self.0 as f32
    }

    fn to_i64(&self) -> i64 {
        self.0 as i64
    }

    fn to_i32(&self) -> i32 {
        self.0 as i32
    }
}

/// JVM double text: plain with at least one fraction digit inside
/// `[1e-3, 1e7)`, computerized scientific notation (`1.0E7`) outside it.
impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        f.write_str(&float_text(v, v.abs()))
    }
}
