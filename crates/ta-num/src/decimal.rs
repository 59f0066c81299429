//! The arbitrary-precision representation.
//!
//! A [`Decimal`] is a [`BigDecimal`] plus the [`MathContext`] it computes
//! in. Binary operations run in the wider of the two contexts and the
//! result carries that context forward.
//!
//! Square root and logarithm are iterative:
//!
//! * `sqrt` is Newton's iteration `x' = (x + v/x) / 2` seeded from a
//!   two-digit scientific estimate of `v`, and stops once two successive
//!   iterates agree at the working precision.
//! * `ln` evaluates a fixed 1000-term continued fraction for `ln(1 + x)`.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use ta_core::{Error, Result};
use tracing::{debug, trace};

use crate::big_decimal::BigDecimal;
use crate::math_context::{MathContext, RoundingMode, DEFAULT_PRECISION};
use crate::num::Primitive;
use crate::representation::Representation;

/// Terms of the logarithm's continued fraction.
const LOG_TERMS: i64 = 1000;

/// A decimal value with its precision context.
#[derive(Debug, Clone)]
pub struct Decimal {
    value: BigDecimal,
    context: MathContext,
}

impl Decimal {
    /// Pair a value with a context. The value is kept as given.
    pub fn new(value: BigDecimal, context: MathContext) -> Self {
        Self { value, context }
    }

    /// The decimal value.
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    /// The context results are rounded to.
    pub fn context(&self) -> MathContext {
        self.context
    }

    /// The value rounded to `context`, carrying `context` from now on.
    pub fn with_context(&self, context: MathContext) -> Self {
        Self::new(self.value.round(&context), context)
    }

    fn wider(&self, other: &Self) -> MathContext {
        self.context.wider(other.context)
    }

    fn context_for(&self, precision: u32) -> MathContext {
        MathContext::new(precision, self.context.rounding()).unwrap_or(self.context)
    }

    /// Square root computed in `context`.
    pub fn sqrt_in(&self, context: MathContext) -> Option<Self> {
        trace!(value = %self.value, "sqrt");
        match self.value.signum() {
            Ordering::Less => return None,
            Ordering::Equal => return Some(Self::new(BigDecimal::zero(), context)),
            Ordering::Greater => {}
        }
        let mut estimate = Self::seed(&self.value.round(&context));
        let two = BigDecimal::from(2);
        let mut previous: Option<BigDecimal> = None;
        let mut iteration = 0u32;
        loop {
            iteration += 1;
            let test = self.value.div(&estimate, &context)?;
            let next = estimate.add_exact(&test).div(&two, &context)?;
            trace!(iteration, estimate = %next, "sqrt step");
            if next == estimate {
                break;
            }
            // At low precision Newton can alternate between two iterates. The
            // lower one is the root rounded to the context.
            if previous.as_ref() == Some(&next) {
                debug!(iteration, a = %estimate, b = %next, "sqrt iterates alternate, keeping the lower");
                if next < estimate {
                    estimate = next;
                }
                break;
            }
            previous = Some(std::mem::replace(&mut estimate, next));
        }
        Some(Self::new(estimate.round(&context), context))
    }

    /// Seed for Newton's iteration: from `m.mE±k`, make `k` even (shifting a
    /// digit into `m` when it is positive and odd), then take `2` or `6`
    /// times `10^(k/2)`.
    fn seed(value: &BigDecimal) -> BigDecimal {
        let (mut tenths, mut exponent) = value.scientific_estimate();
        if exponent % 2 > 0 {
            exponent -= 1;
            tenths *= 10;
        }
        let mantissa = if tenths < 100 { 2 } else { 6 };
        let half = exponent / 2;
        trace!(tenths, exponent, mantissa, half, "sqrt seed");
        BigDecimal::new(BigInt::from(mantissa), -half)
    }

    /// Natural logarithm in this value's context.
    fn ln_in(&self, context: MathContext) -> Option<Self> {
        if self.value.signum() != Ordering::Greater {
            return None;
        }
        let one = BigDecimal::one();
        if self.value == one {
            return Some(Self::new(BigDecimal::zero(), context));
        }
        let x = self.value.sub_exact(&one);
        let mut ret = BigDecimal::from(LOG_TERMS + 1);
        for i in (0..=LOG_TERMS).rev() {
            let coefficient = BigDecimal::from((i / 2 + 1) * (i / 2 + 1));
            ret = coefficient.mul(&x, &context)?.div(&ret, &context)?;
            ret = ret.add(&BigDecimal::from(i + 1), &context);
        }
        Some(Self::new(x.div(&ret, &context)?, context))
    }

    /// Taylor series for `e^x`, summed until the sum stops changing.
    fn exp_in(&self, context: MathContext) -> Self {
        if self.value.signum() == Ordering::Less {
            let positive = Self::new(self.value.neg(), context).exp_in(context);
            let reciprocal = BigDecimal::one()
                .div(&positive.value, &context)
                .unwrap_or_else(BigDecimal::zero);
            return Self::new(reciprocal, context);
        }
        let mut term = BigDecimal::one();
        let mut sum = BigDecimal::one();
        let mut i = 1i64;
        while !term.is_zero() {
            let next_term = term
                .mul(&self.value, &context)
                .and_then(|product| product.div(&BigDecimal::from(i), &context));
            let Some(next_term) = next_term else {
                break;
            };
            term = next_term;
            let next = sum.add(&term, &context);
            if next == sum {
                break;
            }
            sum = next;
            i += 1;
        }
        Self::new(sum, context)
    }

    /// `self^exponent` split as `self^a × self^b`, where `a` is the integral
    /// part of the exponent and `b` the fractional rest (same sign).
    /// `self^b` goes through `f64`, so it carries about 16 correct digits.
    ///
    /// # Errors
    /// `Error::ExponentOverflow` if `a` does not fit `i32`.
    pub fn try_pow_num(&self, exponent: &Self) -> Result<Option<Self>> {
        let context = self.context;
        let fractional = exponent.value.fractional_part();
        let integral = if fractional.is_zero() {
            exponent.value.clone()
        } else {
            exponent.value.sub_exact(&fractional)
        };
        let whole = integral
            .to_i32_exact()
            .ok_or_else(|| Error::ExponentOverflow(exponent.value.to_string()))?;
        let factor = self.value.to_f64().powf(fractional.to_f64());
        if !factor.is_finite() {
            return Ok(None);
        }
        let Some(power) = self.value.pow(whole, &context.widened(10)) else {
            return Ok(None);
        };
        let factor = BigDecimal::from_f64(factor)?;
        Ok(power.mul(&factor, &context).map(|value| Self::new(value, context)))
    }

    /// `true` if both values agree once rounded to `precision` digits.
    pub fn matches(&self, other: &Self, precision: u32) -> bool {
        let context = self.context_for(precision);
        if self.value.round(&context) == other.value.round(&context) {
            return true;
        }
        debug!(this = %self.value, that = %other.value, precision, "no match at precision");
        false
    }

    /// `true` if `|self - other| <= delta`.
    pub fn matches_within(&self, other: &Self, delta: &Self) -> bool {
        if self.value.sub_exact(&other.value).abs() <= delta.value {
            return true;
        }
        debug!(this = %self.value, that = %other.value, delta = %delta.value, "no match within delta");
        false
    }
}

impl Representation for Decimal {
    const NAME: &'static str = "DecimalNum";

    fn from_primitive(value: Primitive) -> Result<Self> {
        Self::new(BigDecimal::zero(), MathContext::DEFAULT).from_primitive_like(value)
    }

    fn from_primitive_like(&self, value: Primitive) -> Result<Self> {
        let value = match value {
            Primitive::Integer(v) => BigDecimal::from(v),
            Primitive::Float(v) => BigDecimal::from_f32(v)?,
            Primitive::Double(v) => BigDecimal::from_f64(v)?,
        };
        Ok(Self::new(value, self.context))
    }

    /// With a precision, the literal is rounded to it. Without one (or with
    /// zero), the context widens to hold every digit of the literal, with
    /// [`DEFAULT_PRECISION`] as the floor.
    fn parse(literal: &str, precision: Option<u32>) -> Result<Self> {
        let value = BigDecimal::parse(literal)?;
        match precision.filter(|p| *p > 0) {
            Some(p) => {
                let context = MathContext::half_up(p);
                Ok(Self::new(value.round(&context), context))
            }
            None => {
                let digits = u32::try_from(value.precision()).unwrap_or(u32::MAX);
                let context = MathContext::half_up(digits.max(DEFAULT_PRECISION));
                Ok(Self::new(value, context))
            }
        }
    }

    fn add(&self, other: &Self) -> Self {
        let context = self.wider(other);
        Self::new(self.value.add(&other.value, &context), context)
    }

    fn sub(&self, other: &Self) -> Self {
        let context = self.wider(other);
        Self::new(self.value.sub(&other.value, &context), context)
    }

    fn mul(&self, other: &Self) -> Option<Self> {
        let context = self.wider(other);
        Some(Self::new(self.value.mul(&other.value, &context)?, context))
    }

    fn div(&self, other: &Self) -> Option<Self> {
        let context = self.wider(other);
        Some(Self::new(self.value.div(&other.value, &context)?, context))
    }

    fn rem(&self, other: &Self) -> Option<Self> {
        let context = self.wider(other);
        Some(Self::new(self.value.rem(&other.value, &context)?, context))
    }

    fn floor(&self) -> Self {
        Self::new(self.value.with_scale(0, RoundingMode::Floor), self.context)
    }

    fn ceil(&self) -> Self {
        Self::new(self.value.with_scale(0, RoundingMode::Ceiling), self.context)
    }

    fn abs(&self) -> Self {
        Self::new(self.value.abs(), self.context)
    }

    fn neg(&self) -> Self {
        Self::new(self.value.neg(), self.context)
    }

    fn powi(&self, n: i32) -> Option<Self> {
        Some(Self::new(self.value.pow(n, &self.context)?, self.context))
    }

    fn pow_num(&self, exponent: &Self) -> Result<Option<Self>> {
        self.try_pow_num(exponent)
    }

    fn ln(&self) -> Option<Self> {
        self.ln_in(self.context)
    }

    fn sqrt(&self, precision: Option<u32>) -> Option<Self> {
        let context = precision.map_or(self.context, |p| self.context_for(p));
        self.sqrt_in(context)
    }

    fn exp(&self) -> Self {
        self.exp_in(self.context)
    }

    fn signum(&self) -> Ordering {
        self.value.signum()
    }

    fn cmp_exact(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    fn tolerant_eq(&self, other: &Self) -> bool {
        self.value == other.value
    }

    fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }

    fn to_f32(&self) -> f32 {
        self.value.to_f64() as f32
    }

    fn to_i64(&self) -> i64 {
        self.value.to_i64_saturating()
    }

    fn to_i32(&self) -> i32 {
        let wide = self.value.to_i64_saturating();
        i32::try_from(wide).unwrap_or(if wide < 0 { i32::MIN } else { i32::MAX })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
