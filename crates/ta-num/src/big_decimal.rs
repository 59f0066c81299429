//! Arbitrary-precision decimal values.
//!
//! A [`BigDecimal`] is an unscaled [`BigInt`] and a decimal scale; its value
//! is `unscaled × 10^-scale`. Exact operations (`add_exact`, `sub_exact`,
//! negation) never lose digits. Every other operation takes a
//! [`MathContext`] and rounds the exact result to its precision.
//!
//! The text format is the JVM `BigDecimal` one: plain notation while the
//! scale is non-negative and the adjusted exponent is at least -6,
//! scientific (`1.5E+11`) otherwise. [`BigDecimal::parse`] reads it back
//! without loss.
//!
//! Scales stay within `i32`. Parsing rejects literals outside that range,
//! and `mul` and `div` return `None` when the result would leave it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, ToPrimitive, Zero};
use ta_core::{Error, Result};

use crate::math_context::{MathContext, RoundingMode};

/// An immutable arbitrary-precision decimal number.
#[derive(Debug, Clone)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i64,
}

fn ten_pow(exponent: u64) -> BigInt {
    BigInt::from(ten_pow_unsigned(exponent))
}

/// `value × 10^exponent`, without building the power for a zero value.
fn times_ten_pow(value: &BigInt, exponent: u64) -> BigInt {
    if value.is_zero() {
        return BigInt::zero();
    }
    value * ten_pow(exponent)
}

fn scale_in_range(scale: i64) -> bool {
    i32::try_from(scale).is_ok()
}

fn ten_pow_unsigned(exponent: u64) -> BigUint {
    BigUint::from(10u32).pow(u32::try_from(exponent).unwrap_or(u32::MAX))
}

/// Number of decimal digits of `|value|`; zero has one digit.
fn digit_count(value: &BigInt) -> u64 {
    if value.is_zero() {
        return 1;
    }
    // 10^(d-1) <= |v| < 10^d, and the bit length pins d down to two candidates.
    let estimate = (value.bits() as f64 * std::f64::consts::LOG10_2) as u64 + 1;
    if estimate > 1 && *value.magnitude() < ten_pow_unsigned(estimate - 1) {
        estimate - 1
    } else {
        estimate
    }
}

/// Divide `value` by `10^drop`, rounding the discarded digits with `mode`.
fn shift_right_rounded(value: &BigInt, drop: u64, mode: RoundingMode) -> BigInt {
    let divisor = ten_pow(drop);
    let quotient = value / &divisor;
    let remainder = value % &divisor;
    if remainder.is_zero() {
        return quotient;
    }
    let negative = remainder.is_negative();
    let half = (remainder.abs() * 2u32).cmp(&divisor);
    let odd = !(&quotient % 2u32).is_zero();
    if !mode.rounds_away(negative, half, odd) {
        quotient
    } else if negative {
        quotient - 1
    } else {
        quotient + 1
    }
}

/// Shortest round-trip text in JVM style: plain with at least one fraction
/// digit inside `[1e-3, 1e7)`, `m.nE±x` outside it.
pub(crate) fn float_text<T: fmt::Debug + fmt::LowerExp>(value: T, magnitude: f64) -> String {
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

impl BigDecimal {
    /// Build from an unscaled integer and a scale.
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Self { unscaled, scale }
    }

    /// Zero with scale 0.
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// One with scale 0.
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Exact decimal image of the JVM text of `value`, so `10.0` keeps
    /// its scale of one.
    ///
    /// # Errors
    /// Returns `Error::InvalidLiteral` for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidLiteral(value.to_string()));
        }
        Self::parse(&float_text(value, value.abs()))
    }

    /// Same as [`from_f64`](Self::from_f64) with the shortest `f32` text.
    ///
    /// # Errors
    /// Returns `Error::InvalidLiteral` for NaN and infinities.
    pub fn from_f32(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidLiteral(value.to_string()));
        }
        Self::parse(&float_text(value, f64::from(value.abs())))
    }

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`.
    ///
    /// # Errors
    /// Returns `Error::Parse` if `literal` is not a decimal number or its
    /// scale does not fit `i32`.
    pub fn parse(literal: &str) -> Result<Self> {
        let malformed = || Error::Parse(literal.to_string());
        let text = literal.trim();
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(at) => (&text[..at], text[at + 1..].parse::<i64>().map_err(|_| malformed())?),
            None => (text, 0),
        };
        let (negative, digits) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
            return Err(malformed());
        }
        let joined = format!("{integer}{fraction}");
        let magnitude = BigInt::parse_bytes(joined.as_bytes(), 10).ok_or_else(malformed)?;
        let scale = i64::try_from(fraction.len())
            .ok()
            .and_then(|len| len.checked_sub(exponent))
            .filter(|scale| scale_in_range(*scale))
            .ok_or_else(malformed)?;
        Ok(Self::new(if negative { -magnitude } else { magnitude }, scale))
    }

    /// The unscaled integer.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The decimal scale.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Number of significant digits in the unscaled value.
    pub fn precision(&self) -> u64 {
        digit_count(&self.unscaled)
    }

    /// `true` for any zero, whatever its scale.
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Sign compared with zero.
    pub fn signum(&self) -> Ordering {
        match self.unscaled.sign() {
            Sign::Minus => Ordering::Less,
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => Ordering::Greater,
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    /// Negated value.
    pub fn neg(&self) -> Self {
        Self::new(-&self.unscaled, self.scale)
    }

    /// `None` once the scale has left the `i32` range.
    fn in_range(self) -> Option<Self> {
        scale_in_range(self.scale).then_some(self)
    }

    /// Digits left of the decimal point, negative for values below `0.1`.
    fn integral_digits(&self) -> i64 {
        self.precision() as i64 - self.scale
    }

    /// Both unscaled values brought to the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, i64) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone(), self.scale),
            Ordering::Less => {
                let shift = other.scale.abs_diff(self.scale);
                (times_ten_pow(&self.unscaled, shift), other.unscaled.clone(), other.scale)
            }
            Ordering::Greater => {
                let shift = self.scale.abs_diff(other.scale);
                (self.unscaled.clone(), times_ten_pow(&other.unscaled, shift), self.scale)
            }
        }
    }

    /// `self` as an addend of the larger `big` under `mc`. When every digit
    /// lies two or more places below the last digit the rounded sum keeps,
    /// only the sign matters and the value collapses to one sticky unit.
    fn condensed_against(&self, big: &Self, mc: &MathContext) -> Self {
        let kept_scale = big.scale - big.precision() as i64 + i64::from(mc.precision());
        let leading = self.scale - self.precision() as i64 + 1;
        if leading > big.scale + 2 && leading > kept_scale + 2 {
            let unit = match self.signum() {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            return Self::new(BigInt::from(unit), big.scale.max(kept_scale) + 3);
        }
        self.clone()
    }

    /// The value with `new_scale`, rounding with `mode` if digits drop.
    pub fn with_scale(&self, new_scale: i64, mode: RoundingMode) -> Self {
        if new_scale >= self.scale {
            let shift = new_scale.abs_diff(self.scale);
            return Self::new(times_ten_pow(&self.unscaled, shift), new_scale);
        }
        let drop = self.scale.abs_diff(new_scale);
        Self::new(shift_right_rounded(&self.unscaled, drop, mode), new_scale)
    }

    /// Round to the precision of `mc`. Values that already fit are returned
    /// unchanged, scale included.
    pub fn round(&self, mc: &MathContext) -> Self {
        let precision = u64::from(mc.precision());
        let digits = self.precision();
        if digits <= precision {
            return self.clone();
        }
        let drop = i64::try_from(digits - precision).unwrap_or(i64::MAX);
        let mut rounded = self.with_scale(self.scale.saturating_sub(drop), mc.rounding());
        // 99.96 -> 100.0 at three digits carries into a fourth digit
        if rounded.precision() > precision {
            rounded = Self::new(rounded.unscaled / 10u32, rounded.scale.saturating_sub(1));
        }
        rounded
    }

    /// Remove trailing zeros while the scale stays above `preferred`.
    fn stripped_to(mut self, preferred: i64) -> Self {
        let ten = BigInt::from(10u32);
        while self.scale > preferred && !self.unscaled.is_zero() {
            let remainder = &self.unscaled % &ten;
            if !remainder.is_zero() {
                break;
            }
            self.unscaled /= &ten;
            self.scale -= 1;
        }
        self
    }

    /// Exact sum.
    pub fn add_exact(&self, other: &Self) -> Self {
        let (a, b, scale) = self.aligned(other);
        Self::new(a + b, scale)
    }

    /// Exact difference.
    pub fn sub_exact(&self, other: &Self) -> Self {
        let (a, b, scale) = self.aligned(other);
        Self::new(a - b, scale)
    }

    /// Sum rounded to `mc`.
    pub fn add(&self, other: &Self, mc: &MathContext) -> Self {
        let sum = match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.add_exact(other),
            Ordering::Less => self.add_exact(&other.condensed_against(self, mc)),
            Ordering::Greater => self.condensed_against(other, mc).add_exact(other),
        };
        sum.round(mc)
    }

    /// Difference rounded to `mc`.
    pub fn sub(&self, other: &Self, mc: &MathContext) -> Self {
        self.add(&other.neg(), mc)
    }

    /// Product rounded to `mc`, or `None` if its scale leaves `i32`.
    pub fn mul(&self, other: &Self, mc: &MathContext) -> Option<Self> {
        let scale = self.scale.checked_add(other.scale).filter(|s| scale_in_range(*s))?;
        Self::new(&self.unscaled * &other.unscaled, scale).round(mc).in_range()
    }

    /// Quotient rounded to `mc`, or `None` for a zero divisor or a scale
    /// outside `i32`.
    ///
    /// An exact quotient keeps the preferred scale `self.scale - other.scale`
    /// where trailing zeros allow it.
    pub fn div(&self, other: &Self, mc: &MathContext) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let preferred = self.scale.checked_sub(other.scale)?;
        if self.is_zero() {
            return Self::new(BigInt::zero(), preferred).in_range();
        }
        // enough leading digits that the first discarded digit is exact
        let wanted = u64::from(mc.precision()) + 2 + other.precision();
        let shift = wanted.saturating_sub(self.precision());
        let numerator = &self.unscaled * ten_pow(shift);
        let quotient = &numerator / &other.unscaled;
        let remainder = &numerator % &other.unscaled;
        let scale = preferred.checked_add(i64::try_from(shift).ok()?)?;
        if remainder.is_zero() {
            return Self::new(quotient, scale).stripped_to(preferred).round(mc).in_range();
        }
        // a sticky digit keeps inexact quotients away from false ties
        let sticky = if quotient.is_negative() { -1 } else { 1 };
        Self::new(quotient * 10u32 + sticky, scale.checked_add(1)?).round(mc).in_range()
    }

    /// Remainder of truncated division (sign of the dividend), rounded to
    /// `mc`, or `None` for a zero divisor.
    pub fn rem(&self, other: &Self, mc: &MathContext) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let (a, b, scale) = self.aligned(other);
        Some(Self::new(a % b, scale).round(mc))
    }

    /// `self^n` rounded to `mc`; `None` for zero raised to a negative power
    /// or a scale outside `i32`.
    ///
    /// Binary exponentiation runs with guard digits so that the final
    /// rounding is the only visible one.
    pub fn pow(&self, n: i32, mc: &MathContext) -> Option<Self> {
        if n == 0 {
            return Some(Self::one());
        }
        let magnitude = n.unsigned_abs();
        let work = mc.widened(magnitude.to_string().len() as u32 + 10);
        let mut result = Self::one();
        let mut base = self.clone();
        let mut remaining = magnitude;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.mul(&base, &work)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.mul(&base, &work)?;
            }
        }
        if n < 0 {
            result = Self::one().div(&result, &work)?;
        }
        Some(result.round(mc))
    }

    /// Fractional part, carrying the sign of `self` (remainder by one).
    pub fn fractional_part(&self) -> Self {
        if self.scale <= 0 {
            return Self::new(BigInt::zero(), 0);
        }
        if self.integral_digits() <= 0 {
            return self.clone();
        }
        Self::new(&self.unscaled % ten_pow(self.scale.unsigned_abs()), self.scale)
    }

    /// The value as an `i32` if it is integral and in range.
    pub fn to_i32_exact(&self) -> Option<i32> {
        if self.is_zero() {
            return Some(0);
        }
        if !self.fractional_part().is_zero() || self.integral_digits() > 10 {
            return None;
        }
        self.with_scale(0, RoundingMode::Down).unscaled.to_i32()
    }

    /// Integral part (truncated towards zero) saturated to `i64`.
    pub fn to_i64_saturating(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        match self.integral_digits() {
            digits if digits <= 0 => return 0,
            digits if digits > 19 => return if self.unscaled.is_negative() { i64::MIN } else { i64::MAX },
            _ => {}
        }
        let integral = self.with_scale(0, RoundingMode::Down).unscaled;
        integral.to_i64().unwrap_or(if integral.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// Nearest `f64`; overflows to an infinity.
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.unscaled, -i128::from(self.scale))
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Scientific estimate printed with one decimal: the value rounded
    /// half-up to two significant digits, as `(mantissa × 10, exponent)`.
    pub(crate) fn scientific_estimate(&self) -> (u32, i64) {
        let rounded = self.abs().round(&MathContext::half_up(2));
        let digits = rounded.precision();
        let exponent = digits as i64 - 1 - rounded.scale;
        let unscaled = rounded.unscaled.to_u32().unwrap_or(10);
        let tenths = if digits == 1 { unscaled * 10 } else { unscaled };
        (tenths, exponent)
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (sa, sb) = (self.signum(), other.signum());
        if sa != sb {
            return sa.cmp(&sb);
        }
        if sa == Ordering::Equal {
            return Ordering::Equal;
        }
        let (da, db) = (self.integral_digits(), other.integral_digits());
        if da != db {
            let by_magnitude = da.cmp(&db);
            return if sa == Ordering::Less { by_magnitude.reverse() } else { by_magnitude };
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_string();
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let length = digits.len() as i64;
        let adjusted = length - 1 - self.scale;
        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        if self.scale > 0 && adjusted >= -6 {
            let point = length - self.scale;
            return if point > 0 {
                let (integer, fraction) = digits.split_at(point as usize);
                write!(f, "{sign}{integer}.{fraction}")
            } else {
                let zeros = "0".repeat(point.unsigned_abs() as usize);
                write!(f, "{sign}0.{zeros}{digits}")
            };
        }
        let (lead, rest) = digits.split_at(1);
        let exponent_sign = if adjusted >= 0 { "+" } else { "" };
        if rest.is_empty() {
            write!(f, "{sign}{lead}E{exponent_sign}{adjusted}")
        } else {
            write!(f, "{sign}{lead}.{rest}E{exponent_sign}{adjusted}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::parse(s).unwrap()
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(dec("1.23").to_string(), "1.23");
        assert_eq!(dec("-0.000123").to_string(), "-0.000123");
        assert_eq!(dec("3E11").to_string(), "3E+11");
        assert_eq!(dec("1.5e-8").to_string(), "1.5E-8");
        assert_eq!(dec("+12.50").to_string(), "12.50");
        assert_eq!(dec(".5").to_string(), "0.5");
        assert_eq!(dec("1000000").to_string(), "1000000");
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "NaN", "Infinity", "1.2.3", "1e", "--1", "e5", "1,5"] {
            assert!(BigDecimal::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn scale_is_bounded_to_i32() {
        assert_eq!(dec("1E+2147483648").scale(), i64::from(i32::MIN));
        assert_eq!(dec("1E-2147483647").scale(), i64::from(i32::MAX));
        for bad in ["1E+2147483649", "1E-2147483648", "1E+5000000000000000000", "0.5E-2147483647"] {
            assert!(matches!(BigDecimal::parse(bad), Err(Error::Parse(_))), "{bad} should not parse");
        }
    }

    #[test]
    fn scale_overflow_is_undefined() {
        let mc = MathContext::DEFAULT;
        let huge = dec("1E+2000000000");
        let tiny = dec("1E-2000000000");
        assert!(huge.mul(&huge, &mc).is_none());
        assert!(tiny.mul(&tiny, &mc).is_none());
        assert!(huge.div(&tiny, &mc).is_none());
        assert!(tiny.div(&huge, &mc).is_none());
        assert!(huge.pow(2, &mc).is_none());
        assert_eq!(huge.mul(&tiny, &mc).unwrap(), BigDecimal::one());
        assert!(BigDecimal::zero().div(&huge, &mc).is_some());
    }

    #[test]
    fn far_apart_operands_stay_cheap() {
        let mc = MathContext::half_up(5);
        let huge = dec("1E+2000000000");
        let one = BigDecimal::one();
        assert_eq!(huge.add(&one, &mc).to_string(), "1.0000E+2000000000");
        assert_eq!(one.sub(&huge, &mc).to_string(), "-1.0000E+2000000000");
        assert_eq!(dec("12.5").add(&dec("1E-2000000000"), &mc).to_string(), "12.500");
        assert!(huge > one && huge.neg() < one.neg());
        assert_eq!(dec("0E+2000000000").to_i32_exact(), Some(0));
        assert!(dec("1E-2000000000") < dec("0.001"));
        assert_eq!(huge.to_i64_saturating(), i64::MAX);
        assert_eq!(huge.neg().to_i64_saturating(), i64::MIN);
        assert_eq!(huge.to_i32_exact(), None);
        assert_eq!(dec("1E-2000000000").to_i64_saturating(), 0);
        assert_eq!(dec("1E-2000000000").fractional_part(), dec("1E-2000000000"));
    }

    #[test]
    fn precision_counts_unscaled_digits() {
        assert_eq!(dec("0").precision(), 1);
        assert_eq!(dec("123.45").precision(), 5);
        assert_eq!(dec("0.00042").precision(), 2);
        assert_eq!(dec("99999999999999999999").precision(), 20);
        assert_eq!(dec("100000000000000000000").precision(), 21);
    }

    #[test]
    fn round_half_up_with_carry() {
        let mc = MathContext::half_up(3);
        assert_eq!(dec("1.2345").round(&mc).to_string(), "1.23");
        assert_eq!(dec("1.2350").round(&mc).to_string(), "1.24");
        assert_eq!(dec("-1.2350").round(&mc).to_string(), "-1.24");
        assert_eq!(dec("99.96").round(&mc).to_string(), "100");
        assert_eq!(dec("12").round(&mc).to_string(), "12");
    }

    #[test]
    fn round_half_even() {
        let mc = MathContext::new(2, RoundingMode::HalfEven).unwrap();
        assert_eq!(dec("2.25").round(&mc).to_string(), "2.2");
        assert_eq!(dec("2.35").round(&mc).to_string(), "2.4");
        assert_eq!(dec("2.2501").round(&mc).to_string(), "2.3");
    }

    #[test]
    fn arithmetic_is_rounded_to_context() {
        let mc = MathContext::half_up(5);
        assert_eq!(dec("1.23456").add(&dec("1"), &mc).to_string(), "2.2346");
        assert_eq!(dec("10").sub(&dec("0.001"), &mc).to_string(), "9.999");
        assert_eq!(dec("1.5").mul(&dec("1.5"), &mc).unwrap().to_string(), "2.25");
        assert_eq!(dec("0.1").add_exact(&dec("0.02")).to_string(), "0.12");
    }

    #[test]
    fn division() {
        let mc = MathContext::DEFAULT;
        let third = format!("0.{}", "3".repeat(32));
        assert_eq!(dec("1").div(&dec("3"), &mc).unwrap().to_string(), third);
        let two_thirds = format!("0.{}7", "6".repeat(31));
        assert_eq!(dec("2").div(&dec("3"), &mc).unwrap().to_string(), two_thirds);
        assert_eq!(dec("100000000").div(&dec("100"), &mc).unwrap().to_string(), "1000000");
        assert_eq!(dec("1").div(&dec("8"), &MathContext::half_up(2)).unwrap().to_string(), "0.13");
        assert_eq!(dec("-7.5").div(&dec("2.5"), &mc).unwrap().to_string(), "-3");
        assert!(dec("1").div(&dec("0.000"), &mc).is_none());
    }

    #[test]
    fn remainder_takes_sign_of_dividend() {
        let mc = MathContext::DEFAULT;
        assert_eq!(dec("7").rem(&dec("3"), &mc).unwrap(), dec("1"));
        assert_eq!(dec("-7").rem(&dec("3"), &mc).unwrap(), dec("-1"));
        assert_eq!(dec("5.5").rem(&dec("2"), &mc).unwrap(), dec("1.5"));
        assert!(dec("5").rem(&BigDecimal::zero(), &mc).is_none());
    }

    #[test]
    fn integer_powers() {
        let mc = MathContext::DEFAULT;
        assert_eq!(dec("0.2").pow(5, &mc).unwrap(), dec("0.00032"));
        assert_eq!(dec("2").pow(-2, &mc).unwrap(), dec("0.25"));
        assert_eq!(dec("7").pow(0, &mc).unwrap(), BigDecimal::one());
        assert!(BigDecimal::zero().pow(-1, &mc).is_none());
    }

    #[test]
    fn scale_changes() {
        assert_eq!(dec("-2.5").with_scale(0, RoundingMode::Floor), dec("-3"));
        assert_eq!(dec("-2.5").with_scale(0, RoundingMode::Ceiling), dec("-2"));
        assert_eq!(dec("2.5").with_scale(2, RoundingMode::Floor).to_string(), "2.50");
        assert_eq!(dec("-2.75").fractional_part(), dec("-0.75"));
        assert_eq!(dec("12").to_i32_exact(), Some(12));
        assert_eq!(dec("12.5").to_i32_exact(), None);
        assert_eq!(dec("1E+20").to_i32_exact(), None);
    }

    #[test]
    fn comparison_ignores_scale() {
        assert_eq!(dec("1.0"), dec("1"));
        assert!(dec("-0.5") < dec("0.1"));
        assert!(dec("1E+3") > dec("999.999"));
        assert_eq!(dec("-0.0"), BigDecimal::zero());
    }

    #[test]
    fn float_conversions() {
        assert_eq!(BigDecimal::from_f64(0.1).unwrap().to_string(), "0.1");
        assert_eq!(BigDecimal::from_f32(0.1).unwrap().to_string(), "0.1");
        assert_eq!(BigDecimal::from_f64(-0.0).unwrap(), BigDecimal::zero());
        assert!(BigDecimal::from_f64(f64::NAN).is_err());
        assert!(BigDecimal::from_f64(f64::INFINITY).is_err());
        assert_eq!(dec("1.5E+3").to_f64(), 1500.0);
        assert_eq!(dec("-12.99").to_i64_saturating(), -12);
    }

    #[test]
    fn scientific_estimate_rounds_to_two_digits() {
        assert_eq!(dec("3E11").scientific_estimate(), (30, 11));
        assert_eq!(dec("2").scientific_estimate(), (20, 0));
        assert_eq!(dec("0.0123").scientific_estimate(), (12, -2));
        assert_eq!(dec("9.96").scientific_estimate(), (10, 1));
    }
}
