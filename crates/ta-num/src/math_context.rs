//! Precision and rounding context for arbitrary-precision arithmetic.
//!
//! A [`MathContext`] is carried by every decimal value: it fixes how many
//! significant digits a result keeps and how the discarded digits are
//! rounded away.

use std::cmp::Ordering;

use ta_core::{ensure, Result};

/// Number of significant digits used when no precision is requested.
pub const DEFAULT_PRECISION: u32 = 32;

/// Rounding convention applied when digits are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// To nearest, ties away from zero.
    #[default]
    HalfUp,
    /// To nearest, ties towards zero.
    HalfDown,
    /// To nearest, ties to the even neighbour.
    HalfEven,
}

impl RoundingMode {
    /// Decide whether a truncated magnitude must be bumped away from zero.
    ///
    /// `half` compares the discarded fraction with one half of a unit in the
    /// last kept place. `odd` tells whether the kept last digit is odd. The
    /// caller only asks when the discarded fraction is non-zero.
    pub(crate) fn rounds_away(self, negative: bool, half: Ordering, odd: bool) -> bool {
        match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half != Ordering::Less,
            RoundingMode::HalfDown => half == Ordering::Greater,
            RoundingMode::HalfEven => {
                half == Ordering::Greater || (half == Ordering::Equal && odd)
            }
        }
    }
}

/// Significant-digit precision plus rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// 32 significant digits, half-up.
    pub const DEFAULT: MathContext = MathContext::half_up(DEFAULT_PRECISION);

    /// Create a context.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if `precision` is zero.
    pub fn new(precision: u32, rounding: RoundingMode) -> Result<Self> {
        ensure!(precision > 0, "precision must be greater than zero");
        Ok(Self {
            precision,
            rounding,
        })
    }

    /// A half-up context; a zero precision is bumped to one digit.
    pub const fn half_up(precision: u32) -> Self {
        Self {
            precision: if precision == 0 { 1 } else { precision },
            rounding: RoundingMode::HalfUp,
        }
    }

    /// Significant digits kept by results.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding mode applied to discarded digits.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The same rounding with `extra` more digits.
    pub fn widened(&self, extra: u32) -> Self {
        Self {
            precision: self.precision.saturating_add(extra),
            rounding: self.rounding,
        }
    }

    /// The context with the greater precision; `self` wins a tie.
    pub fn wider(self, other: MathContext) -> MathContext {
        if other.precision > self.precision {
            other
        } else {
            self
        }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_precision_rejected() {
        assert!(MathContext::new(0, RoundingMode::HalfUp).is_err());
        assert_eq!(MathContext::half_up(0).precision(), 1);
    }

    #[test]
    fn wider_prefers_receiver_on_tie() {
        let a = MathContext::new(16, RoundingMode::HalfUp).unwrap();
        let b = MathContext::new(16, RoundingMode::Floor).unwrap();
        assert_eq!(a.wider(b).rounding(), RoundingMode::HalfUp);
        assert_eq!(a.wider(MathContext::DEFAULT).precision(), 32);
    }

    #[test]
    fn half_modes_differ_only_on_ties() {
        use Ordering::*;
        assert!(RoundingMode::HalfUp.rounds_away(false, Equal, false));
        assert!(!RoundingMode::HalfDown.rounds_away(false, Equal, false));
        assert!(!RoundingMode::HalfEven.rounds_away(false, Equal, false));
        assert!(RoundingMode::HalfEven.rounds_away(false, Equal, true));
        assert!(RoundingMode::HalfDown.rounds_away(true, Greater, false));
    }

    #[test]
    fn directed_modes_follow_sign() {
        use Ordering::*;
        assert!(RoundingMode::Ceiling.rounds_away(false, Less, false));
        assert!(!RoundingMode::Ceiling.rounds_away(true, Greater, false));
        assert!(RoundingMode::Floor.rounds_away(true, Less, false));
        assert!(RoundingMode::Up.rounds_away(true, Less, false));
        assert!(!RoundingMode::Down.rounds_away(false, Greater, true));
    }
}
