//! Family factories.
//!
//! A [`NumFactory`] manufactures constants and parsed values of one family
//! so that a pipeline can be configured once (double, or decimal at some
//! precision) and every value it creates stays in that family.

use ta_core::{define_singleton, Result};

use crate::any_num::AnyNum;
use crate::big_decimal::BigDecimal;
use crate::decimal::Decimal;
use crate::math_context::MathContext;
use crate::num::{Num, Primitive};
use crate::number::{DecimalNum, DoubleNum, Number};
use crate::representation::Representation;

/// Manufactures values of a single family.
pub trait NumFactory: Send + Sync {
    /// The family produced.
    type Num: Num;

    /// A value of the family.
    ///
    /// # Errors
    /// `Error::InvalidLiteral` for a floating NaN.
    fn try_num_of(&self, value: impl Into<Primitive>) -> Result<Self::Num>;

    /// Parse a literal into the family.
    ///
    /// # Errors
    /// `Error::InvalidLiteral` for `"NaN"`, `Error::Parse` for other
    /// malformed text.
    fn num_of_str(&self, literal: &str) -> Result<Self::Num>;

    /// `true` if `num` belongs to this factory's family. NaN belongs to
    /// every family.
    fn produces(&self, num: &AnyNum) -> bool;

    /// A value of the family.
    ///
    /// # Panics
    /// For a floating NaN.
    fn num_of(&self, value: impl Into<Primitive>) -> Self::Num {
        self.try_num_of(value).unwrap_or_else(|e| panic!("{e}"))
    }

    /// -1
    fn minus_one(&self) -> Self::Num {
        self.num_of(-1)
    }

    /// 0
    fn zero(&self) -> Self::Num {
        self.num_of(0)
    }

    /// 1
    fn one(&self) -> Self::Num {
        self.num_of(1)
    }

    /// 2
    fn two(&self) -> Self::Num {
        self.num_of(2)
    }

    /// 3
    fn three(&self) -> Self::Num {
        self.num_of(3)
    }

    /// 100
    fn hundred(&self) -> Self::Num {
        self.num_of(100)
    }

    /// 1000
    fn thousand(&self) -> Self::Num {
        self.num_of(1000)
    }
}

/// Factory for [`DoubleNum`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleNumFactory;

impl NumFactory for DoubleNumFactory {
    type Num = DoubleNum;

    fn try_num_of(&self, value: impl Into<Primitive>) -> Result<DoubleNum> {
        DoubleNum::ZERO.try_num_of(value)
    }

    fn num_of_str(&self, literal: &str) -> Result<DoubleNum> {
        DoubleNum::parse(literal, None)
    }

    fn produces(&self, num: &AnyNum) -> bool {
        matches!(num, AnyNum::Double(_) | AnyNum::NaN)
    }

    fn zero(&self) -> DoubleNum {
        DoubleNum::ZERO
    }

    fn one(&self) -> DoubleNum {
        DoubleNum::ONE
    }

    fn hundred(&self) -> DoubleNum {
        DoubleNum::HUNDRED
    }
}

/// Constants of the decimal family at the default precision.
struct DefaultDecimals {
    minus_one: DecimalNum,
    zero: DecimalNum,
    one: DecimalNum,
    two: DecimalNum,
    three: DecimalNum,
    hundred: DecimalNum,
    thousand: DecimalNum,
}

impl DefaultDecimals {
    fn build() -> Self {
        let of = |v: i64| DecimalNum::from(v);
        Self {
            minus_one: of(-1),
            zero: of(0),
            one: of(1),
            two: of(2),
            three: of(3),
            hundred: of(100),
            thousand: of(1000),
        }
    }
}

define_singleton!(DEFAULT_DECIMALS, DefaultDecimals, DefaultDecimals::build());

/// Factory for [`DecimalNum`] at a fixed context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalNumFactory {
    context: MathContext,
}

impl DecimalNumFactory {
    /// A factory rounding parsed literals to `precision` digits, half-up.
    /// A zero precision is bumped to one digit.
    pub fn with_precision(precision: u32) -> Self {
        Self {
            context: MathContext::half_up(precision),
        }
    }

    /// A factory for an explicit context.
    pub fn with_context(context: MathContext) -> Self {
        Self { context }
    }

    /// The context of produced values.
    pub fn context(&self) -> MathContext {
        self.context
    }

    fn is_default(&self) -> bool {
        self.context == MathContext::DEFAULT
    }

    fn cached(&self, pick: fn(&DefaultDecimals) -> &DecimalNum, value: i64) -> DecimalNum {
        if self.is_default() {
            pick(&DEFAULT_DECIMALS).clone()
        } else {
            self.num_of(value)
        }
    }
}

impl NumFactory for DecimalNumFactory {
    type Num = DecimalNum;

    fn try_num_of(&self, value: impl Into<Primitive>) -> Result<DecimalNum> {
        Decimal::new(BigDecimal::zero(), self.context)
            .from_primitive_like(value.into())
            .map(Number::from_repr)
    }

    fn num_of_str(&self, literal: &str) -> Result<DecimalNum> {
        DecimalNum::parse_in(literal, self.context)
    }

    fn produces(&self, num: &AnyNum) -> bool {
        matches!(num, AnyNum::Decimal(_) | AnyNum::NaN)
    }

    fn minus_one(&self) -> DecimalNum {
        self.cached(|c| &c.minus_one, -1)
    }

    fn zero(&self) -> DecimalNum {
        self.cached(|c| &c.zero, 0)
    }

    fn one(&self) -> DecimalNum {
        self.cached(|c| &c.one, 1)
    }

    fn two(&self) -> DecimalNum {
        self.cached(|c| &c.two, 2)
    }

    fn three(&self) -> DecimalNum {
        self.cached(|c| &c.three, 3)
    }

    fn hundred(&self) -> DecimalNum {
        self.cached(|c| &c.hundred, 100)
    }

    fn thousand(&self) -> DecimalNum {
        self.cached(|c| &c.thousand, 1000)
    }
}
