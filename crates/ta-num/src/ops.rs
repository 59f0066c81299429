//! Operator overloads forwarding to the [`Num`] methods.
//!
//! `a + b` is `a.plus(&b)`, `a % b` is `a.remainder(&b)` and so on, for
//! owned operands and for references. NaN contagion and the family rules
//! are exactly those of the methods.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::any_num::AnyNum;
use crate::num::Num;
use crate::number::Number;
use crate::representation::Representation;

macro_rules! forward_binary {
    ($op:ident, $method:ident, $num_method:ident) => {
        impl<R: Representation> $op for Number<R> {
            type Output = Number<R>;
            fn $method(self, rhs: Number<R>) -> Number<R> {
                self.$num_method(&rhs)
            }
        }

        impl<R: Representation> $op for &Number<R> {
            type Output = Number<R>;
            fn $method(self, rhs: Self) -> Number<R> {
                self.$num_method(rhs)
            }
        }

        impl $op for AnyNum {
            type Output = AnyNum;
            fn $method(self, rhs: AnyNum) -> AnyNum {
                self.$num_method(&rhs)
            }
        }

        impl $op for &AnyNum {
            type Output = AnyNum;
            fn $method(self, rhs: Self) -> AnyNum {
                self.$num_method(rhs)
            }
        }
    };
}

// ── Arithmetic ───────────────────────────────────────────────────────────────

forward_binary!(Add, add, plus);
forward_binary!(Sub, sub, minus);
forward_binary!(Mul, mul, multiplied_by);
forward_binary!(Div, div, divided_by);
forward_binary!(Rem, rem, remainder);

// ── Negation ─────────────────────────────────────────────────────────────────

impl<R: Representation> Neg for Number<R> {
    type Output = Number<R>;
    fn neg(self) -> Number<R> {
        self.negate()
    }
}

impl<R: Representation> Neg for &Number<R> {
    type Output = Number<R>;
    fn neg(self) -> Number<R> {
        self.negate()
    }
}

impl Neg for AnyNum {
    type Output = AnyNum;
    fn neg(self) -> AnyNum {
        self.negate()
    }
}

impl Neg for &AnyNum {
    type Output = AnyNum;
    fn neg(self) -> AnyNum {
        self.negate()
    }
}
