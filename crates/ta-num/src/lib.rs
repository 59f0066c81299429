//! # ta-num
//!
//! The numeric kernel of ta4rs. Indicators and rules compute through the
//! [`Num`] contract and stay agnostic of the family behind it:
//!
//! * [`DoubleNum`]: native `f64` arithmetic, tolerant equality.
//! * [`DecimalNum`]: arbitrary-precision decimals with a per-value
//!   [`MathContext`], custom square root and logarithm.
//! * [`NaN`]: the undefined value shared by every family.
//!
//! ```
//! use ta_num::{DecimalNum, Num};
//!
//! let two: DecimalNum = "2".parse()?;
//! let root = two.sqrt_with_precision(50);
//! assert!(root.to_string().starts_with("1.41421356237309504880168872420969807856967187537"));
//! assert!(two.divided_by(&two.zero()).is_nan());
//! # Ok::<(), ta_num::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Dynamic-family numbers.
pub mod any_num;

/// Arbitrary-precision decimal values.
pub mod big_decimal;

/// Floating-point comparison utilities.
pub mod comparison;

/// Arbitrary-precision representation.
pub mod decimal;

/// Double-backed representation.
pub mod double;

/// Family factories.
pub mod factory;

/// Precision and rounding context.
pub mod math_context;

/// The NaN sentinel.
pub mod nan;

/// The `Num` contract.
pub mod num;

/// `Number<R>`, the generic family wrapper.
pub mod number;

/// Operator overloads.
pub mod ops;

/// Representation trait.
pub mod representation;

#[cfg(feature = "serde")]
mod serde_support;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use any_num::{AnyNum, BinaryOp};
pub use big_decimal::BigDecimal;
pub use decimal::Decimal;
pub use double::Double;
pub use factory::{DecimalNumFactory, DoubleNumFactory, NumFactory};
pub use math_context::{MathContext, RoundingMode, DEFAULT_PRECISION};
pub use nan::NaN;
pub use num::{is_nan_or_none, is_valid, Num, Primitive};
pub use number::{DecimalNum, DoubleNum, Number};
pub use representation::Representation;
pub use ta_core::{Error, Result};
