//! # ta4rs
//!
//! Numeric kernel of a technical-analysis toolkit.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ta-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ta4rs = "0.1"
//! ```
//!
//! ```rust
//! use ta4rs::num::{DecimalNumFactory, DoubleNum, Num, NumFactory};
//!
//! let closes = [10.0, 10.5, 11.25];
//! let factory = DecimalNumFactory::with_precision(40);
//! let sum = closes
//!     .iter()
//!     .fold(factory.zero(), |acc, c| acc.plus(&factory.num_of(*c)));
//! assert_eq!(sum.to_string(), "31.75");
//!
//! let fast = DoubleNum::of(31.75);
//! assert!(fast.is_equal(&DoubleNum::of(31.750001)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared patterns.
pub use ta_core as core;

/// The `Num` contract, its families and the NaN sentinel.
pub use ta_num as num;
