//! Singleton pattern.
//!
//! Process-wide immutable values (family constants such as a decimal zero)
//! are built on first access and never change afterwards. The idiomatic
//! container for that is `std::sync::LazyLock<T>`.
//!
//! This module re-exports `LazyLock` and provides a convenience macro
//! [`define_singleton!`] for declaring such values.

/// Re-export `LazyLock` as the canonical singleton container.
pub use std::sync::LazyLock;

/// Define a lazily-initialised immutable singleton of type `$ty`.
///
/// An optional visibility comes first; without it the static is private to
/// the declaring module.
///
/// # Example
/// ```
/// use ta_core::define_singleton;
///
/// struct Constants { names: Vec<&'static str> }
/// define_singleton!(pub CONSTANTS, Constants, Constants { names: vec!["zero", "one"] });
///
/// assert_eq!(CONSTANTS.names.len(), 2);
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($vis:vis $name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised immutable singleton.
        $vis static $name: std::sync::LazyLock<$ty> = std::sync::LazyLock::new(|| $init);
    };
}
