//! Tolerant floating-point comparison.

/// Absolute tolerance under which two doubles count as equal.
pub const EPSILON: f64 = 1e-5;

/// Return `true` if `a == b` or `|a - b| < epsilon`.
///
/// The identity check comes first so equal infinities compare equal.
#[inline]
pub fn close(a: f64, b: f64, epsilon: f64) -> bool {
    a == b || (a - b).abs() < epsilon
}
