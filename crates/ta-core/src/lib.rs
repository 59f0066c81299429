//! # ta-core
//!
//! Core error definitions and shared patterns for ta4rs.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: the error hierarchy with its `ensure!`
//! macro, and the lazily-initialised singleton pattern used for per-family
//! numeric constants.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Design patterns: singleton.
pub mod patterns;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
