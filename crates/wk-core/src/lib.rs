//! # wk-core
//!
//! Core types, traits, and error definitions for weekend-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: scalar type aliases, the error taxonomy,
//! the [`Clock`] capability used wherever "now" is needed, and the
//! weekday arithmetic both the calendar and progress crates build on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Injectable clocks (system and fixed).
pub mod clock;

/// Weekend checks and weekday-anchored date arithmetic.
pub mod weekday;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for ratios and percentages.
pub type Real = f64;

/// Signed integer type used for caller-supplied counts.
pub type Integer = i32;

/// A year in the proleptic Gregorian calendar.
pub type Year = i32;

/// An hour of the day (0–23).
pub type Hour = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
