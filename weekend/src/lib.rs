//! # weekend
//!
//! How far is it to the weekend?
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates, plus the pieces of the `weekend` command-line
//! report: settings, logging setup, and message formatting.
//!
//! ```rust
//! use weekend::progress::make_progressbar;
//!
//! assert_eq!(make_progressbar(0.5, 5).unwrap(), "[##=--]");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and clocks.
pub use wk_core as core;

/// Holiday calendars and the next-holiday lookup.
pub use wk_calendar as calendar;

/// Weekend progress, duration wording, and progress bars.
pub use wk_progress as progress;

/// Command-line settings.
pub mod config;

/// Logging setup for the binary.
pub mod logging;

/// The weekend report and its messages.
pub mod report;
