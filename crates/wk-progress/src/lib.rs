//! # wk-progress
//!
//! How far the week has progressed towards (or through) the weekend, the
//! remaining time in words, and ASCII progress bars to display the ratio.
//!
//! ```
//! use chrono::NaiveDate;
//! use wk_progress::{get_weekend_progress, make_progressbar, WeekendSchedule, Zone};
//!
//! // Friday 2019-02-08, 15:20 in Europe/Warsaw
//! let now = NaiveDate::from_ymd_opt(2019, 2, 8)
//!     .unwrap()
//!     .and_hms_opt(15, 20, 0)
//!     .unwrap();
//! let progress =
//!     get_weekend_progress(Some(now), Zone::default(), WeekendSchedule::default()).unwrap();
//!
//! assert!(!progress.is_weekend());
//! assert_eq!(progress.remaining_description, "1 hour 40 minutes");
//! assert_eq!(make_progressbar(progress.ratio, 10).unwrap(), "[#########=]");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// ASCII progress bars.
pub mod progress_bar;

/// Weekend schedule and progress computation.
pub mod weekend;

/// Durations in words.
pub mod words;

/// Time zone selection and wall-clock attachment.
pub mod zone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use progress_bar::{make_progressbar, BarSegments, ProgressBar, DEFAULT_BARS};
pub use weekend::{
    get_weekend_progress, weekend_progress_at, WeekendProgress, WeekendProgressCalculator,
    WeekendSchedule,
};
pub use words::duration_in_words;
pub use zone::{attach, Zone, DEFAULT_TIME_ZONE};
