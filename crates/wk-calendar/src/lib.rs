//! # wk-calendar
//!
//! Public-holiday calendars per country, and the search for the next holiday
//! that does not fall on a weekend.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait, `Holiday`, and the `HolidayList` builder.
pub mod calendar;

/// Concrete calendar implementations (country specific).
pub mod calendars;

/// Easter Sunday and Easter-relative dates.
pub mod easter;

/// Next non-weekend holiday lookup.
pub mod lookup;

/// `CalendarRegistry`, the country-code keyed holiday provider.
pub mod registry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Holiday, HolidayCalendar, HolidayList};
pub use easter::{easter_offset, easter_sunday};
pub use lookup::next_non_weekend_holiday;
pub use registry::{CalendarRegistry, HolidayProvider};
