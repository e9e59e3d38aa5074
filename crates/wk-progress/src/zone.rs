//! The time zone a weekend is measured in.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use wk_core::errors::{Error, Result};
use wk_core::Clock;

/// The zone used when none is configured.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Warsaw;

/// Either a named IANA zone or the system's local zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// An IANA zone such as `Europe/Warsaw`.
    Named(Tz),
    /// Whatever zone the operating system is configured with.
    Local,
}

impl Zone {
    /// Resolve an optional zone name.
    ///
    /// `None` and the empty string select [`Zone::Local`]; anything else must
    /// be an IANA name.
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        match name.map(str::trim) {
            None | Some("") => Ok(Zone::Local),
            Some(name) => name
                .parse::<Tz>()
                .map(Zone::Named)
                .map_err(|_| Error::UnknownTimeZone(name.to_string())),
        }
    }

    /// The current date in this zone according to `clock`.
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        let now = clock.now();
        match self {
            Zone::Named(tz) => now.with_timezone(tz).date_naive(),
            Zone::Local => now.with_timezone(&Local).date_naive(),
        }
    }
}

impl Default for Zone {
    fn default() -> Self {
        Zone::Named(DEFAULT_TIME_ZONE)
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Zone::from_name(Some(s))
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Local => f.write_str("local"),
        }
    }
}

/// Read the wall-clock fields of `wall` as a time in `zone`.
///
/// No conversion happens: `15:20` stays `15:20`.  An ambiguous wall time
/// (clocks turned back) resolves to the earlier instant; one that does not
/// exist (clocks turned forward) moves forward by the hour that was skipped.
pub fn attach<Z: TimeZone>(zone: &Z, wall: NaiveDateTime) -> Result<DateTime<Z>> {
    (0..=2)
        .filter_map(|h| wall.checked_add_signed(Duration::hours(h)))
        .find_map(|t| zone.from_local_datetime(&t).earliest())
        .ok_or_else(|| Error::Date(format!("{wall} does not exist in the requested time zone")))
}
