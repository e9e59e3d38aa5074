//! Progress through the week relative to the weekend.
//!
//! The weekend begins on Friday at `start_hour` and ends on Monday at
//! `end_hour`:
//!
//! ```text
//!           MONDAY                           FRIDAY               MONDAY
//!         end_hour                           start_hour           end_hour
//!                |                           |                    |
//!                |<--progress-->|            |                    |
//! ---------------|------- >> now >> ---------|--------------------|-----
//! ---WEEKEND---->|----work days (ratio ≥ 0)->|--WEEKEND (ratio<0)>|-----
//! ```
//!
//! On work days the ratio is the elapsed share of the work week, in
//! `[0, 1)`.  During the weekend it is minus the share of the weekend that
//! is still left, in `[-1, 0)`: `-1` at the moment the weekend starts,
//! climbing towards `0` as Monday approaches.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Weekday,
};
use tracing::trace;
use wk_core::errors::{Error, Result};
use wk_core::weekday::{next_weekday, previous_weekday};
use wk_core::{ensure, Clock, Hour, Real, SystemClock};

use crate::words::duration_in_words;
use crate::zone::{attach, Zone};

/// When the weekend starts (Friday) and ends (Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendSchedule {
    start_hour: Hour,
    end_hour: Hour,
}

impl WeekendSchedule {
    /// Friday hour at which the weekend starts by default.
    pub const DEFAULT_START_HOUR: Hour = 17;

    /// Monday hour at which the weekend ends by default.
    pub const DEFAULT_END_HOUR: Hour = 9;

    /// A schedule starting the weekend on Friday at `start_hour` and ending
    /// it on Monday at `end_hour`.  Both hours must be in `0..=23`.
    pub fn new(start_hour: Hour, end_hour: Hour) -> Result<Self> {
        ensure!(start_hour < 24, "Invalid weekend start hour: {start_hour}");
        ensure!(end_hour < 24, "Invalid weekend end hour: {end_hour}");
        Ok(WeekendSchedule {
            start_hour,
            end_hour,
        })
    }

    /// Friday hour the weekend starts at.
    pub fn start_hour(&self) -> Hour {
        self.start_hour
    }

    /// Monday hour the weekend ends at.
    pub fn end_hour(&self) -> Hour {
        self.end_hour
    }
}

impl Default for WeekendSchedule {
    fn default() -> Self {
        WeekendSchedule {
            start_hour: Self::DEFAULT_START_HOUR,
            end_hour: Self::DEFAULT_END_HOUR,
        }
    }
}

/// Where "now" sits relative to the weekend.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekendProgress {
    /// Signed progress ratio; negative during the weekend.
    pub ratio: Real,
    /// Time left until the next boundary (weekend start on work days,
    /// weekend end during the weekend).
    pub remaining: Duration,
    /// [`remaining`](Self::remaining) in words, e.g. `"1 hour 40 minutes"`.
    pub remaining_description: String,
    /// Length of the current window: the work week on work days, the
    /// weekend during the weekend.
    pub total_window: Duration,
    /// Start of the current window.
    pub window_start: DateTime<FixedOffset>,
    /// End of the current window.
    pub window_end: DateTime<FixedOffset>,
    weekend: bool,
}

impl WeekendProgress {
    /// Return `true` if "now" is inside the weekend.
    pub fn is_weekend(&self) -> bool {
        self.weekend
    }

    /// The ratio as a whole percentage, rounded half away from zero.
    pub fn percent(&self) -> i64 {
        (self.ratio * 100.0).round() as i64
    }
}

/// Compute the weekend progress at `now`, in `now`'s own time zone.
pub fn weekend_progress_at<Z: TimeZone>(
    now: &DateTime<Z>,
    schedule: &WeekendSchedule,
) -> Result<WeekendProgress> {
    let zone = now.timezone();
    let today = now.date_naive();
    let start_offset = Duration::hours(i64::from(schedule.start_hour));
    let end_offset = Duration::hours(i64::from(schedule.end_hour));

    // (is weekend, day of the Monday boundary, day of the Friday boundary)
    let (weekend, end_day, start_day) = match today.weekday() {
        Weekday::Mon => {
            let weekend = *now < at_offset(&zone, today, end_offset)?;
            let friday = if weekend {
                previous_weekday(today, Weekday::Fri)?
            } else {
                next_weekday(today, Weekday::Fri)?
            };
            (weekend, today, friday)
        }
        Weekday::Tue | Weekday::Wed | Weekday::Thu => (
            false,
            previous_weekday(today, Weekday::Mon)?,
            next_weekday(today, Weekday::Fri)?,
        ),
        Weekday::Fri => {
            let weekend = *now >= at_offset(&zone, today, start_offset)?;
            let monday = if weekend {
                next_weekday(today, Weekday::Mon)?
            } else {
                previous_weekday(today, Weekday::Mon)?
            };
            (weekend, monday, today)
        }
        Weekday::Sat | Weekday::Sun => (
            true,
            next_weekday(today, Weekday::Mon)?,
            previous_weekday(today, Weekday::Fri)?,
        ),
    };

    let end = at_offset(&zone, end_day, end_offset)?;
    let start = at_offset(&zone, start_day, start_offset)?;

    let (elapsed, remaining, total_window, window_start, window_end) = if weekend {
        let remaining = end.clone() - now.clone();
        (remaining, remaining, end.clone() - start.clone(), start, end)
    } else {
        (
            now.clone() - end.clone(),
            start.clone() - now.clone(),
            start.clone() - end.clone(),
            end,
            start,
        )
    };

    let ratio = elapsed.num_milliseconds() as Real / total_window.num_milliseconds() as Real;
    let ratio = if weekend { -ratio } else { ratio };

    let window_start = window_start.fixed_offset();
    let window_end = window_end.fixed_offset();
    trace!(
        %today,
        weekend,
        %window_start,
        %window_end,
        ratio,
        "weekend window"
    );

    Ok(WeekendProgress {
        ratio,
        remaining,
        remaining_description: duration_in_words(remaining),
        total_window,
        window_start,
        window_end,
        weekend,
    })
}

/// `offset` after the first instant of `date` in `zone`.
fn at_offset<Z: TimeZone>(zone: &Z, date: NaiveDate, offset: Duration) -> Result<DateTime<Z>> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::Date(format!("{date} has no midnight")))?;
    attach(zone, midnight)?
        .checked_add_signed(offset)
        .ok_or_else(|| Error::Date(format!("{date} + {offset} is out of range")))
}

/// Computes weekend progress for a zone and schedule, reading "now" from a
/// [`Clock`] unless one is supplied.
#[derive(Debug, Clone, Default)]
pub struct WeekendProgressCalculator<C = SystemClock> {
    clock: C,
    zone: Zone,
    schedule: WeekendSchedule,
}

impl WeekendProgressCalculator<SystemClock> {
    /// A calculator on the system clock, the default zone and the default
    /// schedule.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> WeekendProgressCalculator<C> {
    /// A calculator reading "now" from `clock`.
    pub fn with_clock(clock: C) -> Self {
        WeekendProgressCalculator {
            clock,
            zone: Zone::default(),
            schedule: WeekendSchedule::default(),
        }
    }

    /// Measure in `zone`.
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Use `schedule` for the weekend boundaries.
    pub fn with_schedule(mut self, schedule: WeekendSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Compute the progress.
    ///
    /// With `now = None` the clock's current instant is converted into the
    /// zone.  A supplied `now` is a wall-clock time that is read as a time
    /// in the zone, without conversion.
    pub fn compute(&self, now: Option<NaiveDateTime>) -> Result<WeekendProgress> {
        match self.zone {
            Zone::Named(tz) => self.compute_in(&tz, now),
            Zone::Local => self.compute_in(&Local, now),
        }
    }

    /// Compute the progress at `now`'s wall-clock time read in this
    /// calculator's zone.
    ///
    /// `now`'s own offset is discarded: 15:20 UTC is treated as 15:20 in
    /// the configured zone, not converted to it.
    pub fn compute_for<Z: TimeZone>(&self, now: &DateTime<Z>) -> Result<WeekendProgress> {
        self.compute(Some(now.naive_local()))
    }

    fn compute_in<Z: TimeZone>(
        &self,
        zone: &Z,
        now: Option<NaiveDateTime>,
    ) -> Result<WeekendProgress> {
        let now = match now {
            Some(wall) => attach(zone, wall)?,
            None => self.clock.now().with_timezone(zone),
        };
        weekend_progress_at(&now, &self.schedule)
    }
}

/// Compute the weekend progress on the system clock.
///
/// See [`WeekendProgressCalculator::compute`] for how `now` is read.
pub fn get_weekend_progress(
    now: Option<NaiveDateTime>,
    zone: Zone,
    schedule: WeekendSchedule,
) -> Result<WeekendProgress> {
    WeekendProgressCalculator::new()
        .with_zone(zone)
        .with_schedule(schedule)
        .compute(now)
}
