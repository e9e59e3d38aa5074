//! The weekend report: progress plus the next holiday per country.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use tracing::debug;
use wk_calendar::{next_non_weekend_holiday, Holiday, HolidayProvider};
use wk_core::errors::Result;
use wk_core::{Clock, Integer, Real};
use wk_progress::{ProgressBar, WeekendProgress, WeekendProgressCalculator};

use crate::config::Settings;

/// Everything the `weekend` binary prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Zone the report was computed in.
    pub zone: String,
    /// Whether it is currently the weekend.
    pub weekend: bool,
    /// Signed progress ratio (negative during the weekend).
    pub ratio: Real,
    /// Remaining time in words.
    pub remaining: String,
    /// Start of the current window.
    pub window_start: DateTime<FixedOffset>,
    /// End of the current window.
    pub window_end: DateTime<FixedOffset>,
    /// The progress line.
    pub message: String,
    /// Next holiday per configured country.
    pub holidays: Vec<NextHoliday>,
}

/// The next non-weekend holiday of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextHoliday {
    /// Country code.
    pub country: String,
    /// Date of the holiday.
    pub date: NaiveDate,
    /// Localized name.
    pub name: String,
    /// Calendar days from today.
    pub days_until: i64,
}

impl NextHoliday {
    /// Pair `holiday` with its country and its distance from `today`.
    pub fn new(country: &str, holiday: Holiday, today: NaiveDate) -> Self {
        NextHoliday {
            country: country.to_string(),
            days_until: (holiday.date - today).num_days(),
            date: holiday.date,
            name: holiday.name,
        }
    }

    /// `Next holiday for PL: 2019-04-22 (Poniedziałek Wielkanocny, in 73 days)`.
    pub fn message(&self) -> String {
        let plural = if self.days_until == 1 { "" } else { "s" };
        format!(
            "Next holiday for {}: {} ({}, in {} day{plural})",
            self.country,
            self.date.format("%Y-%m-%d"),
            self.name,
            self.days_until
        )
    }
}

impl Report {
    /// All lines of the plain-text report.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.message.clone()).chain(self.holidays.iter().map(NextHoliday::message))
    }
}

/// The progress line: a countdown with a bar on work days, the share of the
/// weekend left during the weekend.
pub fn progress_message(
    progress: &WeekendProgress,
    bar: &ProgressBar,
    bars: Integer,
) -> Result<String> {
    let percent = progress.ratio.abs() * 100.0;
    if progress.is_weekend() {
        Ok(format!(
            "It's WEEKEND, and there's {} ({percent:.2}%) of it remaining!",
            progress.remaining_description
        ))
    } else {
        Ok(format!(
            "{} remaining until weekend... {percent:.2}% {}",
            progress.remaining_description,
            bar.render(progress.ratio, bars)?
        ))
    }
}

/// Build the report for `settings`, reading "now" from `clock` unless the
/// settings fix it.
pub fn build_report<C, P>(settings: &Settings, clock: C, provider: &P) -> Result<Report>
where
    C: Clock,
    P: HolidayProvider + ?Sized,
{
    let today = match settings.at {
        Some(wall) => wall.date(),
        None => settings.zone.today(&clock),
    };

    let progress = WeekendProgressCalculator::with_clock(clock)
        .with_zone(settings.zone)
        .with_schedule(settings.schedule)
        .compute(settings.at)?;
    debug!(ratio = progress.ratio, weekend = progress.is_weekend(), "weekend progress");

    let holidays = settings
        .countries
        .iter()
        .map(|country| {
            next_non_weekend_holiday(provider, today, country)
                .map(|holiday| NextHoliday::new(country, holiday, today))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Report {
        zone: settings.zone.to_string(),
        weekend: progress.is_weekend(),
        ratio: progress.ratio,
        message: progress_message(&progress, &ProgressBar::default(), settings.bars)?,
        remaining: progress.remaining_description,
        window_start: progress.window_start,
        window_end: progress.window_end,
        holidays,
    })
}
