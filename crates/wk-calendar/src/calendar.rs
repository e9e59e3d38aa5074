//! `HolidayCalendar` trait, the `Holiday` value type, and the `HolidayList`
//! builder the concrete calendars use to assemble one year at a time.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use wk_core::weekday::is_weekend;
use wk_core::Year;

use crate::easter::easter_offset;

/// A public holiday: a date and its localized name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    /// The day the holiday falls on.
    pub date: NaiveDate,
    /// The holiday's name in the calendar's language.
    pub name: String,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Holiday {
            date,
            name: name.into(),
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date, self.name)
    }
}

/// A country's public-holiday calendar.
///
/// Implementors only list one year's holidays; everything else is derived.
pub trait HolidayCalendar: fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Poland"`).
    fn name(&self) -> &str;

    /// All holidays of `year`, ascending by date.
    ///
    /// Weekend holidays are included; so are observed substitutes.
    fn holidays_in(&self, year: Year) -> Vec<Holiday>;

    /// All holidays of the given years, ascending by date.
    ///
    /// Entries sharing a date keep their per-year order.
    fn holidays(&self, years: &[Year]) -> Vec<Holiday> {
        let mut all: Vec<Holiday> = years.iter().flat_map(|&y| self.holidays_in(y)).collect();
        all.sort_by_key(|h| h.date);
        all.dedup();
        all
    }

    /// Return `true` if `date` is a holiday (weekend days are not holidays
    /// by themselves).
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays_in(date.year()).iter().any(|h| h.date == date)
    }

    /// Holidays in the inclusive range `[from, to]`, ascending by date.
    fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Holiday> {
        if from > to {
            return Vec::new();
        }
        let years: Vec<Year> = (from.year()..=to.year()).collect();
        self.holidays(&years)
            .into_iter()
            .filter(|h| h.date >= from && h.date <= to)
            .collect()
    }
}

/// Collects one year's holidays.
///
/// Holidays registered with an `_observed` method also get a substitute
/// entry named `"<name> (Observed)"` when they fall on a weekend.  Substitutes
/// are placed by [`HolidayList::finish`] once every regular holiday is known:
/// each goes to the first weekday after the holiday that is not already
/// taken, in registration order.
#[derive(Debug, Clone)]
pub struct HolidayList {
    year: Year,
    entries: Vec<Holiday>,
    observed: Vec<Holiday>,
}

impl HolidayList {
    /// Start an empty list for `year`.
    pub fn new(year: Year) -> Self {
        HolidayList {
            year,
            entries: Vec::new(),
            observed: Vec::new(),
        }
    }

    /// Add a holiday on `date`.
    pub fn add(&mut self, date: NaiveDate, name: impl Into<String>) -> &mut Self {
        self.entries.push(Holiday::new(date, name));
        self
    }

    /// Add a holiday on `date` when it is `Some`.
    pub fn add_opt(&mut self, date: Option<NaiveDate>, name: impl Into<String>) -> &mut Self {
        if let Some(date) = date {
            self.add(date, name);
        }
        self
    }

    /// Add a holiday on a fixed month and day of the list's year.
    pub fn add_fixed(&mut self, month: u32, day: u32, name: impl Into<String>) -> &mut Self {
        let date = NaiveDate::from_ymd_opt(self.year, month, day);
        self.add_opt(date, name)
    }

    /// Add a fixed-date holiday that is substituted when it falls on a
    /// weekend.
    pub fn add_fixed_observed(
        &mut self,
        month: u32,
        day: u32,
        name: impl Into<String>,
    ) -> &mut Self {
        if let Some(date) = NaiveDate::from_ymd_opt(self.year, month, day) {
            let holiday = Holiday::new(date, name);
            if is_weekend(date) {
                self.observed.push(holiday.clone());
            }
            self.entries.push(holiday);
        }
        self
    }

    /// Add a holiday `offset` days from Easter Sunday.
    pub fn add_easter(&mut self, offset: i64, name: impl Into<String>) -> &mut Self {
        let date = easter_offset(self.year, offset);
        self.add_opt(date, name)
    }

    /// Return `true` if a holiday is already registered on `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|h| h.date == date)
    }

    /// Place the observed substitutes and return the year's holidays,
    /// ascending by date.
    pub fn finish(mut self) -> Vec<Holiday> {
        for holiday in std::mem::take(&mut self.observed) {
            let mut day = holiday.date;
            while let Some(next) = day.checked_add_days(Days::new(1)) {
                day = next;
                if !is_weekend(day) && !self.contains(day) {
                    self.entries
                        .push(Holiday::new(day, format!("{} (Observed)", holiday.name)));
                    break;
                }
            }
        }
        self.entries.sort_by_key(|h| h.date);
        self.entries
    }
}
