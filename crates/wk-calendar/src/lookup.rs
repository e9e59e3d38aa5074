//! Next-holiday search.

use chrono::{Datelike, NaiveDate};
use tracing::debug;
use wk_core::errors::Result;
use wk_core::fail;
use wk_core::weekday::is_weekend;

use crate::calendar::Holiday;
use crate::registry::HolidayProvider;

/// The first holiday of `country_code` on or after `today` that falls on a
/// weekday.
///
/// Searches the holidays of `today`'s year and the following year in date
/// order.  Holidays on a Saturday or Sunday are skipped; their observed
/// substitutes, when the calendar has them, are regular candidates.
///
/// # Errors
/// * [`Error::UnknownCountry`](wk_core::Error::UnknownCountry) if the
///   provider does not know `country_code`.
/// * [`Error::NotFound`](wk_core::Error::NotFound) if no holiday qualifies
///   within the two searched years.
pub fn next_non_weekend_holiday<P>(
    provider: &P,
    today: NaiveDate,
    country_code: &str,
) -> Result<Holiday>
where
    P: HolidayProvider + ?Sized,
{
    let year = today.year();
    let mut holidays = provider.holidays(country_code, &[year, year + 1])?;
    holidays.sort_by_key(|h| h.date);

    let next = holidays
        .into_iter()
        .find(|h| h.date >= today && !is_weekend(h.date));

    match next {
        Some(holiday) => {
            debug!(country = country_code, %today, %holiday, "next non-weekend holiday");
            Ok(holiday)
        }
        None => fail!(
            "no non-weekend holiday for {country_code} between {today} and the end of {}",
            year + 1
        ),
    }
}
