//! Gregorian Easter computus.

use chrono::{Days, NaiveDate};
use wk_core::Year;

/// Easter Sunday of `year` in the Gregorian calendar.
///
/// Uses Oudin's algorithm, which only holds from year 1 on.  Returns `None`
/// for earlier years and for years chrono cannot represent.
pub fn easter_sunday(year: Year) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// The date `offset` days after (or, if negative, before) Easter Sunday.
///
/// Good Friday is `-2`, Easter Monday `1`, Ascension `39`, Pentecost `49`,
/// Corpus Christi `60`.
pub fn easter_offset(year: Year, offset: i64) -> Option<NaiveDate> {
    let easter = easter_sunday(year)?;
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        easter.checked_add_days(days)
    } else {
        easter.checked_sub_days(days)
    }
}
