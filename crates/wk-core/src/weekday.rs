//! Day-of-week helpers on top of `chrono::Weekday` and `chrono::NaiveDate`.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::errors::{Error, Result};
use crate::Year;

/// Return `true` if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The closest `weekday` strictly after `date`.
///
/// A Friday's next Friday is seven days later.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    let ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    date.checked_add_days(Days::new(u64::from(ahead)))
        .ok_or_else(|| Error::Date(format!("no {weekday} after {date}")))
}

/// The closest `weekday` strictly before `date`.
///
/// A Monday's previous Monday is seven days earlier.
pub fn previous_weekday(date: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    let back = (7 + date.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    let back = if back == 0 { 7 } else { back };
    date.checked_sub_days(Days::new(u64::from(back)))
        .ok_or_else(|| Error::Date(format!("no {weekday} before {date}")))
}

/// The `n`-th (1-based) `weekday` of a month, e.g. the first Monday of May.
pub fn nth_weekday_of_month(year: Year, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// The last `weekday` of a month, e.g. the last Monday of August.
pub fn last_weekday_of_month(year: Year, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    previous_weekday(first_of_next, weekday).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekend_days() {
        // 2019-03-16 is a Saturday, 2019-03-17 a Sunday
        assert!(is_weekend(date(2019, 3, 16)));
        assert!(is_weekend(date(2019, 3, 17)));
        assert!(!is_weekend(date(2019, 3, 18)));
    }

    #[test]
    fn next_and_previous_are_strict() {
        // 2019-02-08 is a Friday
        let friday = date(2019, 2, 8);
        assert_eq!(next_weekday(friday, Weekday::Fri).unwrap(), date(2019, 2, 15));
        assert_eq!(previous_weekday(friday, Weekday::Fri).unwrap(), date(2019, 2, 1));
        assert_eq!(next_weekday(friday, Weekday::Mon).unwrap(), date(2019, 2, 11));
        assert_eq!(previous_weekday(friday, Weekday::Mon).unwrap(), date(2019, 2, 4));
    }

    #[test]
    fn month_anchored_weekdays() {
        assert_eq!(
            nth_weekday_of_month(2019, 5, Weekday::Mon, 1),
            Some(date(2019, 5, 6))
        );
        assert_eq!(
            last_weekday_of_month(2019, 8, Weekday::Mon),
            Some(date(2019, 8, 26))
        );
        assert_eq!(
            last_weekday_of_month(2019, 12, Weekday::Tue),
            Some(date(2019, 12, 31))
        );
        assert_eq!(nth_weekday_of_month(2019, 2, Weekday::Fri, 5), None);
    }
}
