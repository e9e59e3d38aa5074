//! Ireland calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use wk_core::weekday::{last_weekday_of_month, nth_weekday_of_month};
use wk_core::Year;

use crate::calendar::{Holiday, HolidayCalendar, HolidayList};

/// Ireland public holidays.
///
/// * New Year's Day (Jan 1)
/// * St. Brigid's Day (1st Mon in Feb, or Feb 1 when a Friday; since 2023)
/// * St. Patrick's Day (Mar 17)
/// * Easter Monday
/// * May Day (1st Mon in May, since 1994)
/// * June Bank Holiday (1st Mon in Jun)
/// * August Bank Holiday (1st Mon in Aug)
/// * October Bank Holiday (last Mon in Oct, since 1977)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
///
/// New Year's Day, St. Patrick's Day, Christmas Day and St. Stephen's Day
/// falling on a weekend get an "(Observed)" day on the next free weekday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ireland;

impl HolidayCalendar for Ireland {
    fn name(&self) -> &str {
        "Ireland"
    }

    fn holidays_in(&self, year: Year) -> Vec<Holiday> {
        let mut list = HolidayList::new(year);
        list.add_fixed_observed(1, 1, "New Year's Day");
        if year >= 2023 {
            list.add_opt(st_brigids_day(year), "St. Brigid's Day");
        }
        list.add_fixed_observed(3, 17, "St. Patrick's Day")
            .add_easter(1, "Easter Monday");
        if year >= 1994 {
            list.add_opt(nth_weekday_of_month(year, 5, Weekday::Mon, 1), "May Day");
        }
        list.add_opt(
            nth_weekday_of_month(year, 6, Weekday::Mon, 1),
            "June Bank Holiday",
        )
        .add_opt(
            nth_weekday_of_month(year, 8, Weekday::Mon, 1),
            "August Bank Holiday",
        );
        if year >= 1977 {
            list.add_opt(
                last_weekday_of_month(year, 10, Weekday::Mon),
                "October Bank Holiday",
            );
        }
        list.add_fixed_observed(12, 25, "Christmas Day")
            .add_fixed_observed(12, 26, "St. Stephen's Day");
        list.finish()
    }
}

fn st_brigids_day(year: Year) -> Option<NaiveDate> {
    let feb_1 = NaiveDate::from_ymd_opt(year, 2, 1)?;
    if feb_1.weekday() == Weekday::Fri {
        Some(feb_1)
    } else {
        nth_weekday_of_month(year, 2, Weekday::Mon, 1)
    }
}
