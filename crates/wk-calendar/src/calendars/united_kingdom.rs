//! United Kingdom calendar (England & Wales bank holidays).

use chrono::{NaiveDate, Weekday};
use wk_core::weekday::{last_weekday_of_month, nth_weekday_of_month};
use wk_core::Year;

use crate::calendar::{Holiday, HolidayCalendar, HolidayList};

/// United Kingdom bank holidays, as observed in England & Wales.
///
/// * New Year's Day (Jan 1; substituted when on a weekend)
/// * Good Friday
/// * Easter Monday
/// * May Day (1st Mon in May, since 1978; moved in 1995 and 2020)
/// * Spring Bank Holiday (last Mon in May; moved in jubilee years)
/// * Late Summer Bank Holiday (last Mon in Aug)
/// * Christmas Day and Boxing Day (substituted when on a weekend)
/// * one-off royal and jubilee holidays
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdom;

impl HolidayCalendar for UnitedKingdom {
    fn name(&self) -> &str {
        "United Kingdom"
    }

    fn holidays_in(&self, year: Year) -> Vec<Holiday> {
        let mut list = HolidayList::new(year);
        list.add_fixed_observed(1, 1, "New Year's Day")
            .add_easter(-2, "Good Friday")
            .add_easter(1, "Easter Monday");

        if year >= 1978 {
            let may_day = match year {
                1995 => NaiveDate::from_ymd_opt(1995, 5, 8),
                2020 => NaiveDate::from_ymd_opt(2020, 5, 8),
                _ => nth_weekday_of_month(year, 5, Weekday::Mon, 1),
            };
            list.add_opt(may_day, "May Day");
        }

        let spring = match year {
            1977 => NaiveDate::from_ymd_opt(1977, 6, 6),
            2002 => NaiveDate::from_ymd_opt(2002, 6, 4),
            2012 => NaiveDate::from_ymd_opt(2012, 6, 4),
            2022 => NaiveDate::from_ymd_opt(2022, 6, 2),
            _ => last_weekday_of_month(year, 5, Weekday::Mon),
        };
        list.add_opt(spring, "Spring Bank Holiday")
            .add_opt(
                last_weekday_of_month(year, 8, Weekday::Mon),
                "Late Summer Bank Holiday",
            );

        for &(month, day, name) in one_off_holidays(year) {
            list.add_fixed(month, day, name);
        }

        list.add_fixed_observed(12, 25, "Christmas Day")
            .add_fixed_observed(12, 26, "Boxing Day");
        list.finish()
    }
}

fn one_off_holidays(year: Year) -> &'static [(u32, u32, &'static str)] {
    match year {
        1977 => &[(6, 7, "Silver Jubilee of Elizabeth II")],
        1981 => &[(7, 29, "Wedding of Charles and Diana")],
        1999 => &[(12, 31, "Millennium Celebrations")],
        2002 => &[(6, 3, "Golden Jubilee of Elizabeth II")],
        2011 => &[(4, 29, "Wedding of William and Catherine")],
        2012 => &[(6, 5, "Diamond Jubilee of Elizabeth II")],
        2022 => &[
            (6, 3, "Platinum Jubilee of Elizabeth II"),
            (9, 19, "State Funeral of Queen Elizabeth II"),
        ],
        2023 => &[(5, 8, "Coronation of Charles III")],
        _ => &[],
    }
}
