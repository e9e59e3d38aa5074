//! Germany calendar.

use wk_core::Year;

use crate::calendar::{Holiday, HolidayCalendar, HolidayList};

/// Germany's nationwide public holidays (gesetzliche Feiertage), with German
/// names.  State-only holidays are not included.
///
/// * Neujahr (Jan 1)
/// * Karfreitag (Good Friday)
/// * Ostermontag (Easter Monday)
/// * Erster Mai (May 1)
/// * Christi Himmelfahrt (Easter + 39)
/// * Pfingstmontag (Easter + 50)
/// * Tag der Deutschen Einheit (Oct 3, since 1990)
/// * Reformationstag (Oct 31, 2017 only)
/// * Erster and Zweiter Weihnachtstag (Dec 25–26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl HolidayCalendar for Germany {
    fn name(&self) -> &str {
        "Germany"
    }

    fn holidays_in(&self, year: Year) -> Vec<Holiday> {
        let mut list = HolidayList::new(year);
        list.add_fixed(1, 1, "Neujahr")
            .add_easter(-2, "Karfreitag")
            .add_easter(1, "Ostermontag")
            .add_fixed(5, 1, "Erster Mai")
            .add_easter(39, "Christi Himmelfahrt")
            .add_easter(50, "Pfingstmontag");
        if year >= 1990 {
            list.add_fixed(10, 3, "Tag der Deutschen Einheit");
        }
        if year == 2017 {
            list.add_fixed(10, 31, "Reformationstag");
        }
        list.add_fixed(12, 25, "Erster Weihnachtstag")
            .add_fixed(12, 26, "Zweiter Weihnachtstag");
        list.finish()
    }
}
