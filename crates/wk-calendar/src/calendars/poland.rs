//! Poland calendar.

use wk_core::Year;

use crate::calendar::{Holiday, HolidayCalendar, HolidayList};

/// Poland public holidays (dni wolne od pracy), with Polish names.
///
/// * Nowy Rok (Jan 1)
/// * Święto Trzech Króli (Jan 6, since 2011)
/// * Niedziela Wielkanocna (Easter Sunday)
/// * Poniedziałek Wielkanocny (Easter Monday)
/// * Święto Pracy (May 1)
/// * Święto Narodowe Trzeciego Maja (May 3)
/// * Zielone Świątki (Pentecost, Easter + 49)
/// * Dzień Bożego Ciała (Corpus Christi, Easter + 60)
/// * Wniebowzięcie Najświętszej Marii Panny (Aug 15)
/// * Wszystkich Świętych (Nov 1)
/// * Narodowe Święto Niepodległości (Nov 11, since 1989)
/// * Wigilia Bożego Narodzenia (Dec 24, since 2025)
/// * Boże Narodzenie, both days (Dec 25–26)
///
/// Polish holidays are not moved when they fall on a weekend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Poland;

impl HolidayCalendar for Poland {
    fn name(&self) -> &str {
        "Poland"
    }

    fn holidays_in(&self, year: Year) -> Vec<Holiday> {
        let mut list = HolidayList::new(year);
        list.add_fixed(1, 1, "Nowy Rok");
        if year >= 2011 {
            list.add_fixed(1, 6, "Święto Trzech Króli");
        }
        list.add_easter(0, "Niedziela Wielkanocna")
            .add_easter(1, "Poniedziałek Wielkanocny")
            .add_fixed(5, 1, "Święto Pracy")
            .add_fixed(5, 3, "Święto Narodowe Trzeciego Maja")
            .add_easter(49, "Zielone Świątki")
            .add_easter(60, "Dzień Bożego Ciała")
            .add_fixed(8, 15, "Wniebowzięcie Najświętszej Marii Panny")
            .add_fixed(11, 1, "Wszystkich Świętych");
        if year >= 1989 {
            list.add_fixed(11, 11, "Narodowe Święto Niepodległości");
        }
        if year == 2018 {
            list.add_fixed(11, 12, "Narodowe Święto Niepodległości - 100-lecie");
        }
        if year >= 2025 {
            list.add_fixed(12, 24, "Wigilia Bożego Narodzenia");
        }
        list.add_fixed(12, 25, "Boże Narodzenie (pierwszy dzień)")
            .add_fixed(12, 26, "Boże Narodzenie (drugi dzień)");
        list.finish()
    }
}
