//! Country-code → calendar mapping.
//!
//! [`CalendarRegistry`] is the holiday provider used by the lookup: every
//! supported country is registered explicitly at startup, and asking for an
//! unregistered code is an [`Error::UnknownCountry`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use wk_core::errors::{Error, Result};
use wk_core::Year;

use crate::calendar::{Holiday, HolidayCalendar};
use crate::calendars::{Germany, Ireland, Poland, UnitedKingdom};

/// Supplies holidays per country code.
pub trait HolidayProvider {
    /// All holidays of `country_code` in `years`, ascending by date.
    fn holidays(&self, country_code: &str, years: &[Year]) -> Result<Vec<Holiday>>;
}

type CalendarFactory = Arc<dyn Fn() -> Box<dyn HolidayCalendar> + Send + Sync>;

/// An explicit map from country code to a calendar factory.
///
/// Codes are matched case-insensitively (`"pl"` finds `"PL"`).
#[derive(Clone, Default)]
pub struct CalendarRegistry {
    factories: BTreeMap<String, CalendarFactory>,
}

impl CalendarRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in calendar:
    /// `DE`, `GB` (alias `UK`), `IE`, `PL`.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register("DE", || Box::new(Germany))
            .register("GB", || Box::new(UnitedKingdom))
            .register("UK", || Box::new(UnitedKingdom))
            .register("IE", || Box::new(Ireland))
            .register("PL", || Box::new(Poland));
        registry
    }

    /// Register (or replace) the calendar for `code`.
    pub fn register<F>(&mut self, code: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn HolidayCalendar> + Send + Sync + 'static,
    {
        self.factories.insert(normalize(code), Arc::new(factory));
        self
    }

    /// Return `true` if `code` is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.factories.contains_key(&normalize(code))
    }

    /// The registered codes, sorted.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the calendar registered for `code`.
    pub fn calendar(&self, code: &str) -> Result<Box<dyn HolidayCalendar>> {
        self.factories
            .get(&normalize(code))
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownCountry(code.to_string()))
    }
}

impl HolidayProvider for CalendarRegistry {
    fn holidays(&self, country_code: &str, years: &[Year]) -> Result<Vec<Holiday>> {
        Ok(self.calendar(country_code)?.holidays(years))
    }
}

impl fmt::Debug for CalendarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarRegistry")
            .field("country_codes", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
