//! Injectable sources of "now".
//!
//! Nothing in the workspace reads the system clock directly: operations that
//! default to the current instant take a [`Clock`].  Production code passes
//! [`SystemClock`]; tests pass a [`FixedClock`] so results are reproducible.
//!
//! Clocks report UTC instants.  Conversion into a display zone is the
//! caller's business.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// Return the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The operating-system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Freeze the clock at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }

    /// Freeze the clock at a wall-clock time read as UTC.
    pub fn at_utc(naive: NaiveDateTime) -> Self {
        FixedClock(naive.and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
