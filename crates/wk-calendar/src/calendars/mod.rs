//! Concrete country calendars.

/// Germany (nationwide holidays).
pub mod germany;

/// Ireland.
pub mod ireland;

/// Poland.
pub mod poland;

/// United Kingdom (England & Wales bank holidays).
pub mod united_kingdom;

pub use germany::Germany;
pub use ireland::Ireland;
pub use poland::Poland;
pub use united_kingdom::UnitedKingdom;
