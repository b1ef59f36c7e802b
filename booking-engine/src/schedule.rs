//! Business-hours resolution
//!
//! Maps a calendar date to that weekday's opening hours. Blocked dates are
//! deliberately not checked here: the slot generator ANDs "open per weekly
//! schedule" with "not explicitly blocked".

use chrono::NaiveDate;
use shared::models::{BusinessHoursConfig, EstablishmentSettings};
use std::ops::Range;

/// Opening hours for `date`, or `None` when the weekday is closed
pub fn resolve_day(
    date: NaiveDate,
    settings: &EstablishmentSettings,
) -> Option<BusinessHoursConfig> {
    let config = settings.hours_for(date);
    config.is_open.then_some(*config)
}

/// Effective bookable hour range for `date`, or `None` when closed
///
/// Hours past 23 indicate a schedule wrapping into the next calendar day;
/// display values are taken mod 24 downstream.
pub fn day_range(date: NaiveDate, settings: &EstablishmentSettings) -> Option<Range<u32>> {
    resolve_day(date, settings).and_then(|config| config.effective_range())
}
