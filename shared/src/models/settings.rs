//! Establishment Settings Model

use super::business_hours::{BusinessHoursConfig, WeeklyHours};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// People and total booked hours are both capped at this many units per
/// lane. The two limits are intentionally the same constant; if one ever
/// diverges from the other, the change has to be made here, visibly.
pub const MAX_UNITS_PER_LANE: u32 = 6;

/// Per-slot and per-day booking caps
///
/// Defaults follow the values enforced by the public booking flow. The
/// people-per-slot ceiling is quoted as 50 on some surfaces while the
/// booking flow enforces 100; both caps stay configurable here until
/// product settles on a single value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingLimits {
    /// Maximum reservation records sharing an exact date + start time
    #[serde(default = "default_reservations_per_slot")]
    pub max_reservations_per_slot: u32,
    /// Maximum total people across reservations sharing an exact slot
    #[serde(default = "default_people_per_slot")]
    pub max_people_per_slot: u32,
    /// Maximum table reservations per calendar day
    #[serde(default = "default_table_reservations_per_day")]
    pub max_table_reservations_per_day: u32,
}

fn default_reservations_per_slot() -> u32 {
    2
}

fn default_people_per_slot() -> u32 {
    100
}

fn default_table_reservations_per_day() -> u32 {
    25
}

impl Default for BookingLimits {
    fn default() -> Self {
        Self {
            max_reservations_per_slot: default_reservations_per_slot(),
            max_people_per_slot: default_people_per_slot(),
            max_table_reservations_per_day: default_table_reservations_per_day(),
        }
    }
}

/// Establishment settings entity (singleton per establishment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstablishmentSettings {
    /// Number of bookable lanes (> 0)
    pub active_lanes: u32,
    /// Price per lane-hour, Monday-Friday
    pub weekday_price: Decimal,
    /// Price per lane-hour, Saturday and Sunday
    pub weekend_price: Decimal,
    /// Opening hours, one entry per weekday (index 0 = Sunday)
    #[serde(default)]
    pub business_hours: WeeklyHours,
    /// Explicit full-day closures overriding the weekly schedule
    #[serde(default)]
    pub blocked_dates: HashSet<NaiveDate>,
    /// Establishment timezone (IANA identifier)
    #[serde(default = "default_timezone")]
    pub timezone: chrono_tz::Tz,
    #[serde(default)]
    pub limits: BookingLimits,
}

fn default_timezone() -> chrono_tz::Tz {
    chrono_tz::America::Sao_Paulo
}

impl EstablishmentSettings {
    /// Opening hours for the weekday of `date`
    pub fn hours_for(&self, date: NaiveDate) -> &BusinessHoursConfig {
        &self.business_hours[super::business_hours::weekday_index(date)]
    }

    /// Whether `date` is an explicit full-day closure
    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.blocked_dates.contains(&date)
    }

    /// Hourly rate per lane for `date` (weekend vs weekday pricing)
    pub fn hourly_rate(&self, date: NaiveDate) -> Decimal {
        match super::business_hours::weekday_index(date) {
            0 | 6 => self.weekend_price,
            _ => self.weekday_price,
        }
    }
}
