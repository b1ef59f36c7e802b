//! Business Hours Model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Opening hours for a single weekday
///
/// `end` is exclusive and encoded on the 0-23 clock: `0` means midnight
/// (close at 24:00). `end < start` means the schedule wraps past midnight
/// into the next calendar day (e.g. 17:00-02:00).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessHoursConfig {
    pub is_open: bool,
    /// Opening hour (0-23)
    #[serde(default)]
    pub start: u32,
    /// Closing hour (0-23, 0 = midnight)
    #[serde(default)]
    pub end: u32,
}

impl BusinessHoursConfig {
    pub fn open(start: u32, end: u32) -> Self {
        Self {
            is_open: true,
            start,
            end,
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }

    /// Effective half-open hour range for the day
    ///
    /// Applies the midnight encoding (`end == 0` → 24) and the wraparound
    /// rule (`end < start` → `end + 24`). Hours past 23 belong to the next
    /// calendar day and are displayed mod 24. Returns `None` when the day
    /// is closed.
    pub fn effective_range(&self) -> Option<Range<u32>> {
        if !self.is_open {
            return None;
        }
        let end = match self.end {
            0 => 24,
            e if e < self.start => e + 24,
            e => e,
        };
        Some(self.start..end)
    }
}

/// One entry per weekday, index 0 = Sunday
pub type WeeklyHours = [BusinessHoursConfig; 7];

/// Weekday index for a date, Sunday = 0
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}
