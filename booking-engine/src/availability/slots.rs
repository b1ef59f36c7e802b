//! Day slot generation

use super::capacity::{self, SlotCapacity};
use crate::clock::Clock;
use crate::schedule;
use crate::utils::time::{format_hour, parse_date};
use chrono::{NaiveDate, Timelike};
use serde::Serialize;
use shared::models::{EstablishmentSettings, Reservation};

/// Minutes past the hour boundary during which staff may still book the
/// hour that just started (walk-ins). Public callers get no grace: for
/// them the current hour is immediately past.
pub const STAFF_GRACE_MINUTES: u32 = 5;

/// Who is asking for the slot list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerRole {
    Public,
    Staff,
}

/// One bookable hour on a given date
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Display time, "HH:00"
    pub time: String,
    /// Display hour (0-23; wrapped schedule hours are reduced mod 24)
    pub hour: u32,
    pub occupied: u32,
    pub left: u32,
    /// Capacity left and not in the past
    pub available: bool,
    pub is_past: bool,
}

/// Generate the ordered slot picklist for `date`.
///
/// Empty when the weekly schedule marks the day closed or the date is an
/// explicit closure. Ordering follows the schedule walk (ascending through
/// the wrapped range); the block coalescer relies on it.
pub fn generate(
    date: NaiveDate,
    settings: &EstablishmentSettings,
    reservations: &[Reservation],
    exclude_id: Option<i64>,
    role: CallerRole,
    clock: &dyn Clock,
) -> Vec<TimeSlot> {
    if settings.is_blocked(date) {
        return Vec::new();
    }
    let Some(range) = schedule::day_range(date, settings) else {
        return Vec::new();
    };

    let now_millis = clock.now_millis();
    let local_now = clock.now().with_timezone(&settings.timezone);
    let today = local_now.date_naive();

    range
        .map(|h| {
            let display = h % 24;
            let cap: SlotCapacity = capacity::evaluate(
                display,
                date,
                reservations,
                settings.active_lanes,
                exclude_id,
                now_millis,
            );
            let is_past = date == today
                && hour_is_past(display, local_now.hour(), local_now.minute(), role);
            TimeSlot {
                time: format_hour(display),
                hour: display,
                occupied: cap.occupied,
                left: cap.left,
                available: cap.available && !is_past,
                is_past,
            }
        })
        .collect()
}

/// String-date entry point for callers holding raw form input.
///
/// A malformed date is treated as a closed day (empty list), never an
/// error.
pub fn generate_for(
    date: &str,
    settings: &EstablishmentSettings,
    reservations: &[Reservation],
    exclude_id: Option<i64>,
    role: CallerRole,
    clock: &dyn Clock,
) -> Vec<TimeSlot> {
    match parse_date(date) {
        Ok(parsed) => generate(parsed, settings, reservations, exclude_id, role, clock),
        Err(_) => {
            tracing::warn!("Malformed date '{}', treating as closed day", date);
            Vec::new()
        }
    }
}

fn hour_is_past(display: u32, current_hour: u32, current_minute: u32, role: CallerRole) -> bool {
    if display < current_hour {
        return true;
    }
    if display == current_hour {
        return match role {
            CallerRole::Public => true,
            CallerRole::Staff => current_minute >= STAFF_GRACE_MINUTES,
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use shared::models::BusinessHoursConfig as Hours;

    fn settings(hours_monday: Hours) -> EstablishmentSettings {
        let mut week = [Hours::closed(); 7];
        week[1] = hours_monday;
        EstablishmentSettings {
            active_lanes: 6,
            weekday_price: Decimal::new(8000, 2),
            weekend_price: Decimal::new(10000, 2),
            business_hours: week,
            blocked_dates: Default::default(),
            timezone: chrono_tz::UTC,
            limits: Default::default(),
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    /// A clock far from the test date so nothing is "today"
    fn distant_clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_evening_until_midnight_yields_six_slots() {
        let s = settings(Hours::open(18, 0));
        let slots = generate(monday(), &s, &[], None, CallerRole::Public, &distant_clock());
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0].time, "18:00");
        assert_eq!(slots[5].time, "23:00");
        assert!(slots.iter().all(|slot| slot.available && !slot.is_past));
    }

    #[test]
    fn test_wraparound_schedule_displays_mod_24() {
        let s = settings(Hours::open(17, 2));
        let slots = generate(monday(), &s, &[], None, CallerRole::Public, &distant_clock());
        assert_eq!(slots.len(), 9);
        let hours: Vec<u32> = slots.iter().map(|slot| slot.hour).collect();
        assert_eq!(hours, vec![17, 18, 19, 20, 21, 22, 23, 0, 1]);
        assert_eq!(slots[7].time, "00:00");
        assert_eq!(slots[8].time, "01:00");
    }

    #[test]
    fn test_closed_day_yields_nothing() {
        let s = settings(Hours::open(18, 0));
        let tuesday = monday() + chrono::Days::new(1);
        assert!(generate(tuesday, &s, &[], None, CallerRole::Public, &distant_clock()).is_empty());
    }

    #[test]
    fn test_blocked_date_yields_nothing() {
        let mut s = settings(Hours::open(18, 0));
        s.blocked_dates.insert(monday());
        assert!(generate(monday(), &s, &[], None, CallerRole::Public, &distant_clock()).is_empty());
    }

    #[test]
    fn test_malformed_date_treated_as_closed() {
        let s = settings(Hours::open(18, 0));
        assert!(
            generate_for("02/06/2025", &s, &[], None, CallerRole::Public, &distant_clock())
                .is_empty()
        );
        assert!(
            !generate_for("2025-06-02", &s, &[], None, CallerRole::Public, &distant_clock())
                .is_empty()
        );
    }

    #[test]
    fn test_past_hours_marked_on_same_day() {
        let s = settings(Hours::open(18, 0));
        // Monday 20:30 local (UTC tz in tests)
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 2, 20, 30, 0).unwrap());
        let slots = generate(monday(), &s, &[], None, CallerRole::Public, &clock);
        assert!(slots[0].is_past); // 18:00
        assert!(slots[1].is_past); // 19:00
        assert!(slots[2].is_past); // 20:00, current hour, no public grace
        assert!(!slots[3].is_past); // 21:00
        assert!(!slots[2].available);
        assert!(slots[3].available);
    }

    #[test]
    fn test_staff_grace_window_on_current_hour() {
        let s = settings(Hours::open(18, 0));

        // 20:04, within the 5-minute window
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 2, 20, 4, 0).unwrap());
        let staff = generate(monday(), &s, &[], None, CallerRole::Staff, &clock);
        let public = generate(monday(), &s, &[], None, CallerRole::Public, &clock);
        assert!(!staff[2].is_past);
        assert!(public[2].is_past);

        // 20:06, window elapsed for staff too
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 2, 20, 6, 0).unwrap());
        let staff = generate(monday(), &s, &[], None, CallerRole::Staff, &clock);
        assert!(staff[2].is_past);
    }

    #[test]
    fn test_other_days_never_past() {
        let s = settings(Hours::open(18, 0));
        // Looking at next Monday from this Monday evening
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 2, 23, 0, 0).unwrap());
        let next_monday = monday() + chrono::Days::new(7);
        let slots = generate(next_monday, &s, &[], None, CallerRole::Public, &clock);
        assert!(slots.iter().all(|slot| !slot.is_past));
    }
}
