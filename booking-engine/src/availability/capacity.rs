//! Per-hour lane capacity evaluation

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::Reservation;

/// Remaining lane capacity at a single hour
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SlotCapacity {
    /// Lanes committed by active reservations overlapping the hour
    pub occupied: u32,
    /// Lanes still bookable
    pub left: u32,
    pub available: bool,
}

/// Compute lane capacity at `hour` on `date` from a reservation snapshot.
///
/// A reservation counts when it is on `date`, not cancelled, not an expired
/// unpaid pending hold, not the excluded id, and its
/// `[start, start + duration)` span contains `hour`. Spans are compared as
/// plain integers, so a reservation running past midnight keeps occupying
/// hours 24, 25, ... of its own date and never the next calendar date's
/// hours.
///
/// `exclude_id` lets an in-place edit compute capacity as if its own prior
/// footprint did not exist.
pub fn evaluate(
    hour: u32,
    date: NaiveDate,
    reservations: &[Reservation],
    total_lanes: u32,
    exclude_id: Option<i64>,
    now_millis: i64,
) -> SlotCapacity {
    let occupied = reservations
        .iter()
        .filter(|r| r.date == date)
        .filter(|r| Some(r.id) != exclude_id)
        .filter(|r| r.consumes_capacity(now_millis))
        .filter(|r| r.hour_range().is_some_and(|span| span.contains(&hour)))
        .map(|r| r.lane_count)
        .sum();

    let left = total_lanes.saturating_sub(occupied);
    SlotCapacity {
        occupied,
        left,
        available: left > 0,
    }
}
