//! Submission-time constraint validation
//!
//! Re-derives every check from a fresh reservation snapshot instead of
//! trusting whatever the client still displays. Checks run in order and
//! short-circuit on the first violation; a violation rejects the whole
//! multi-block submission, never part of it.
//!
//! This is still a read-then-decide pass over a snapshot: it cannot defend
//! against a concurrent writer committing between validation and insert
//! (see the booking service).

use super::blocks::Block;
use crate::availability::capacity;
use crate::utils::time::format_hour;
use crate::utils::{AppError, AppResult};
use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{EstablishmentSettings, MAX_UNITS_PER_LANE, Reservation};

/// Which submission path is being validated
///
/// The per-slot reservation-record cap is enforced on the public creation
/// path only; the staff edit path has never applied it. The asymmetry is
/// kept as-is until product decides whether edits should enforce it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFlow {
    Create,
    StaffEdit,
}

/// Everything the validator needs, snapshot included
pub struct ValidationInput<'a> {
    pub blocks: &'a [Block],
    pub lane_count: u32,
    pub people_count: u32,
    pub has_table_reservation: bool,
    pub date: NaiveDate,
    pub reservations: &'a [Reservation],
    pub settings: &'a EstablishmentSettings,
    /// Reservation id whose own footprint is ignored (edit-in-place)
    pub exclude_id: Option<i64>,
    pub flow: BookingFlow,
    pub now_millis: i64,
}

/// Validate a prospective multi-block submission against current data.
pub fn validate(input: &ValidationInput<'_>) -> AppResult<()> {
    let settings = input.settings;
    let limits = &settings.limits;

    // 1. Lane count within the establishment's pool
    if input.lane_count > settings.active_lanes {
        return Err(AppError::with_message(
            ErrorCode::LaneCountExceeded,
            format!("The establishment has only {} lanes", settings.active_lanes),
        )
        .with_detail("active_lanes", settings.active_lanes)
        .with_detail("requested", input.lane_count));
    }

    // People and hours share one per-lane budget on purpose; see
    // MAX_UNITS_PER_LANE.
    let unit_budget = input.lane_count * MAX_UNITS_PER_LANE;

    // 2. People capped per lane
    if input.people_count > unit_budget {
        return Err(AppError::with_message(
            ErrorCode::PeopleOverLaneCap,
            format!(
                "At most {} people fit on {} lane(s)",
                unit_budget, input.lane_count
            ),
        )
        .with_detail("max_people", unit_budget)
        .with_detail("requested", input.people_count));
    }

    // 3. Total hours capped by the same per-lane multiplier
    let total_hours: u32 = input.blocks.iter().map(|b| b.duration_hours).sum();
    if total_hours > unit_budget {
        return Err(AppError::with_message(
            ErrorCode::DurationOverLaneCap,
            format!(
                "At most {} hours can be booked on {} lane(s)",
                unit_budget, input.lane_count
            ),
        )
        .with_detail("max_hours", unit_budget)
        .with_detail("requested", total_hours));
    }

    // 4. Lane capacity at every hour of every block
    for block in input.blocks {
        for hour in block.hours() {
            let cap = capacity::evaluate(
                hour,
                input.date,
                input.reservations,
                settings.active_lanes,
                input.exclude_id,
                input.now_millis,
            );
            if cap.left < input.lane_count {
                return Err(AppError::with_message(
                    ErrorCode::SlotCapacityExceeded,
                    format!("Only {} lane(s) left at {}", cap.left, format_hour(hour)),
                )
                .with_detail("hour", hour)
                .with_detail("lanes_left", cap.left));
            }
        }
    }

    // Rows that still count against the caps: same date, not the edited
    // row, not cancelled, not an expired hold. The same view capacity
    // math uses.
    let live: Vec<&Reservation> = input
        .reservations
        .iter()
        .filter(|r| r.date == input.date)
        .filter(|r| Some(r.id) != input.exclude_id)
        .filter(|r| r.consumes_capacity(input.now_millis))
        .collect();

    // 5. Record cap per exact start slot (public creation path only)
    if input.flow == BookingFlow::Create {
        for block in input.blocks {
            let records = live
                .iter()
                .filter(|r| r.start_hour() == Some(block.start_hour))
                .count();
            if records >= limits.max_reservations_per_slot as usize {
                return Err(AppError::with_message(
                    ErrorCode::SlotReservationCapReached,
                    format!(
                        "The {} slot already has {} reservations",
                        block.time(),
                        records
                    ),
                )
                .with_detail("hour", block.start_hour)
                .with_detail("max_reservations", limits.max_reservations_per_slot));
            }
        }
    }

    // 6. People cap per exact start slot
    for block in input.blocks {
        let people: u32 = live
            .iter()
            .filter(|r| r.start_hour() == Some(block.start_hour))
            .map(|r| r.people_count)
            .sum();
        if people + input.people_count > limits.max_people_per_slot {
            return Err(AppError::with_message(
                ErrorCode::SlotPeopleCapReached,
                format!(
                    "The {} slot would exceed {} people",
                    block.time(),
                    limits.max_people_per_slot
                ),
            )
            .with_detail("hour", block.start_hour)
            .with_detail("max_people", limits.max_people_per_slot));
        }
    }

    // 7. Daily table-reservation cap
    if input.has_table_reservation {
        let tables = live.iter().filter(|r| r.has_table_reservation).count();
        if tables >= limits.max_table_reservations_per_day as usize {
            return Err(AppError::with_message(
                ErrorCode::TableReservationCapReached,
                format!(
                    "All {} table reservations for this day are taken",
                    limits.max_table_reservations_per_day
                ),
            )
            .with_detail("max_tables", limits.max_table_reservations_per_day));
        }
    }

    Ok(())
}
