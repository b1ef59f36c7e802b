//! Reservation Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How long an unpaid pending reservation keeps its lanes (30 minutes)
///
/// After the window elapses the row still exists, still `Pendente`, but
/// stops counting toward capacity. Nothing in this crate mutates the stored
/// status at the boundary; expiry is observed at read time only.
pub const HOLD_TTL_MILLIS: i64 = 30 * 60 * 1000;

/// Reservation lifecycle status
///
/// Wire names match the product vocabulary. `Cancelada` is terminal: rows
/// are never hard-deleted, cancellation is the soft delete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReservationStatus {
    Pendente,
    Confirmada,
    #[serde(rename = "Check-in")]
    CheckIn,
    Cancelada,
    #[serde(rename = "No-show")]
    NoShow,
}

/// Payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Pendente,
    Pago,
    Reembolsado,
}

/// Reservation entity
///
/// Occupies `lane_count` lanes for every hour in
/// `[start_hour, start_hour + duration_hours)` on `date`. Multiple
/// reservations coexist in an hour as long as their lane counts sum to no
/// more than the establishment's active lanes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub date: NaiveDate,
    /// Start time, hour-granular ("HH:00")
    pub time: String,
    pub duration_hours: u32,
    pub lane_count: u32,
    pub people_count: u32,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
    pub pay_on_site: bool,
    pub has_table_reservation: bool,
    #[serde(default)]
    pub table_seat_count: u32,
    pub price: Decimal,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
}

impl Reservation {
    /// Start hour parsed from the "HH:00" time field
    pub fn start_hour(&self) -> Option<u32> {
        let hour = self.time.split(':').next()?.parse::<u32>().ok()?;
        (hour <= 23).then_some(hour)
    }

    /// Half-open hour range occupied on `date`
    ///
    /// Hours are compared as plain integers: a reservation running past
    /// midnight keeps counting 24, 25, ... and never reaches the next
    /// calendar date's own hours.
    pub fn hour_range(&self) -> Option<Range<u32>> {
        let start = self.start_hour()?;
        Some(start..start + self.duration_hours)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelada
    }

    /// Whether this row is an unpaid pending hold past its 30-minute window
    pub fn is_expired_hold(&self, now_millis: i64) -> bool {
        self.status == ReservationStatus::Pendente
            && !self.pay_on_site
            && now_millis - self.created_at >= HOLD_TTL_MILLIS
    }

    /// Whether this row counts toward lane capacity at `now_millis`
    pub fn consumes_capacity(&self, now_millis: i64) -> bool {
        !self.is_cancelled() && !self.is_expired_hold(now_millis)
    }
}

/// Booking submission payload (public funnel or staff)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub date: NaiveDate,
    /// Hours picked from the slot list; contiguity is not required
    pub selected_hours: Vec<u32>,
    pub lane_count: u32,
    pub people_count: u32,
    #[serde(default)]
    pub pay_on_site: bool,
    #[serde(default)]
    pub has_table_reservation: bool,
    #[serde(default)]
    pub table_seat_count: u32,
}

/// Staff edit payload for a single reservation row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationEdit {
    pub date: NaiveDate,
    pub start_hour: u32,
    pub duration_hours: u32,
    pub lane_count: u32,
    pub people_count: u32,
    #[serde(default)]
    pub has_table_reservation: bool,
    #[serde(default)]
    pub table_seat_count: u32,
}
