//! Booking service
//!
//! Orchestrates the submission flows: snapshot read from the collaborators,
//! pure validation against the snapshot, then the write.
//!
//! There is no transaction boundary around the read and the write. Two
//! callers validating the same hour in close succession can both observe
//! enough capacity and both commit, oversubscribing the lane pool. That is
//! the behavior of the backing service today; closing the gap needs an
//! atomic capacity reservation keyed by date and hour on the persistence
//! side, not another check here.

use super::blocks::{self, Block};
use super::validator::{self, BookingFlow, ValidationInput};
use crate::availability::{CallerRole, TimeSlot, slots};
use crate::clock::Clock;
use crate::store::{ReservationStore, SettingsProvider};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_hour, validate_optional_text, validate_positive,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{
    BookingRequest, PaymentStatus, Reservation, ReservationEdit, ReservationStatus,
};
use shared::util::snowflake_id;
use std::sync::Arc;

pub struct BookingService {
    store: Arc<dyn ReservationStore>,
    settings: Arc<dyn SettingsProvider>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        store: Arc<dyn ReservationStore>,
        settings: Arc<dyn SettingsProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            settings,
            clock,
        }
    }

    /// Slot picklist for `date`, as seen by `role`.
    ///
    /// `exclude_id` is set by the staff edit screen so the edited
    /// reservation's own footprint does not mask its former slots.
    pub async fn available_slots(
        &self,
        date: NaiveDate,
        role: CallerRole,
        exclude_id: Option<i64>,
    ) -> AppResult<Vec<TimeSlot>> {
        let settings = self.settings.get_settings().await?;
        let reservations = self.store.fetch_reservations(date).await?;
        Ok(slots::generate(
            date,
            &settings,
            &reservations,
            exclude_id,
            role,
            self.clock.as_ref(),
        ))
    }

    /// Create a booking from a slot selection.
    ///
    /// The selection is coalesced into contiguous blocks and validated as a
    /// whole; one reservation row is written per block, sharing the client
    /// and event fields, each carrying its own time, duration and prorated
    /// share of the quoted price. A validation failure persists nothing.
    pub async fn create_booking(&self, request: &BookingRequest) -> AppResult<Vec<Reservation>> {
        validate_required_text(&request.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_optional_text(&request.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
        validate_positive(request.lane_count, "lane_count")?;
        validate_positive(request.people_count, "people_count")?;
        for &hour in &request.selected_hours {
            validate_hour(hour)?;
        }

        let blocks = blocks::coalesce(&request.selected_hours)?;

        let settings = self.settings.get_settings().await?;
        let reservations = self.store.fetch_reservations(request.date).await?;
        let now_millis = self.clock.now_millis();

        validator::validate(&ValidationInput {
            blocks: &blocks,
            lane_count: request.lane_count,
            people_count: request.people_count,
            has_table_reservation: request.has_table_reservation,
            date: request.date,
            reservations: &reservations,
            settings: &settings,
            exclude_id: None,
            flow: BookingFlow::Create,
            now_millis,
        })?;

        let total_hours: u32 = blocks.iter().map(|b| b.duration_hours).sum();
        let total = blocks::quote_total(&settings, request.date, request.lane_count, total_hours);
        let prices = blocks::prorate_block_prices(total, &blocks);

        let mut created = Vec::with_capacity(blocks.len());
        for (block, price) in blocks.iter().zip(prices) {
            let row = self.build_row(request, block, price, now_millis);
            created.push(self.store.create_reservation(row).await?);
        }

        tracing::info!(
            "Created {} reservation block(s) for {} on {}",
            created.len(),
            request.customer_name,
            request.date
        );
        Ok(created)
    }

    /// Staff edit of a single reservation row.
    ///
    /// Capacity is computed with the row's own footprint excluded, so
    /// shrinking or moving a reservation within its prior slot never
    /// self-blocks. The per-slot record cap is not applied on this path.
    pub async fn update_booking(&self, id: i64, edit: &ReservationEdit) -> AppResult<Reservation> {
        validate_positive(edit.lane_count, "lane_count")?;
        validate_positive(edit.people_count, "people_count")?;
        validate_positive(edit.duration_hours, "duration_hours")?;
        validate_hour(edit.start_hour)?;

        let existing = self
            .store
            .find_reservation(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ReservationNotFound).with_detail("id", id))?;
        if existing.is_cancelled() {
            return Err(AppError::new(ErrorCode::ReservationCancelled).with_detail("id", id));
        }

        let block = Block {
            start_hour: edit.start_hour,
            duration_hours: edit.duration_hours,
        };

        let settings = self.settings.get_settings().await?;
        let reservations = self.store.fetch_reservations(edit.date).await?;
        let now_millis = self.clock.now_millis();

        validator::validate(&ValidationInput {
            blocks: std::slice::from_ref(&block),
            lane_count: edit.lane_count,
            people_count: edit.people_count,
            has_table_reservation: edit.has_table_reservation,
            date: edit.date,
            reservations: &reservations,
            settings: &settings,
            exclude_id: Some(id),
            flow: BookingFlow::StaffEdit,
            now_millis,
        })?;

        let mut updated = existing;
        updated.date = edit.date;
        updated.time = block.time();
        updated.duration_hours = edit.duration_hours;
        updated.lane_count = edit.lane_count;
        updated.people_count = edit.people_count;
        updated.has_table_reservation = edit.has_table_reservation;
        updated.table_seat_count = edit.table_seat_count;
        updated.price =
            blocks::quote_total(&settings, edit.date, edit.lane_count, edit.duration_hours);

        let saved = self.store.update_reservation(updated).await?;
        tracing::info!("Updated reservation {} on {}", saved.id, saved.date);
        Ok(saved)
    }

    fn build_row(
        &self,
        request: &BookingRequest,
        block: &Block,
        price: rust_decimal::Decimal,
        now_millis: i64,
    ) -> Reservation {
        Reservation {
            id: snowflake_id(),
            date: request.date,
            time: block.time(),
            duration_hours: block.duration_hours,
            lane_count: request.lane_count,
            people_count: request.people_count,
            status: ReservationStatus::Pendente,
            payment_status: PaymentStatus::Pendente,
            created_at: now_millis,
            pay_on_site: request.pay_on_site,
            has_table_reservation: request.has_table_reservation,
            table_seat_count: request.table_seat_count,
            price,
            customer_name: request.customer_name.clone(),
            customer_phone: request.customer_phone.clone(),
        }
    }
}
