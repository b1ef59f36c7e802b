//! Collaborator seams
//!
//! The engine owns no storage: reservations and settings come from
//! whatever backs the booking product. Both reads are snapshot reads;
//! nothing here makes a read transactional with a later write.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;
use shared::models::{EstablishmentSettings, Reservation};

/// Reservation persistence collaborator
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Snapshot of every reservation on `date`, regardless of status
    async fn fetch_reservations(&self, date: NaiveDate) -> AppResult<Vec<Reservation>>;

    async fn find_reservation(&self, id: i64) -> AppResult<Option<Reservation>>;

    async fn create_reservation(&self, reservation: Reservation) -> AppResult<Reservation>;

    async fn update_reservation(&self, reservation: Reservation) -> AppResult<Reservation>;
}

/// Establishment settings collaborator
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn get_settings(&self) -> AppResult<EstablishmentSettings>;
}
