//! In-memory store for tests and examples

use super::{ReservationStore, SettingsProvider};
use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{EstablishmentSettings, Reservation};

/// Mutex-backed store implementing both collaborator traits.
///
/// Mirrors the backing service's semantics: plain reads and writes, no
/// transaction spanning a fetch and a later create.
pub struct MemoryStore {
    reservations: Mutex<Vec<Reservation>>,
    settings: Mutex<EstablishmentSettings>,
}

impl MemoryStore {
    pub fn new(settings: EstablishmentSettings) -> Self {
        Self {
            reservations: Mutex::new(Vec::new()),
            settings: Mutex::new(settings),
        }
    }

    /// Insert a row directly, bypassing validation (test setup)
    pub fn seed(&self, reservation: Reservation) {
        self.reservations.lock().push(reservation);
    }

    /// All rows, any date (test assertions)
    pub fn all(&self) -> Vec<Reservation> {
        self.reservations.lock().clone()
    }

    pub fn set_settings(&self, settings: EstablishmentSettings) {
        *self.settings.lock() = settings;
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn fetch_reservations(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }

    async fn find_reservation(&self, id: i64) -> AppResult<Option<Reservation>> {
        Ok(self.reservations.lock().iter().find(|r| r.id == id).cloned())
    }

    async fn create_reservation(&self, reservation: Reservation) -> AppResult<Reservation> {
        self.reservations.lock().push(reservation.clone());
        Ok(reservation)
    }

    async fn update_reservation(&self, reservation: Reservation) -> AppResult<Reservation> {
        let mut rows = self.reservations.lock();
        let slot = rows
            .iter_mut()
            .find(|r| r.id == reservation.id)
            .ok_or_else(|| AppError::new(ErrorCode::ReservationNotFound))?;
        *slot = reservation.clone();
        Ok(reservation)
    }
}

#[async_trait]
impl SettingsProvider for MemoryStore {
    async fn get_settings(&self) -> AppResult<EstablishmentSettings> {
        Ok(self.settings.lock().clone())
    }
}
