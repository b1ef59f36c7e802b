//! Shared types for the lane booking platform
//!
//! Common types used across crates: domain models, error types and
//! utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    BookingLimits, BookingRequest, BusinessHoursConfig, EstablishmentSettings, PaymentStatus,
    Reservation, ReservationEdit, ReservationStatus, WeeklyHours,
};
