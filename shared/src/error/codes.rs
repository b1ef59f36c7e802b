//! Unified error codes for the booking platform
//!
//! This module defines all error codes used across the engine and its
//! callers. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Settings errors
//! - 2xxx: Schedule errors
//! - 3xxx: Capacity errors
//! - 4xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Settings ====================
    /// Establishment settings not available
    SettingsUnavailable = 1001,
    /// Business hours configuration is invalid
    InvalidBusinessHours = 1002,
    /// Establishment has no active lanes configured
    NoActiveLanes = 1003,

    // ==================== 2xxx: Schedule ====================
    /// The establishment is closed on the requested day
    DayClosed = 2001,
    /// The requested date is explicitly blocked
    DateBlocked = 2002,
    /// The requested slot is already in the past
    SlotInPast = 2003,
    /// Invalid calendar date
    InvalidDate = 2004,
    /// Hour outside the 0-23 range
    InvalidHour = 2005,

    // ==================== 3xxx: Capacity ====================
    /// Not enough lanes left at the requested hour
    SlotCapacityExceeded = 3001,
    /// Requested lane count exceeds the establishment's lanes
    LaneCountExceeded = 3002,
    /// Reservation record cap reached for the slot
    SlotReservationCapReached = 3003,
    /// People cap reached for the slot
    SlotPeopleCapReached = 3004,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// No hours were selected
    NoHoursSelected = 4002,
    /// People count exceeds the per-lane cap
    PeopleOverLaneCap = 4003,
    /// Selected hours exceed the per-lane duration cap
    DurationOverLaneCap = 4004,
    /// Daily table reservation cap reached
    TableReservationCapReached = 4005,
    /// Reservation has already been cancelled
    ReservationCancelled = 4006,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Settings
            ErrorCode::SettingsUnavailable => "Establishment settings are not available",
            ErrorCode::InvalidBusinessHours => "Business hours configuration is invalid",
            ErrorCode::NoActiveLanes => "No active lanes configured",

            // Schedule
            ErrorCode::DayClosed => "The establishment is closed on this day",
            ErrorCode::DateBlocked => "This date is not available for bookings",
            ErrorCode::SlotInPast => "This time slot is already in the past",
            ErrorCode::InvalidDate => "Invalid calendar date",
            ErrorCode::InvalidHour => "Hour must be between 0 and 23",

            // Capacity
            ErrorCode::SlotCapacityExceeded => "Not enough lanes left at the requested hour",
            ErrorCode::LaneCountExceeded => "Requested lanes exceed the establishment's lanes",
            ErrorCode::SlotReservationCapReached => "Reservation limit reached for this slot",
            ErrorCode::SlotPeopleCapReached => "People limit reached for this slot",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::NoHoursSelected => "No hours were selected",
            ErrorCode::PeopleOverLaneCap => "Too many people for the selected lanes",
            ErrorCode::DurationOverLaneCap => "Too many hours for the selected lanes",
            ErrorCode::TableReservationCapReached => "Daily table reservation limit reached",
            ErrorCode::ReservationCancelled => "Reservation has already been cancelled",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Settings
            1001 => Ok(ErrorCode::SettingsUnavailable),
            1002 => Ok(ErrorCode::InvalidBusinessHours),
            1003 => Ok(ErrorCode::NoActiveLanes),

            // Schedule
            2001 => Ok(ErrorCode::DayClosed),
            2002 => Ok(ErrorCode::DateBlocked),
            2003 => Ok(ErrorCode::SlotInPast),
            2004 => Ok(ErrorCode::InvalidDate),
            2005 => Ok(ErrorCode::InvalidHour),

            // Capacity
            3001 => Ok(ErrorCode::SlotCapacityExceeded),
            3002 => Ok(ErrorCode::LaneCountExceeded),
            3003 => Ok(ErrorCode::SlotReservationCapReached),
            3004 => Ok(ErrorCode::SlotPeopleCapReached),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::NoHoursSelected),
            4003 => Ok(ErrorCode::PeopleOverLaneCap),
            4004 => Ok(ErrorCode::DurationOverLaneCap),
            4005 => Ok(ErrorCode::TableReservationCapReached),
            4006 => Ok(ErrorCode::ReservationCancelled),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::DayClosed,
            ErrorCode::SlotCapacityExceeded,
            ErrorCode::PeopleOverLaneCap,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(12345), Err(InvalidErrorCode(12345)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::SlotCapacityExceeded).unwrap();
        assert_eq!(json, "3001");

        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::DayClosed);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::SlotCapacityExceeded.to_string(), "E3001");
    }
}
