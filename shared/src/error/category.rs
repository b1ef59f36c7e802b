//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Settings errors
/// - 2xxx: Schedule errors
/// - 3xxx: Capacity errors
/// - 4xxx: Reservation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Settings errors (1xxx)
    Settings,
    /// Schedule errors (2xxx)
    Schedule,
    /// Capacity errors (3xxx)
    Capacity,
    /// Reservation errors (4xxx)
    Reservation,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Settings,
            2000..3000 => Self::Schedule,
            3000..4000 => Self::Capacity,
            4000..5000 => Self::Reservation,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Settings => "settings",
            Self::Schedule => "schedule",
            Self::Capacity => "capacity",
            Self::Reservation => "reservation",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Settings);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Schedule);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Capacity);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Reservation);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::InvalidBusinessHours.category(),
            ErrorCategory::Settings
        );
        assert_eq!(ErrorCode::DayClosed.category(), ErrorCategory::Schedule);
        assert_eq!(
            ErrorCode::SlotCapacityExceeded.category(),
            ErrorCategory::Capacity
        );
        assert_eq!(
            ErrorCode::PeopleOverLaneCap.category(),
            ErrorCategory::Reservation
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Settings.name(), "settings");
        assert_eq!(ErrorCategory::Schedule.name(), "schedule");
        assert_eq!(ErrorCategory::Capacity.name(), "capacity");
        assert_eq!(ErrorCategory::Reservation.name(), "reservation");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Capacity;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"capacity\"");

        let category: ErrorCategory = serde_json::from_str("\"schedule\"").unwrap();
        assert_eq!(category, ErrorCategory::Schedule);
    }
}
