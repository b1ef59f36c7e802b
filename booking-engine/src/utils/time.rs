//! Date and hour helpers
//!
//! Dates travel as "YYYY-MM-DD" strings at the API boundary and as
//! `NaiveDate` inside the engine; slot times as "HH:00".

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Display form of an hour, "HH:00"
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour % 24)
}

/// Parse an "HH:00" slot time into its hour
pub fn parse_hour(time: &str) -> AppResult<u32> {
    let hour = time
        .split(':')
        .next()
        .and_then(|h| h.parse::<u32>().ok())
        .ok_or_else(|| AppError::validation(format!("Invalid slot time: {}", time)))?;
    if hour > 23 {
        return Err(AppError::new(shared::error::ErrorCode::InvalidHour));
    }
    Ok(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-06-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert!(parse_date("02/06/2025").is_err());
        assert!(parse_date("2025-13-40").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_format_hour_wraps() {
        assert_eq!(format_hour(9), "09:00");
        assert_eq!(format_hour(23), "23:00");
        assert_eq!(format_hour(24), "00:00");
        assert_eq!(format_hour(25), "01:00");
    }

    #[test]
    fn test_parse_hour() {
        assert_eq!(parse_hour("18:00").unwrap(), 18);
        assert_eq!(parse_hour("00:00").unwrap(), 0);
        assert!(parse_hour("24:00").is_err());
        assert!(parse_hour("soon").is_err());
    }
}
