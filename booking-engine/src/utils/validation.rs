//! Input validation helpers
//!
//! Centralized sanity checks for booking payloads, applied before any
//! capacity or business-rule evaluation. Limits reflect form UX, not
//! capacity rules.

use shared::error::ErrorCode;

use super::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers and other short identifiers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a count field is at least 1.
pub fn validate_positive(value: u32, field: &str) -> AppResult<()> {
    if value == 0 {
        return Err(AppError::validation(format!("{field} must be at least 1")));
    }
    Ok(())
}

/// Validate that a selected hour is on the 0-23 clock.
pub fn validate_hour(hour: u32) -> AppResult<()> {
    if hour > 23 {
        return Err(AppError::new(ErrorCode::InvalidHour).with_detail("hour", hour));
    }
    Ok(())
}
