//! Block coalescing and price proration

use crate::utils::time::format_hour;
use crate::utils::{AppError, AppResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::ErrorCode;
use shared::models::EstablishmentSettings;
use std::ops::Range;

/// A maximal run of contiguous selected hours
///
/// Each block becomes one persisted reservation row with its own start
/// time and duration.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Block {
    pub start_hour: u32,
    pub duration_hours: u32,
}

impl Block {
    /// Start time in display form, "HH:00"
    pub fn time(&self) -> String {
        format_hour(self.start_hour)
    }

    /// Half-open hour range covered by this block
    pub fn hours(&self) -> Range<u32> {
        self.start_hour..self.start_hour + self.duration_hours
    }
}

/// Merge an arbitrary hour selection into the minimal ordered set of
/// maximal contiguous blocks.
///
/// Selection is not required to be contiguous: picking 18:00 and 22:00
/// without the hours between yields two blocks. An empty selection is
/// invalid input.
pub fn coalesce(selected_hours: &[u32]) -> AppResult<Vec<Block>> {
    if selected_hours.is_empty() {
        return Err(AppError::new(ErrorCode::NoHoursSelected));
    }

    let mut hours = selected_hours.to_vec();
    hours.sort_unstable();
    hours.dedup();

    let mut blocks = Vec::new();
    let mut start = hours[0];
    let mut duration = 1;

    for &hour in &hours[1..] {
        if hour == start + duration {
            duration += 1;
        } else {
            blocks.push(Block {
                start_hour: start,
                duration_hours: duration,
            });
            start = hour;
            duration = 1;
        }
    }
    blocks.push(Block {
        start_hour: start,
        duration_hours: duration,
    });

    Ok(blocks)
}

/// Quoted total for a selection: hourly rate × lanes × selected hours
pub fn quote_total(
    settings: &EstablishmentSettings,
    date: NaiveDate,
    lane_count: u32,
    total_hours: u32,
) -> Decimal {
    settings.hourly_rate(date) * Decimal::from(lane_count) * Decimal::from(total_hours)
}

/// Split the quoted total across blocks proportionally to each block's
/// share of the selected hours.
///
/// Prices are rounded to 2 decimal places; the final block absorbs the
/// rounding remainder so the block prices always sum to `total`.
pub fn prorate_block_prices(total: Decimal, blocks: &[Block]) -> Vec<Decimal> {
    let total_hours: u32 = blocks.iter().map(|b| b.duration_hours).sum();
    if total_hours == 0 {
        return blocks.iter().map(|_| Decimal::ZERO).collect();
    }

    let mut prices = Vec::with_capacity(blocks.len());
    let mut allocated = Decimal::ZERO;
    for (i, block) in blocks.iter().enumerate() {
        let price = if i + 1 == blocks.len() {
            total - allocated
        } else {
            (total * Decimal::from(block.duration_hours) / Decimal::from(total_hours)).round_dp(2)
        };
        allocated += price;
        prices.push(price);
    }
    prices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_selection_splits() {
        let blocks = coalesce(&[9, 10, 11, 15]).unwrap();
        assert_eq!(
            blocks,
            vec![
                Block { start_hour: 9, duration_hours: 3 },
                Block { start_hour: 15, duration_hours: 1 },
            ]
        );
        assert_eq!(blocks[0].time(), "09:00");
        assert_eq!(blocks[1].time(), "15:00");
    }

    #[test]
    fn test_single_hour() {
        assert_eq!(
            coalesce(&[9]).unwrap(),
            vec![Block { start_hour: 9, duration_hours: 1 }]
        );
    }

    #[test]
    fn test_empty_selection_is_invalid() {
        let err = coalesce(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoHoursSelected);
    }

    #[test]
    fn test_unsorted_input_with_duplicates() {
        let blocks = coalesce(&[22, 18, 19, 18, 22]).unwrap();
        assert_eq!(
            blocks,
            vec![
                Block { start_hour: 18, duration_hours: 2 },
                Block { start_hour: 22, duration_hours: 1 },
            ]
        );
    }

    #[test]
    fn test_fully_contiguous_selection_is_one_block() {
        assert_eq!(
            coalesce(&[20, 18, 19]).unwrap(),
            vec![Block { start_hour: 18, duration_hours: 3 }]
        );
    }

    #[test]
    fn test_proration_matches_hour_share() {
        let blocks = coalesce(&[9, 10, 11, 15]).unwrap();
        let prices = prorate_block_prices(Decimal::new(64000, 2), &blocks);
        assert_eq!(prices, vec![Decimal::new(48000, 2), Decimal::new(16000, 2)]);
    }

    #[test]
    fn test_proration_remainder_goes_to_last_block() {
        let blocks = coalesce(&[9, 11, 13]).unwrap();
        let prices = prorate_block_prices(Decimal::new(10000, 2), &blocks);
        assert_eq!(
            prices,
            vec![
                Decimal::new(3333, 2),
                Decimal::new(3333, 2),
                Decimal::new(3334, 2),
            ]
        );
        let sum: Decimal = prices.iter().copied().sum();
        assert_eq!(sum, Decimal::new(10000, 2));
    }
}
