//! Booking Module
//!
//! Turns a user's slot selection into persisted reservation rows: coalesce
//! the picked hours into contiguous blocks, re-validate the whole
//! submission against current data, then write one row per block.

pub mod blocks;
pub mod service;
pub mod validator;

pub use blocks::*;
pub use service::*;
pub use validator::*;
