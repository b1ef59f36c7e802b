//! Availability Module
//!
//! Per-hour lane capacity evaluation and day slot generation. All
//! computations here are pure: they recompute from a reservation snapshot
//! on every call, hold no state, and take no locks. There is no atomicity
//! between reading `left` here and a later reservation insert; two callers
//! can observe the same capacity and both commit (see the booking
//! service).

pub mod capacity;
pub mod slots;

pub use capacity::*;
pub use slots::*;
