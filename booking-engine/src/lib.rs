//! Lane-capacity scheduling engine
//!
//! Pure computation library behind the booking funnel and the staff agenda:
//! derives a day's bookable slots from the weekly schedule, computes
//! remaining lane capacity per hour (soft holds included), coalesces picked
//! hours into contiguous blocks, and re-validates submissions against the
//! establishment's capacity and business rules. Persistence and settings
//! are collaborator traits; the engine owns no storage and no wire
//! protocol.

pub mod availability;
pub mod booking;
pub mod clock;
pub mod schedule;
pub mod store;
pub mod utils;

// Re-exports
pub use availability::{CallerRole, SlotCapacity, TimeSlot};
pub use booking::{Block, BookingFlow, BookingService};
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{MemoryStore, ReservationStore, SettingsProvider};
