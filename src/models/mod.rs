//! Wire-format parsing and core value types.
//!
//! `time` holds the clock/slot primitives; `batch` parses the backend's
//! roster JSON and normalizes records into the canonical [`crate::api`]
//! shapes.

pub mod batch;
pub mod time;

pub use batch::parse_batch_roster_json_str;
pub use time::{parse_time_range, ClockMinutes, TimeRangeError, TimeSlot};
