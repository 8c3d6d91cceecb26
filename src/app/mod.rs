//! Application boundary: port traits and outbound events.
//!
//! The station tasks in [`crate::tasks`] only ever see hardware through
//! the traits in [`ports`], keeping the alert logic testable without
//! real peripherals.

pub mod events;
pub mod ports;
