//! Outbound station events.
//!
//! Consumer tasks emit these through the [`EventSink`](super::ports::EventSink)
//! port.  Dropped samples are deliberately not an event.

use crate::channels::ConsumerId;
use crate::sample::Sample;

/// Structured events emitted by the station tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationEvent {
    /// A consumer task entered its loop.
    Started(ConsumerId),

    /// A latching consumer engaged on an alert sample.
    Latched { consumer: ConsumerId, sample: Sample },

    /// A latching consumer released on a probed normal sample.
    Released { consumer: ConsumerId, sample: Sample },
}
