//! Unified error types for the station firmware.
//!
//! The core only knows two error classes, both produced by the sample
//! queues and both handled where they occur.  Everything else funnels
//! into [`Error`] at boot, where `main` decides whether to halt.
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A queue operation did not transfer a sample.
    Queue(QueueError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// An actuator driver could not be brought up.
    Driver(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue(e) => write!(f, "queue: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Driver(msg) => write!(f, "driver: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Queue errors
// ---------------------------------------------------------------------------

/// Outcome of a non-blocking queue operation that moved nothing.
///
/// Neither variant is a fault: `Full` means the producer dropped the
/// sample for that consumer, `Empty` means the consumer has no fresh data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The consumer's queue already holds its capacity; the new sample is discarded.
    Full,
    /// Nothing was waiting in the queue.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "queue full, sample dropped"),
            Self::Empty => write!(f, "queue empty"),
        }
    }
}

impl std::error::Error for QueueError {}

impl From<QueueError> for Error {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
