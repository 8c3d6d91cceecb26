//! Port traits: the hexagonal boundary between the station tasks and the outside world.
//!
//! ```text
//!   SampleSource ──▶ Acquisition ──▶ queues ──▶ Consumers ──▶ actuator ports
//! ```
//!
//! Drivers implement these traits (see [`crate::adapters::hardware`]).
//! The tasks consume them via generics, so the sampling and alert logic
//! never touches hardware directly and runs unchanged against mocks.

use core::future::Future;

use crate::drivers::led_matrix::Rgb;
use crate::sample::Sample;
use crate::tasks::display::DisplayFrame;
use crate::tasks::matrix::Pictogram;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → station)
// ───────────────────────────────────────────────────────────────

/// Synchronous read of both analog channels.
pub trait SampleSource {
    fn read(&mut self) -> Sample;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapters: station → hardware)
// ───────────────────────────────────────────────────────────────

/// Four-line text panel.  Glyph rendering and bus transfer live behind it.
pub trait TextDisplay {
    fn show(&mut self, frame: &DisplayFrame);
}

/// Tri-colour status LED.  Only the red channel is used.
pub trait AlertIndicator {
    fn set_red(&mut self, on: bool);
}

/// Binary buzzer output.
pub trait Buzzer {
    fn set_tone(&mut self, on: bool);
}

/// 5x5 addressable LED matrix.
pub trait PictogramMatrix {
    /// Light the cells of `pictogram` in `colour`, all others dark.
    fn show(&mut self, pictogram: &Pictogram, colour: Rgb);

    /// Turn every cell off.
    fn blank(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Suspends the calling task for a fixed delay.
pub trait Pause {
    fn pause(&mut self, ms: u32) -> impl Future<Output = ()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: station → logging)
// ───────────────────────────────────────────────────────────────

/// Tasks emit structured [`StationEvent`](super::events::StationEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::StationEvent);
}
