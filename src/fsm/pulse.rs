//! Pulse timing for latching consumers.

use serde::{Deserialize, Serialize};

/// One alert pulse: `beats` repetitions of `on_ms` active then `off_ms`
/// quiet, after which the queue is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulsePattern {
    pub on_ms: u32,
    pub off_ms: u32,
    pub beats: u8,
    /// Pause after a non-alert sample is taken while idle.
    pub idle_settle_ms: u32,
}

impl PulsePattern {
    /// Beats per pulse, never less than one.
    pub fn beat_count(&self) -> u8 {
        self.beats.max(1)
    }

    /// Duration of one full pulse, i.e. the spacing between probes.
    pub fn period_ms(&self) -> u32 {
        (self.on_ms + self.off_ms) * u32::from(self.beat_count())
    }

    /// Whether `beat` is the final beat of a pulse.
    pub fn is_last_beat(&self, beat: u8) -> bool {
        beat.saturating_add(1) >= self.beat_count()
    }
}
