//! Station configuration.
//!
//! Thresholds and timings are fixed for the lifetime of the firmware.
//! [`StationConfig::default()`] is the only source of values; there is
//! no persisted or provisioned configuration.

use serde::{Deserialize, Serialize};

use crate::fsm::pulse::PulsePattern;

/// Full-scale reading of the 12-bit ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

/// Water level at or above this raw value raises an alert (70% of full scale).
pub const WATER_LEVEL_HIGH: u16 = 2867;

/// Rain volume at or above this raw value raises an alert (80% of full scale).
pub const RAIN_VOLUME_HIGH: u16 = 3276;

/// Capacity of every per-consumer sample queue.
pub const QUEUE_DEPTH: usize = 5;

/// Core station configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    // --- Acquisition ---
    /// Sensor poll period (milliseconds)
    pub sample_period_ms: u32,

    // --- Memoryless consumers ---
    /// Pause after each display render (milliseconds)
    pub display_settle_ms: u32,
    /// Pause after each indicator update (milliseconds)
    pub indicator_settle_ms: u32,

    // --- Latching consumers ---
    /// Buzzer beep pattern while alerting
    pub buzzer_pulse: PulsePattern,
    /// Matrix pictogram blink pattern while alerting
    pub matrix_pulse: PulsePattern,
    /// Colour of lit matrix cells (R, G, B)
    pub matrix_colour: (u8, u8, u8),
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: 100, // 10 Hz

            display_settle_ms: 300,
            indicator_settle_ms: 100,

            // Three short beeps, then probe.
            buzzer_pulse: PulsePattern {
                on_ms: 100,
                off_ms: 100,
                beats: 3,
                idle_settle_ms: 200,
            },
            // One pictogram frame, one blank frame, then probe.
            matrix_pulse: PulsePattern {
                on_ms: 500,
                off_ms: 500,
                beats: 1,
                idle_settle_ms: 300,
            },
            matrix_colour: (100, 0, 0),
        }
    }
}
