//! One paired reading of the station's two analog channels.

use serde::{Deserialize, Serialize};

use crate::config::ADC_FULL_SCALE;

/// Raw water-level and rain-volume readings taken in the same poll.
///
/// Copied by value into every consumer queue; never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub water_level: u16,
    pub rain_volume: u16,
}

impl Sample {
    /// Build a sample, saturating both channels at the 12-bit full scale.
    pub const fn new(water_level: u16, rain_volume: u16) -> Self {
        Self {
            water_level: clamp_raw(water_level),
            rain_volume: clamp_raw(rain_volume),
        }
    }

    /// Water level as a whole percentage of full scale.
    pub fn water_percent(&self) -> u8 {
        percent(self.water_level)
    }

    /// Rain volume as a whole percentage of full scale.
    pub fn rain_percent(&self) -> u8 {
        percent(self.rain_volume)
    }
}

const fn clamp_raw(raw: u16) -> u16 {
    if raw > ADC_FULL_SCALE { ADC_FULL_SCALE } else { raw }
}

/// Convert a raw 12-bit reading to `(raw * 100) / 4095`, truncating.
///
/// Saturates at 100 for inputs above full scale.
pub fn percent(raw: u16) -> u8 {
    let raw = u32::from(clamp_raw(raw));
    (raw * 100 / u32::from(ADC_FULL_SCALE)) as u8
}
