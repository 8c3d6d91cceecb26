//! Alert predicate shared by every consumer.
//!
//! Each consumer evaluates samples on its own and keeps its own state;
//! only this pure function is shared.

use crate::config::{RAIN_VOLUME_HIGH, WATER_LEVEL_HIGH};
use crate::sample::Sample;

/// Raw-value thresholds at or above which the station is in alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertThresholds {
    pub water_level_high: u16,
    pub rain_volume_high: u16,
}

impl AlertThresholds {
    /// The station's fixed thresholds.
    pub const FIXED: Self = Self {
        water_level_high: WATER_LEVEL_HIGH,
        rain_volume_high: RAIN_VOLUME_HIGH,
    };

    pub fn exceeded_by(&self, sample: &Sample) -> bool {
        sample.water_level >= self.water_level_high || sample.rain_volume >= self.rain_volume_high
    }
}

/// `true` when either channel is at or above its fixed threshold.
pub fn is_alert(sample: &Sample) -> bool {
    AlertThresholds::FIXED.exceeded_by(sample)
}
