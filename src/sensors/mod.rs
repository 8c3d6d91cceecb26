//! Sensor subsystem: the two analog probes and the aggregating [`SensorHub`].
//!
//! The hub implements the acquisition side of a cycle: read water level,
//! read rain volume, package both as one clamped [`Sample`].

pub mod analog;

use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::ports::SampleSource;
use crate::pins;
use crate::sample::Sample;
use analog::AdcChannel;

static SIM_WATER_LEVEL_ADC: AtomicU16 = AtomicU16::new(0);
static SIM_RAIN_VOLUME_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_water_level_adc(raw: u16) {
    SIM_WATER_LEVEL_ADC.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_rain_volume_adc(raw: u16) {
    SIM_RAIN_VOLUME_ADC.store(raw, Ordering::Relaxed);
}

/// Owns both analog channels.
pub struct SensorHub {
    pub water_level: AdcChannel,
    pub rain_volume: AdcChannel,
}

impl SensorHub {
    pub fn new() -> Self {
        Self {
            water_level: AdcChannel::new(pins::ADC1_CH_WATER_LEVEL, &SIM_WATER_LEVEL_ADC),
            rain_volume: AdcChannel::new(pins::ADC1_CH_RAIN_VOLUME, &SIM_RAIN_VOLUME_ADC),
        }
    }

    /// Water level first, then rain volume, values above full scale clamped.
    pub fn sample(&mut self) -> Sample {
        let water = self.water_level.read();
        let rain = self.rain_volume.read();
        Sample::new(water, rain)
    }
}

impl Default for SensorHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for SensorHub {
    fn read(&mut self) -> Sample {
        self.sample()
    }
}
