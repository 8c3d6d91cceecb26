//! Single 12-bit analog input.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads an ADC1 channel via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::AtomicU16;

pub struct AdcChannel {
    channel: u32,
    #[cfg_attr(target_os = "espidf", allow(dead_code))]
    sim: &'static AtomicU16,
    reads: u32,
}

impl AdcChannel {
    pub const fn new(channel: u32, sim: &'static AtomicU16) -> Self {
        Self { channel, sim, reads: 0 }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }

    /// Raw conversion, unclamped.
    pub fn read(&mut self) -> u16 {
        self.reads = self.reads.wrapping_add(1);
        self.read_adc()
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        crate::drivers::hw_init::adc1_read(self.channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        self.sim.load(core::sync::atomic::Ordering::Relaxed)
    }
}
