//! 5x5 WS2812 LED-matrix driver.
//!
//! Keeps an owned frame buffer of 25 GRB words and clocks it out on
//! [`flush`](LedMatrix::flush).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the frame is encoded as WS2812 bit pulses and sent through
//! an RMT transmit channel.
//! On host/test: the frame buffer is the only output.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tasks::matrix::{Pictogram, MATRIX_CELLS};

#[cfg(target_os = "espidf")]
use esp_idf_hal::rmt::TxRmtDriver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// 24-bit wire word for one WS2812 cell: green, red, blue, MSB first.
pub const fn urgb_u32(c: Rgb) -> u32 {
    ((c.g as u32) << 16) | ((c.r as u32) << 8) | c.b as u32
}

pub struct LedMatrix {
    frame: [u32; MATRIX_CELLS],
    flushes: u32,
    #[cfg(target_os = "espidf")]
    tx: TxRmtDriver<'static>,
}

impl LedMatrix {
    #[cfg(target_os = "espidf")]
    pub fn new(tx: TxRmtDriver<'static>) -> Self {
        Self { frame: [0; MATRIX_CELLS], flushes: 0, tx }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self { frame: [0; MATRIX_CELLS], flushes: 0 }
    }

    /// Lit cells take `colour`, every other cell is dark.
    pub fn fill(&mut self, pictogram: &Pictogram, colour: Rgb) {
        let word = urgb_u32(colour);
        for (cell, lit) in self.frame.iter_mut().zip(pictogram) {
            *cell = if *lit { word } else { 0 };
        }
    }

    pub fn clear(&mut self) {
        self.frame = [0; MATRIX_CELLS];
    }

    pub fn frame(&self) -> &[u32; MATRIX_CELLS] {
        &self.frame
    }

    /// Number of frames pushed to the chain so far.
    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    #[cfg(target_os = "espidf")]
    pub fn flush(&mut self) -> Result<()> {
        use core::time::Duration;
        use esp_idf_hal::rmt::{PinState, Pulse, VariableLengthSignal};

        use crate::error::Error;

        let ticks_hz = self.tx.counter_clock().map_err(|_| Error::Driver("rmt clock"))?;
        let pulse = |state, ns| {
            Pulse::new_with_duration(ticks_hz, state, &Duration::from_nanos(ns))
                .map_err(|_| Error::Driver("rmt pulse"))
        };
        let t0h = pulse(PinState::High, 350)?;
        let t0l = pulse(PinState::Low, 800)?;
        let t1h = pulse(PinState::High, 700)?;
        let t1l = pulse(PinState::Low, 600)?;

        let mut signal = VariableLengthSignal::with_capacity(MATRIX_CELLS * 24 * 2);
        for word in self.frame {
            for bit in (0..24).rev() {
                let pair = if (word >> bit) & 1 == 1 { [&t1h, &t1l] } else { [&t0h, &t0l] };
                signal.push(pair).map_err(|_| Error::Driver("rmt signal"))?;
            }
        }
        self.tx
            .start_blocking(&signal)
            .map_err(|_| Error::Driver("rmt transmit"))?;
        self.flushes = self.flushes.wrapping_add(1);
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn flush(&mut self) -> Result<()> {
        self.flushes = self.flushes.wrapping_add(1);
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for LedMatrix {
    fn default() -> Self {
        Self::new()
    }
}
