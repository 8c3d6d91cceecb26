//! 128x64 OLED text panel.
//!
//! Holds the most recent [`DisplayFrame`] and writes each frame to the
//! log. The SSD1306 glyph renderer and I²C transfer sit outside this
//! crate; the panel only records what it was asked to show.

use log::{debug, info};

use crate::pins;
use crate::tasks::display::DisplayFrame;

pub struct OledPanel {
    addr: u8,
    last: Option<DisplayFrame>,
    frames: u32,
}

impl OledPanel {
    pub fn new() -> Self {
        info!(
            "oled: SSD1306 @ {:#04x} on I2C (SDA={}, SCL={}, {} Hz)",
            pins::OLED_I2C_ADDR,
            pins::I2C_SDA_GPIO,
            pins::I2C_SCL_GPIO,
            pins::I2C_FREQ_HZ
        );
        Self {
            addr: pins::OLED_I2C_ADDR,
            last: None,
            frames: 0,
        }
    }

    pub fn present(&mut self, frame: &DisplayFrame) {
        for line in frame.lines() {
            debug!("oled@{:#04x} ({:>3},{:>2}) {}", self.addr, line.x, line.y, line.text);
        }
        self.last = Some(frame.clone());
        self.frames = self.frames.wrapping_add(1);
    }

    pub fn last_frame(&self) -> Option<&DisplayFrame> {
        self.last.as_ref()
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl Default for OledPanel {
    fn default() -> Self {
        Self::new()
    }
}
