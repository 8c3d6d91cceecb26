//! Hardware adapter: bridges the actuator drivers to the port traits.
//!
//! Each driver implements its port directly.  Pin and bus errors stop
//! here: they are logged at `warn` and the task carries on with its next
//! step.  The sample source port lives with the [`SensorHub`](crate::sensors::SensorHub).

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::{AlertIndicator, Buzzer, PictogramMatrix, TextDisplay};
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::led_matrix::{LedMatrix, Rgb};
use crate::drivers::oled::OledPanel;
use crate::drivers::status_led::StatusLed;
use crate::tasks::display::DisplayFrame;
use crate::tasks::matrix::Pictogram;

// ── TextDisplay ───────────────────────────────────────────────

impl TextDisplay for OledPanel {
    fn show(&mut self, frame: &DisplayFrame) {
        self.present(frame);
    }
}

// ── AlertIndicator ────────────────────────────────────────────

impl<P: OutputPin> AlertIndicator for StatusLed<P> {
    fn set_red(&mut self, on: bool) {
        if let Err(e) = StatusLed::set_red(self, on) {
            warn!("status led: set red={} failed: {:?}", on, e);
        }
    }
}

// ── Buzzer ────────────────────────────────────────────────────

impl<P: OutputPin> Buzzer for BuzzerDriver<P> {
    fn set_tone(&mut self, on: bool) {
        if let Err(e) = self.set(on) {
            warn!("buzzer: set {} failed: {:?}", on, e);
        }
    }
}

// ── PictogramMatrix ───────────────────────────────────────────

impl PictogramMatrix for LedMatrix {
    fn show(&mut self, pictogram: &Pictogram, colour: Rgb) {
        self.fill(pictogram, colour);
        if let Err(e) = self.flush() {
            warn!("led matrix: {}", e);
        }
    }

    fn blank(&mut self) {
        self.clear();
        if let Err(e) = self.flush() {
            warn!("led matrix: {}", e);
        }
    }
}
