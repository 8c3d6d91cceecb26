//! Piezo buzzer driver (active buzzer, on/off only).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the pin is a real GPIO output.
//! On host/test: state is tracked in-memory only.

use embedded_hal::digital::OutputPin;

pub struct BuzzerDriver<P> {
    pin: P,
    sounding: bool,
}

impl<P: OutputPin> BuzzerDriver<P> {
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, sounding: false })
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        self.pin.set_state(on.into())?;
        self.sounding = on;
        Ok(())
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }
}
