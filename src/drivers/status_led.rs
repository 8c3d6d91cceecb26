//! RGB status LED driver.
//!
//! Three digital outputs drive discrete R/G/B LEDs (or a common-cathode
//! RGB LED). The station only ever lights red; green and blue are held
//! low at construction.

use embedded_hal::digital::OutputPin;

pub struct StatusLed<P> {
    red: P,
    green: P,
    blue: P,
    current: (bool, bool, bool),
}

impl<P: OutputPin> StatusLed<P> {
    /// Takes ownership of the pins and drives all three low.
    pub fn new(red: P, green: P, blue: P) -> Result<Self, P::Error> {
        let mut led = Self {
            red,
            green,
            blue,
            current: (false, false, false),
        };
        led.set_colour(false, false, false)?;
        Ok(led)
    }

    pub fn set_colour(&mut self, r: bool, g: bool, b: bool) -> Result<(), P::Error> {
        self.red.set_state(r.into())?;
        self.green.set_state(g.into())?;
        self.blue.set_state(b.into())?;
        self.current = (r, g, b);
        Ok(())
    }

    pub fn set_red(&mut self, on: bool) -> Result<(), P::Error> {
        self.red.set_state(on.into())?;
        self.current.0 = on;
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.set_colour(false, false, false)
    }

    pub fn current_colour(&self) -> (bool, bool, bool) {
        self.current
    }
}
