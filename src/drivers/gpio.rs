//! Push-pull output pin over the raw GPIO helpers in [`hw_init`].
//!
//! Implements the `embedded-hal` digital traits so the actuator drivers
//! stay generic over their pins.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the pin level via `gpio_set_level`.
//! On host/test: only the cached level changes.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::drivers::hw_init;

#[derive(Debug)]
pub struct GpioOut {
    gpio: i32,
    high: bool,
}

impl GpioOut {
    /// The pin must already be configured as an output by `hw_init`.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }
}

impl ErrorType for GpioOut {
    type Error = Infallible;
}

impl OutputPin for GpioOut {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, false);
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, true);
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for GpioOut {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}
