//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod bootsel;
pub mod buzzer;
pub mod gpio;
pub mod hw_init;
pub mod led_matrix;
pub mod oled;
pub mod status_led;
pub mod task_pin;
