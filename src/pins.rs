//! GPIO / peripheral pin assignments for the flood-alert station board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors: Analog (ADC1)
// ---------------------------------------------------------------------------

/// Water-level probe, ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const WATER_LEVEL_ADC_GPIO: i32 = 1;
pub const ADC1_CH_WATER_LEVEL: u32 = 0;

/// Rain gauge, ADC1 channel 1 (GPIO 2 on ESP32-S3).
pub const RAIN_VOLUME_ADC_GPIO: i32 = 2;
pub const ADC1_CH_RAIN_VOLUME: u32 = 1;

// ---------------------------------------------------------------------------
// Status LED (discrete RGB, active HIGH)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 13;
pub const LED_G_GPIO: i32 = 11;
pub const LED_B_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Buzzer (active HIGH)
// ---------------------------------------------------------------------------

pub const BUZZER_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// 5x5 WS2812 matrix (RMT channel 0)
// ---------------------------------------------------------------------------

pub const LED_MATRIX_DATA_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// I²C bus (SSD1306 128x64 OLED)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;
pub const OLED_I2C_ADDR: u8 = 0x3C;
pub const I2C_FREQ_HZ: u32 = 400_000;

// ---------------------------------------------------------------------------
// Bootloader button (active-low with pull-up)
// ---------------------------------------------------------------------------

/// Falling edge reboots into download mode.
pub const BOOTSEL_BUTTON_GPIO: i32 = 6;
