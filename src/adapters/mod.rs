//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements        | Connects to                   |
//! |------------|-------------------|-------------------------------|
//! | `hardware` | SampleSource      | ESP32 ADC1 (via `SensorHub`)  |
//! |            | TextDisplay       | OLED panel                    |
//! |            | AlertIndicator    | RGB status LED (GPIO)         |
//! |            | Buzzer            | Buzzer GPIO                   |
//! |            | PictogramMatrix   | WS2812 matrix (RMT)           |
//! | `log_sink` | EventSink         | Serial log output             |
//! | `time`     | Pause             | async-io-mini reactor timers  |

pub mod hardware;
pub mod log_sink;
pub mod time;
