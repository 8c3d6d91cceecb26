//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing station events to the ESP-IDF
//! logger (UART / USB-CDC in production, stderr under test).

use log::info;

use crate::app::events::StationEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`StationEvent`] to the serial console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &StationEvent) {
        match event {
            StationEvent::Started(consumer) => {
                info!("START | consumer={}", consumer.name());
            }
            StationEvent::Latched { consumer, sample } => {
                info!(
                    "LATCH | {} engaged | water={} ({}%) rain={} ({}%)",
                    consumer.name(),
                    sample.water_level,
                    sample.water_percent(),
                    sample.rain_volume,
                    sample.rain_percent(),
                );
            }
            StationEvent::Released { consumer, sample } => {
                info!(
                    "LATCH | {} released | water={} rain={}",
                    consumer.name(),
                    sample.water_level,
                    sample.rain_volume,
                );
            }
        }
    }
}
