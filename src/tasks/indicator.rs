//! Indicator consumer: memoryless red status LED.
//!
//! One sample in, one actuation out: red on while the sample is in
//! alert, dark otherwise.

use log::info;

use crate::alert::is_alert;
use crate::app::events::StationEvent;
use crate::app::ports::{AlertIndicator, EventSink, Pause};
use crate::channels::{ConsumerId, SampleReceiver};
use crate::sample::Sample;

pub struct IndicatorTask<'a, I, P, E> {
    rx: SampleReceiver<'a>,
    led: I,
    pause: P,
    sink: E,
    settle_ms: u32,
}

impl<'a, I: AlertIndicator, P: Pause, E: EventSink> IndicatorTask<'a, I, P, E> {
    pub fn new(rx: SampleReceiver<'a>, led: I, pause: P, sink: E, settle_ms: u32) -> Self {
        Self {
            rx,
            led,
            pause,
            sink,
            settle_ms,
        }
    }

    /// Wait for a sample, drive the LED, then settle.
    pub async fn cycle(&mut self) -> Sample {
        let sample = self.rx.receive().await;
        self.led.set_red(is_alert(&sample));
        self.pause.pause(self.settle_ms).await;
        sample
    }

    pub fn led(&self) -> &I {
        &self.led
    }

    pub async fn run(mut self) {
        info!("Indicator task started");
        self.sink.emit(&StationEvent::Started(ConsumerId::Indicator));
        loop {
            self.cycle().await;
        }
    }
}
