//! Sensor acquisition: the single producer.
//!
//! Polls the [`SampleSource`] once per period and offers the sample to
//! every consumer queue.  Full queues drop the sample for that consumer;
//! nothing is retried and nothing is logged.

use log::{info, trace};

use crate::app::ports::{Pause, SampleSource};
use crate::channels::{FanOut, PublishReport};

pub struct AcquisitionTask<'a, S, P> {
    source: S,
    fan_out: FanOut<'a>,
    pause: P,
    period_ms: u32,
}

impl<'a, S: SampleSource, P: Pause> AcquisitionTask<'a, S, P> {
    pub fn new(source: S, fan_out: FanOut<'a>, pause: P, period_ms: u32) -> Self {
        Self {
            source,
            fan_out,
            pause,
            period_ms,
        }
    }

    /// Read exactly one sample and fan it out.
    pub fn poll_once(&mut self) -> PublishReport {
        let sample = self.source.read();
        trace!(
            "ACQ | water={} rain={}",
            sample.water_level, sample.rain_volume
        );
        self.fan_out.publish(sample)
    }

    /// One full period: poll, publish, then sleep.
    pub async fn cycle(&mut self) -> PublishReport {
        let report = self.poll_once();
        self.pause.pause(self.period_ms).await;
        report
    }

    pub fn fan_out(&self) -> &FanOut<'a> {
        &self.fan_out
    }

    pub async fn run(mut self) {
        info!("Acquisition task started ({} ms period)", self.period_ms);
        loop {
            self.cycle().await;
        }
    }
}
