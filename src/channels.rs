//! Per-consumer sample queues and the producer's fan-out.
//!
//! Uses `embassy-sync` bounded channels, one per consumer.  The queues
//! live in a [`StationQueues`] value created once at boot and borrowed by
//! every task; the producer holds a [`FanOut`] with one sender per queue
//! and each consumer holds exactly one receiver.
//!
//! ```text
//!                       ┌──▶ display   queue (5) ──▶ DisplayTask
//! ┌──────────────┐      ├──▶ indicator queue (5) ──▶ IndicatorTask
//! │ Acquisition  │──────┤
//! │ (producer)   │      ├──▶ buzzer    queue (5) ──▶ BuzzerTask
//! └──────────────┘      └──▶ matrix    queue (5) ──▶ MatrixTask
//! ```
//!
//! The four sends of one cycle are independent `try_send`s.  A full queue
//! drops the new sample for that consumer only, so consumers can act on
//! samples from different cycles at any instant.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::QUEUE_DEPTH;
use crate::error::QueueError;
use crate::sample::Sample;

pub type SampleChannel = Channel<CriticalSectionRawMutex, Sample, QUEUE_DEPTH>;
pub type SampleSender<'a> = Sender<'a, CriticalSectionRawMutex, Sample, QUEUE_DEPTH>;
pub type SampleReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, Sample, QUEUE_DEPTH>;

/// The four consumers, in fan-out order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ConsumerId {
    Display = 0,
    Indicator = 1,
    Buzzer = 2,
    Matrix = 3,
}

impl ConsumerId {
    pub const COUNT: usize = 4;
    pub const ALL: [Self; Self::COUNT] = [Self::Display, Self::Indicator, Self::Buzzer, Self::Matrix];

    pub fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Indicator => "indicator",
            Self::Buzzer => "buzzer",
            Self::Matrix => "matrix",
        }
    }
}

/// Owner of the four consumer queues.
pub struct StationQueues {
    display: SampleChannel,
    indicator: SampleChannel,
    buzzer: SampleChannel,
    matrix: SampleChannel,
}

impl StationQueues {
    pub const fn new() -> Self {
        Self {
            display: Channel::new(),
            indicator: Channel::new(),
            buzzer: Channel::new(),
            matrix: Channel::new(),
        }
    }

    pub fn channel(&self, id: ConsumerId) -> &SampleChannel {
        match id {
            ConsumerId::Display => &self.display,
            ConsumerId::Indicator => &self.indicator,
            ConsumerId::Buzzer => &self.buzzer,
            ConsumerId::Matrix => &self.matrix,
        }
    }

    pub fn receiver(&self, id: ConsumerId) -> SampleReceiver<'_> {
        self.channel(id).receiver()
    }

    /// Build the producer side, one sender per queue.
    pub fn fan_out(&self) -> FanOut<'_> {
        FanOut::new(ConsumerId::ALL.map(|id| self.channel(id).sender()))
    }
}

impl Default for StationQueues {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blocking probe of a consumer queue.
pub fn probe(rx: &SampleReceiver<'_>) -> Result<Sample, QueueError> {
    rx.try_receive().map_err(|_| QueueError::Empty)
}

// ── Producer side ─────────────────────────────────────────────

/// Delivery counters for one queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Samples the producer attempted to enqueue.
    pub offered: u32,
    /// Samples discarded because the queue was full.
    pub dropped: u32,
}

/// Which queues accepted the sample of one publish call, in [`ConsumerId`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    pub delivered: [bool; ConsumerId::COUNT],
}

impl PublishReport {
    pub fn delivered_to(&self, id: ConsumerId) -> bool {
        self.delivered[id as usize]
    }

    pub fn all_delivered(&self) -> bool {
        self.delivered.iter().all(|d| *d)
    }
}

/// Producer handle: copies each sample into every consumer queue.
pub struct FanOut<'a> {
    senders: [SampleSender<'a>; ConsumerId::COUNT],
    stats: [QueueStats; ConsumerId::COUNT],
}

impl<'a> FanOut<'a> {
    pub fn new(senders: [SampleSender<'a>; ConsumerId::COUNT]) -> Self {
        Self {
            senders,
            stats: [QueueStats::default(); ConsumerId::COUNT],
        }
    }

    /// Offer `sample` to a single queue without blocking.
    pub fn offer(&mut self, id: ConsumerId, sample: Sample) -> Result<(), QueueError> {
        let stats = &mut self.stats[id as usize];
        stats.offered = stats.offered.wrapping_add(1);
        self.senders[id as usize].try_send(sample).map_err(|_| {
            stats.dropped = stats.dropped.wrapping_add(1);
            QueueError::Full
        })
    }

    /// Offer `sample` to every queue in fan-out order.
    ///
    /// A full queue is neither retried nor reported beyond the returned
    /// report and the drop counter.
    pub fn publish(&mut self, sample: Sample) -> PublishReport {
        let mut delivered = [false; ConsumerId::COUNT];
        for id in ConsumerId::ALL {
            delivered[id as usize] = self.offer(id, sample).is_ok();
        }
        PublishReport { delivered }
    }

    pub fn stats(&self, id: ConsumerId) -> QueueStats {
        self.stats[id as usize]
    }
}
