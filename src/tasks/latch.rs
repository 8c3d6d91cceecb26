//! Driver loop for latching consumers.
//!
//! [`LatchTask`] performs the waits an [`AlertLatch`] asks for, feeds the
//! results back in, and applies the requested levels to a [`PulseOutput`].
//! The buzzer and matrix tasks are this loop with different outputs and
//! pulse patterns.

use log::info;

use crate::app::events::StationEvent;
use crate::app::ports::{EventSink, Pause};
use crate::channels::{probe, ConsumerId, SampleReceiver};
use crate::fsm::pulse::PulsePattern;
use crate::fsm::{AlertLatch, Drive, Next, Step, Transition, Wake};

/// Actuator driven by a latch: `On` during the active part of a beat.
pub trait PulseOutput {
    fn drive(&mut self, level: Drive);
}

pub struct LatchTask<'a, O, P, E> {
    id: ConsumerId,
    rx: SampleReceiver<'a>,
    latch: AlertLatch,
    output: O,
    pause: P,
    sink: E,
    next: Next,
}

impl<'a, O: PulseOutput, P: Pause, E: EventSink> LatchTask<'a, O, P, E> {
    pub fn new(
        id: ConsumerId,
        rx: SampleReceiver<'a>,
        pattern: PulsePattern,
        output: O,
        pause: P,
        sink: E,
    ) -> Self {
        let latch = AlertLatch::new(pattern);
        let next = latch.pending();
        Self {
            id,
            rx,
            latch,
            output,
            pause,
            sink,
            next,
        }
    }

    /// Perform the pending wait, then tick the latch once.
    pub async fn advance(&mut self) -> Step {
        let wake = match self.next {
            Next::Receive => Wake::Received(self.rx.receive().await),
            Next::Settle(ms) => {
                self.pause.pause(ms).await;
                Wake::Received(self.rx.receive().await)
            }
            Next::Hold(ms) => {
                self.pause.pause(ms).await;
                Wake::Elapsed
            }
            Next::HoldThenProbe(ms) => {
                self.pause.pause(ms).await;
                Wake::Probed(probe(&self.rx).ok())
            }
        };

        let step = self.latch.tick(wake);
        if let Some(level) = step.drive {
            self.output.drive(level);
        }
        match step.transition {
            Some(Transition::Latched(sample)) => self.sink.emit(&StationEvent::Latched {
                consumer: self.id,
                sample,
            }),
            Some(Transition::Released(sample)) => self.sink.emit(&StationEvent::Released {
                consumer: self.id,
                sample,
            }),
            None => {}
        }
        self.next = step.next;
        step
    }

    pub fn latch(&self) -> &AlertLatch {
        &self.latch
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// The wait the next [`advance`](Self::advance) will perform.
    pub fn next(&self) -> Next {
        self.next
    }

    pub async fn run(mut self) {
        info!("{} task started", self.id.name());
        self.sink.emit(&StationEvent::Started(self.id));
        loop {
            self.advance().await;
        }
    }
}
