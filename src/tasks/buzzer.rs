//! Buzzer consumer: three short beeps per pulse while latched.

use crate::app::ports::{Buzzer, EventSink, Pause};
use crate::channels::{ConsumerId, SampleReceiver};
use crate::fsm::Drive;
use crate::fsm::pulse::PulsePattern;

use super::latch::{LatchTask, PulseOutput};

/// Adapts a [`Buzzer`] port to the latch output.
pub struct BuzzerPulse<B>(B);

impl<B: Buzzer> BuzzerPulse<B> {
    pub fn new(buzzer: B) -> Self {
        Self(buzzer)
    }

    pub fn inner(&self) -> &B {
        &self.0
    }
}

impl<B: Buzzer> PulseOutput for BuzzerPulse<B> {
    fn drive(&mut self, level: Drive) {
        self.0.set_tone(level == Drive::On);
    }
}

pub type BuzzerTask<'a, B, P, E> = LatchTask<'a, BuzzerPulse<B>, P, E>;

pub fn buzzer_task<'a, B: Buzzer, P: Pause, E: EventSink>(
    rx: SampleReceiver<'a>,
    buzzer: B,
    pattern: PulsePattern,
    pause: P,
    sink: E,
) -> BuzzerTask<'a, B, P, E> {
    LatchTask::new(ConsumerId::Buzzer, rx, pattern, BuzzerPulse::new(buzzer), pause, sink)
}
