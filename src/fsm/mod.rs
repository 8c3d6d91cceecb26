//! Alert latch state machine shared by the buzzer and matrix consumers.
//!
//! ```text
//!              Received(alert)
//!   ┌──────┐ ─────────────────▶ ┌──────────────┐  Elapsed  ┌───────────────┐
//!   │ Idle │                    │ PulseOn{beat}│ ────────▶ │ PulseOff{beat}│
//!   └──────┘ ◀───────────────── └──────────────┘ ◀──────── └───────────────┘
//!      ▲  Probed(Some(normal))        ▲        Elapsed (more beats)  │
//!      │                              │  Probed(None | Some(alert))  │
//!      └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! The machine never blocks or sleeps.  Each [`AlertLatch::tick`] takes one
//! [`Wake`] and returns a [`Step`]: the actuator level to apply (if any) and
//! the [`Next`] wait the driving task must perform before ticking again.
//!
//! An empty probe keeps the latch engaged.  Only a delivered sample that
//! evaluates as normal releases it.

pub mod pulse;

use crate::alert::is_alert;
use crate::sample::Sample;
use pulse::PulsePattern;

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    Idle,
    PulseOn { beat: u8 },
    PulseOff { beat: u8 },
}

impl LatchState {
    pub fn is_alerting(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// What woke the consumer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// A sample returned by the blocking receive.
    Received(Sample),
    /// A pulse phase delay finished.
    Elapsed,
    /// Result of the non-blocking probe at the end of a pulse.
    Probed(Option<Sample>),
}

/// Actuator level requested by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    On,
    Off,
}

/// The wait the driving task performs before the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Block on the queue until a sample arrives.
    Receive,
    /// Pause, then block on the queue.
    Settle(u32),
    /// Pause, then tick with [`Wake::Elapsed`].
    Hold(u32),
    /// Pause, then probe the queue without blocking and tick with [`Wake::Probed`].
    HoldThenProbe(u32),
}

/// Latch engagement changes, reported alongside the step that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Latched(Sample),
    Released(Sample),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub drive: Option<Drive>,
    pub next: Next,
    pub transition: Option<Transition>,
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

pub struct AlertLatch {
    pattern: PulsePattern,
    state: LatchState,
    /// Consecutive probes that found the queue empty.
    stale_probes: u32,
}

impl AlertLatch {
    pub fn new(pattern: PulsePattern) -> Self {
        Self {
            pattern,
            state: LatchState::Idle,
            stale_probes: 0,
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    pub fn is_alerting(&self) -> bool {
        self.state.is_alerting()
    }

    pub fn stale_probes(&self) -> u32 {
        self.stale_probes
    }

    pub fn pattern(&self) -> &PulsePattern {
        &self.pattern
    }

    /// The wait the current state expects.
    pub fn pending(&self) -> Next {
        match self.state {
            LatchState::Idle => Next::Receive,
            LatchState::PulseOn { .. } => Next::Hold(self.pattern.on_ms),
            LatchState::PulseOff { beat } if self.pattern.is_last_beat(beat) => {
                Next::HoldThenProbe(self.pattern.off_ms)
            }
            LatchState::PulseOff { .. } => Next::Hold(self.pattern.off_ms),
        }
    }

    /// Advance the machine by one wake-up.
    ///
    /// A wake that does not belong to the current state is ignored: the
    /// state is kept, nothing is driven, and the state's own wait is
    /// re-issued.
    pub fn tick(&mut self, wake: Wake) -> Step {
        match (self.state, wake) {
            (LatchState::Idle, Wake::Received(sample)) => {
                self.stale_probes = 0;
                if is_alert(&sample) {
                    self.begin_pulse(Some(Transition::Latched(sample)))
                } else {
                    Step {
                        drive: Some(Drive::Off),
                        next: Next::Settle(self.pattern.idle_settle_ms),
                        transition: None,
                    }
                }
            }

            (LatchState::PulseOn { beat }, Wake::Elapsed) => {
                self.state = LatchState::PulseOff { beat };
                Step {
                    drive: Some(Drive::Off),
                    next: self.pending(),
                    transition: None,
                }
            }

            (LatchState::PulseOff { beat }, Wake::Elapsed) if !self.pattern.is_last_beat(beat) => {
                self.state = LatchState::PulseOn { beat: beat + 1 };
                Step {
                    drive: Some(Drive::On),
                    next: self.pending(),
                    transition: None,
                }
            }

            (LatchState::PulseOff { beat }, Wake::Probed(probe)) if self.pattern.is_last_beat(beat) => {
                match probe {
                    None => {
                        self.stale_probes = self.stale_probes.saturating_add(1);
                        self.begin_pulse(None)
                    }
                    Some(sample) if is_alert(&sample) => {
                        self.stale_probes = 0;
                        self.begin_pulse(None)
                    }
                    Some(sample) => {
                        self.stale_probes = 0;
                        self.state = LatchState::Idle;
                        Step {
                            drive: Some(Drive::Off),
                            next: Next::Receive,
                            transition: Some(Transition::Released(sample)),
                        }
                    }
                }
            }

            _ => Step {
                drive: None,
                next: self.pending(),
                transition: None,
            },
        }
    }

    fn begin_pulse(&mut self, transition: Option<Transition>) -> Step {
        self.state = LatchState::PulseOn { beat: 0 };
        Step {
            drive: Some(Drive::On),
            next: Next::Hold(self.pattern.on_ms),
            transition,
        }
    }
}
