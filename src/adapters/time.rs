//! Reactor-backed task pauses.
//!
//! [`ReactorPause`] suspends the calling task on an `async-io-mini`
//! timer, so the executor thread sleeps instead of spinning while every
//! task waits.

use core::time::Duration;

use crate::app::ports::Pause;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReactorPause;

impl ReactorPause {
    pub fn new() -> Self {
        Self
    }
}

impl Pause for ReactorPause {
    async fn pause(&mut self, ms: u32) {
        async_io_mini::Timer::after(Duration::from_millis(u64::from(ms))).await;
    }
}
