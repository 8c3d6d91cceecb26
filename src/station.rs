//! Station wiring: one producer, four consumers, one executor.
//!
//! ```text
//!  ┌──────────────────────────────────────────────────────────┐
//!  │  Station thread (APP core)                               │
//!  │  ┌────────────────────────────────────────────────────┐  │
//!  │  │  futures_lite::block_on                            │  │
//!  │  │  ┌──────────────────────────────────────────────┐  │  │
//!  │  │  │  edge_executor::LocalExecutor                │  │  │
//!  │  │  │                                              │  │  │
//!  │  │  │  acquisition ─▶ display · indicator ·        │  │  │
//!  │  │  │                 buzzer · matrix              │  │  │
//!  │  │  └──────────────────────────────────────────────┘  │  │
//!  │  └────────────────────────────────────────────────────┘  │
//!  └──────────────────────────────────────────────────────────┘
//! ```
//!
//! All five tasks share one cooperative executor and therefore one
//! priority; a task yields only while blocked on its queue or paused.

use edge_executor::LocalExecutor;
use log::info;

use crate::app::ports::{
    AlertIndicator, Buzzer, EventSink, Pause, PictogramMatrix, SampleSource, TextDisplay,
};
use crate::channels::{ConsumerId, StationQueues};
use crate::config::StationConfig;
use crate::tasks::acquisition::AcquisitionTask;
use crate::tasks::buzzer::buzzer_task;
use crate::tasks::display::DisplayTask;
use crate::tasks::indicator::IndicatorTask;
use crate::tasks::matrix::matrix_task;

/// Task slots on the station executor.
pub const EXECUTOR_SLOTS: usize = 8;

/// The sensor source and the four actuators, one per task.
pub struct StationHardware<S, D, I, B, M> {
    pub source: S,
    pub display: D,
    pub indicator: I,
    pub buzzer: B,
    pub matrix: M,
}

/// Spawn the producer and the four consumers onto `executor`.
///
/// `pause` and `sink` are cloned once per task.
pub fn spawn_tasks<'a, S, D, I, B, M, P, E>(
    executor: &LocalExecutor<'a, EXECUTOR_SLOTS>,
    queues: &'a StationQueues,
    hardware: StationHardware<S, D, I, B, M>,
    config: &StationConfig,
    pause: P,
    sink: E,
) where
    S: SampleSource + 'a,
    D: TextDisplay + 'a,
    I: AlertIndicator + 'a,
    B: Buzzer + 'a,
    M: PictogramMatrix + 'a,
    P: Pause + Clone + 'a,
    E: EventSink + Clone + 'a,
{
    let StationHardware {
        source,
        display,
        indicator,
        buzzer,
        matrix,
    } = hardware;

    executor
        .spawn(
            DisplayTask::new(
                queues.receiver(ConsumerId::Display),
                display,
                pause.clone(),
                sink.clone(),
                config.display_settle_ms,
            )
            .run(),
        )
        .detach();
    executor
        .spawn(
            IndicatorTask::new(
                queues.receiver(ConsumerId::Indicator),
                indicator,
                pause.clone(),
                sink.clone(),
                config.indicator_settle_ms,
            )
            .run(),
        )
        .detach();
    executor
        .spawn(
            buzzer_task(
                queues.receiver(ConsumerId::Buzzer),
                buzzer,
                config.buzzer_pulse,
                pause.clone(),
                sink.clone(),
            )
            .run(),
        )
        .detach();
    executor
        .spawn(
            matrix_task(
                queues.receiver(ConsumerId::Matrix),
                matrix,
                config.matrix_colour.into(),
                config.matrix_pulse,
                pause.clone(),
                sink,
            )
            .run(),
        )
        .detach();
    executor
        .spawn(AcquisitionTask::new(source, queues.fan_out(), pause, config.sample_period_ms).run())
        .detach();
}

/// Spawn every task and drive the executor on the calling thread. Never returns.
pub fn run<S, D, I, B, M, P, E>(
    queues: &StationQueues,
    hardware: StationHardware<S, D, I, B, M>,
    config: &StationConfig,
    pause: P,
    sink: E,
) where
    S: SampleSource,
    D: TextDisplay,
    I: AlertIndicator,
    B: Buzzer,
    M: PictogramMatrix,
    P: Pause + Clone,
    E: EventSink + Clone,
{
    let executor: LocalExecutor<'_, EXECUTOR_SLOTS> = LocalExecutor::new();
    spawn_tasks(&executor, queues, hardware, config, pause, sink);

    info!(
        "Station running ({} ms sampling, queue depth {})",
        config.sample_period_ms,
        crate::config::QUEUE_DEPTH
    );

    futures_lite::future::block_on(executor.run(core::future::pending::<()>()));
}
