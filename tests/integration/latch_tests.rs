//! Latching consumers: pulse cadence, persistence on empty probes, and
//! release on the first delivered normal sample.

use futures_lite::future::block_on;

use floodwatch::app::events::StationEvent;
use floodwatch::channels::{ConsumerId, StationQueues};
use floodwatch::config::StationConfig;
use floodwatch::drivers::led_matrix::Rgb;
use floodwatch::fsm::{Drive, Next, Step, Transition};
use floodwatch::tasks::buzzer::{buzzer_task, BuzzerTask};
use floodwatch::tasks::latch::{LatchTask, PulseOutput};
use floodwatch::tasks::matrix::matrix_task;

use super::mock_hw::{EventLog, MatrixCall, MockBuzzer, MockMatrix, RecordingPause, ALERT, NORMAL};

fn buzzer<'a>(
    queues: &'a StationQueues,
    pause: &RecordingPause,
    log: &EventLog,
) -> BuzzerTask<'a, MockBuzzer, RecordingPause, EventLog> {
    buzzer_task(
        queues.receiver(ConsumerId::Buzzer),
        MockBuzzer::default(),
        StationConfig::default().buzzer_pulse,
        pause.clone(),
        log.clone(),
    )
}

fn send(queues: &StationQueues, id: ConsumerId, sample: floodwatch::sample::Sample) {
    queues.channel(id).try_send(sample).unwrap();
}

/// Advance through the rest of the current pulse, including its probe.
/// Returns the step produced by the probe.
fn finish_pulse<O: PulseOutput>(task: &mut LatchTask<'_, O, RecordingPause, EventLog>) -> Step {
    loop {
        let probing = matches!(task.next(), Next::HoldThenProbe(_));
        let step = block_on(task.advance());
        if probing {
            return step;
        }
    }
}

#[test]
fn alert_sample_latches_and_beeps_three_times_per_pulse() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let log = EventLog::new();
    let mut task = buzzer(&queues, &pause, &log);

    send(&queues, ConsumerId::Buzzer, ALERT);
    let step = block_on(task.advance());
    assert_eq!(step.drive, Some(Drive::On));
    assert_eq!(step.transition, Some(Transition::Latched(ALERT)));

    finish_pulse(&mut task);
    assert_eq!(
        task.output().inner().calls,
        vec![true, false, true, false, true, false, true]
    );
    assert_eq!(pause.taken(), vec![100; 6]);
}

#[test]
fn empty_queue_never_clears_the_latch() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let log = EventLog::new();
    let mut task = buzzer(&queues, &pause, &log);

    send(&queues, ConsumerId::Buzzer, ALERT);
    block_on(task.advance());

    for n in 1..=8 {
        let step = finish_pulse(&mut task);
        assert_eq!(step.drive, Some(Drive::On), "pulse {n} must restart");
        assert_eq!(step.transition, None);
        assert!(task.latch().is_alerting());
        assert_eq!(task.latch().stale_probes(), n);
    }
    assert_eq!(log.events(), vec![StationEvent::Latched {
        consumer: ConsumerId::Buzzer,
        sample: ALERT,
    }]);
}

#[test]
fn first_normal_probe_releases_without_cooldown() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let log = EventLog::new();
    let mut task = buzzer(&queues, &pause, &log);

    send(&queues, ConsumerId::Buzzer, ALERT);
    block_on(task.advance());
    finish_pulse(&mut task);
    finish_pulse(&mut task);

    send(&queues, ConsumerId::Buzzer, NORMAL);
    pause.clear();
    let step = finish_pulse(&mut task);

    assert_eq!(step.drive, Some(Drive::Off));
    assert_eq!(step.transition, Some(Transition::Released(NORMAL)));
    assert!(!task.latch().is_alerting());
    assert!(!task.output().inner().is_sounding());
    // Back on the blocking receive; the only pauses were the pulse itself.
    assert_eq!(task.next(), Next::Receive);
    assert_eq!(pause.taken(), vec![100; 6]);
    assert_eq!(task.latch().stale_probes(), 0);
}

#[test]
fn alert_probe_keeps_pulsing_and_consumes_one_sample() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let log = EventLog::new();
    let mut task = buzzer(&queues, &pause, &log);

    send(&queues, ConsumerId::Buzzer, ALERT);
    block_on(task.advance());

    send(&queues, ConsumerId::Buzzer, ALERT);
    send(&queues, ConsumerId::Buzzer, NORMAL);

    // Oldest first: the queued alert keeps the latch engaged...
    let step = finish_pulse(&mut task);
    assert_eq!(step.drive, Some(Drive::On));
    assert!(task.latch().is_alerting());

    // ...and only the next probe sees the normal sample.
    let step = finish_pulse(&mut task);
    assert_eq!(step.transition, Some(Transition::Released(NORMAL)));
}

#[test]
fn normal_sample_while_idle_turns_off_then_cools_down() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let log = EventLog::new();
    let mut task = buzzer(&queues, &pause, &log);

    send(&queues, ConsumerId::Buzzer, NORMAL);
    send(&queues, ConsumerId::Buzzer, NORMAL);
    let step = block_on(task.advance());
    assert_eq!(step.drive, Some(Drive::Off));
    assert_eq!(step.next, Next::Settle(200));
    assert!(pause.taken().is_empty());

    block_on(task.advance());
    assert_eq!(pause.taken(), vec![200]);
    assert_eq!(task.output().inner().calls, vec![false, false]);
    assert!(log.events().is_empty());
}

#[test]
fn matrix_shows_pictogram_then_blank_per_pulse() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let log = EventLog::new();
    let config = StationConfig::default();
    let mut task = matrix_task(
        queues.receiver(ConsumerId::Matrix),
        MockMatrix::default(),
        config.matrix_colour.into(),
        config.matrix_pulse,
        pause.clone(),
        log.clone(),
    );

    send(&queues, ConsumerId::Matrix, ALERT);
    block_on(task.advance());
    let step = finish_pulse(&mut task);
    assert_eq!(step.drive, Some(Drive::On));

    let red = Rgb::new(100, 0, 0);
    assert_eq!(
        task.output().inner().calls,
        vec![
            MatrixCall::Show { lit: 8, colour: red },
            MatrixCall::Blank,
            MatrixCall::Show { lit: 8, colour: red },
        ]
    );
    assert_eq!(pause.taken(), vec![500, 500]);

    send(&queues, ConsumerId::Matrix, NORMAL);
    let step = finish_pulse(&mut task);
    assert_eq!(step.transition, Some(Transition::Released(NORMAL)));
    assert!(!task.output().inner().is_lit());
}

#[test]
fn matrix_idle_settle_is_300ms() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let log = EventLog::new();
    let config = StationConfig::default();
    let mut task = matrix_task(
        queues.receiver(ConsumerId::Matrix),
        MockMatrix::default(),
        config.matrix_colour.into(),
        config.matrix_pulse,
        pause.clone(),
        log.clone(),
    );

    send(&queues, ConsumerId::Matrix, NORMAL);
    send(&queues, ConsumerId::Matrix, ALERT);
    block_on(task.advance());
    assert_eq!(task.output().inner().calls, vec![MatrixCall::Blank]);

    let step = block_on(task.advance());
    assert_eq!(pause.taken(), vec![300]);
    assert_eq!(step.transition, Some(Transition::Latched(ALERT)));
}
