//! Whole-station walkthroughs: one producer and all four consumers
//! stepped by hand in a fixed interleaving.

use futures_lite::future::block_on;

use floodwatch::app::events::StationEvent;
use floodwatch::channels::{ConsumerId, StationQueues};
use floodwatch::config::StationConfig;
use floodwatch::fsm::{Next, Transition};
use floodwatch::tasks::acquisition::AcquisitionTask;
use floodwatch::tasks::buzzer::buzzer_task;
use floodwatch::tasks::display::DisplayTask;
use floodwatch::tasks::indicator::IndicatorTask;
use floodwatch::tasks::matrix::matrix_task;

use super::mock_hw::{
    EventLog, MockBuzzer, MockDisplay, MockIndicator, MockMatrix, MockSource, RecordingPause,
    ALERT, NORMAL,
};

#[test]
fn flood_then_recede() {
    let queues = StationQueues::new();
    let config = StationConfig::default();
    let pause = RecordingPause::new();
    let log = EventLog::new();

    let mut acq = AcquisitionTask::new(
        MockSource::new(&[ALERT, NORMAL]),
        queues.fan_out(),
        pause.clone(),
        config.sample_period_ms,
    );
    let mut display = DisplayTask::new(
        queues.receiver(ConsumerId::Display),
        MockDisplay::default(),
        pause.clone(),
        log.clone(),
        config.display_settle_ms,
    );
    let mut indicator = IndicatorTask::new(
        queues.receiver(ConsumerId::Indicator),
        MockIndicator::default(),
        pause.clone(),
        log.clone(),
        config.indicator_settle_ms,
    );
    let mut buzzer = buzzer_task(
        queues.receiver(ConsumerId::Buzzer),
        MockBuzzer::default(),
        config.buzzer_pulse,
        pause.clone(),
        log.clone(),
    );
    let mut matrix = matrix_task(
        queues.receiver(ConsumerId::Matrix),
        MockMatrix::default(),
        config.matrix_colour.into(),
        config.matrix_pulse,
        pause.clone(),
        log.clone(),
    );

    // Cycle 1: water at 73%, rain at 24%.
    assert!(block_on(acq.cycle()).all_delivered());
    block_on(display.cycle());
    block_on(indicator.cycle());
    block_on(buzzer.advance());
    block_on(matrix.advance());

    let frame = &display.display().frames[0];
    assert_eq!(frame.title.text.as_str(), "EST. DE ALERTA");
    assert_eq!(frame.water.text.as_str(), "N.Agua:  73%");
    assert_eq!(frame.rain.text.as_str(), "V.Chuva:  24%");
    assert_eq!(frame.mode.text.as_str(), "MODO ALERTA!!!");
    assert!(indicator.led().is_red());
    assert!(buzzer.output().inner().is_sounding());
    assert!(matrix.output().inner().is_lit());

    // Cycle 2: back to normal.
    assert!(block_on(acq.cycle()).all_delivered());
    block_on(display.cycle());
    block_on(indicator.cycle());
    assert_eq!(display.display().frames[1].mode.text.as_str(), "Modo: Normal");
    assert!(!indicator.led().is_red());

    // The latches only notice at the end of their current pulse.
    assert!(buzzer.latch().is_alerting());
    assert!(matrix.latch().is_alerting());
    let released = loop {
        if let Some(t) = block_on(buzzer.advance()).transition {
            break t;
        }
    };
    assert_eq!(released, Transition::Released(NORMAL));
    let released = loop {
        if let Some(t) = block_on(matrix.advance()).transition {
            break t;
        }
    };
    assert_eq!(released, Transition::Released(NORMAL));

    assert!(!buzzer.output().inner().is_sounding());
    assert!(!matrix.output().inner().is_lit());
    assert_eq!(buzzer.next(), Next::Receive);
    assert_eq!(matrix.next(), Next::Receive);

    assert_eq!(
        log.events(),
        vec![
            StationEvent::Latched { consumer: ConsumerId::Buzzer, sample: ALERT },
            StationEvent::Latched { consumer: ConsumerId::Matrix, sample: ALERT },
            StationEvent::Released { consumer: ConsumerId::Buzzer, sample: NORMAL },
            StationEvent::Released { consumer: ConsumerId::Matrix, sample: NORMAL },
        ]
    );
}

#[test]
fn consumers_desynchronise_while_a_latch_pulses() {
    let queues = StationQueues::new();
    let config = StationConfig::default();
    let pause = RecordingPause::new();
    let log = EventLog::new();

    let mut acq = AcquisitionTask::new(
        MockSource::new(&[ALERT, NORMAL, NORMAL, NORMAL]),
        queues.fan_out(),
        pause.clone(),
        config.sample_period_ms,
    );
    let mut indicator = IndicatorTask::new(
        queues.receiver(ConsumerId::Indicator),
        MockIndicator::default(),
        pause.clone(),
        log.clone(),
        config.indicator_settle_ms,
    );
    let mut buzzer = buzzer_task(
        queues.receiver(ConsumerId::Buzzer),
        MockBuzzer::default(),
        config.buzzer_pulse,
        pause.clone(),
        log.clone(),
    );

    block_on(acq.cycle());
    block_on(indicator.cycle());
    block_on(buzzer.advance());

    // Three more normal cycles while the buzzer is mid-pulse.
    for _ in 0..3 {
        block_on(acq.cycle());
        block_on(indicator.cycle());
        block_on(buzzer.advance());
        assert!(!indicator.led().is_red());
        assert!(buzzer.latch().is_alerting(), "buzzer still alerting on stale data");
    }

    // Normal samples piled up behind the latch; the first probe releases.
    assert_eq!(queues.channel(ConsumerId::Buzzer).len(), 3);
    let step = loop {
        let step = block_on(buzzer.advance());
        if step.transition.is_some() {
            break step;
        }
    };
    assert_eq!(step.transition, Some(Transition::Released(NORMAL)));
    assert_eq!(queues.channel(ConsumerId::Buzzer).len(), 2);
}
