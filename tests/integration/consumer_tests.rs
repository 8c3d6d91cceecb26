//! Memoryless consumers: display and indicator follow each sample.

use futures_lite::future::block_on;

use floodwatch::channels::{ConsumerId, StationQueues};
use floodwatch::config::StationConfig;
use floodwatch::sample::Sample;
use floodwatch::tasks::display::DisplayTask;
use floodwatch::tasks::indicator::IndicatorTask;

use super::mock_hw::{EventLog, MockDisplay, MockIndicator, RecordingPause, ALERT, NORMAL};

#[test]
fn display_renders_every_sample_then_settles() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let config = StationConfig::default();
    let mut task = DisplayTask::new(
        queues.receiver(ConsumerId::Display),
        MockDisplay::default(),
        pause.clone(),
        EventLog::new(),
        config.display_settle_ms,
    );

    let ch = queues.channel(ConsumerId::Display);
    ch.try_send(ALERT).unwrap();
    ch.try_send(NORMAL).unwrap();

    assert_eq!(block_on(task.cycle()), ALERT);
    assert_eq!(block_on(task.cycle()), NORMAL);

    let frames = &task.display().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].water.text.as_str(), "N.Agua:  73%");
    assert_eq!(frames[0].rain.text.as_str(), "V.Chuva:  24%");
    assert_eq!(frames[0].mode.text.as_str(), "MODO ALERTA!!!");
    assert_eq!(frames[1].water.text.as_str(), "N.Agua:  24%");
    assert_eq!(frames[1].mode.text.as_str(), "Modo: Normal");
    assert_eq!(pause.taken(), vec![300, 300]);
}

#[test]
fn indicator_is_red_exactly_while_samples_alert() {
    let queues = StationQueues::new();
    let pause = RecordingPause::new();
    let mut task = IndicatorTask::new(
        queues.receiver(ConsumerId::Indicator),
        MockIndicator::default(),
        pause.clone(),
        EventLog::new(),
        StationConfig::default().indicator_settle_ms,
    );

    let rain_only = Sample::new(0, 3276);
    let ch = queues.channel(ConsumerId::Indicator);
    for s in [NORMAL, ALERT, NORMAL, rain_only] {
        ch.try_send(s).unwrap();
    }
    for _ in 0..4 {
        block_on(task.cycle());
    }

    assert_eq!(task.led().calls, vec![false, true, false, true]);
    assert_eq!(pause.taken(), vec![100; 4]);
}
