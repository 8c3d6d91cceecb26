//! Whole-station tests: every task spawned on one executor and ticked by hand.

use edge_executor::LocalExecutor;

use floodwatch::app::events::StationEvent;
use floodwatch::channels::{ConsumerId, StationQueues};
use floodwatch::config::StationConfig;
use floodwatch::sample::Sample;
use floodwatch::station::{spawn_tasks, StationHardware, EXECUTOR_SLOTS};
use floodwatch::tasks::display::{MODE_ALERT, MODE_NORMAL};

use crate::mock_hw::{
    EventLog, MatrixCall, MockBuzzer, MockDisplay, MockIndicator, MockMatrix, MockSource,
    Shared, YieldPause, ALERT, NORMAL,
};

const TICKS: usize = 200;

struct Rig {
    display: Shared<MockDisplay>,
    indicator: Shared<MockIndicator>,
    buzzer: Shared<MockBuzzer>,
    matrix: Shared<MockMatrix>,
    log: EventLog,
}

/// Spawn the station over `samples` and tick it `TICKS` times.
fn run_station(samples: &[Sample]) -> Rig {
    let rig = Rig {
        display: Shared::default(),
        indicator: Shared::default(),
        buzzer: Shared::default(),
        matrix: Shared::default(),
        log: EventLog::new(),
    };
    let queues = StationQueues::new();
    let executor: LocalExecutor<'_, EXECUTOR_SLOTS> = LocalExecutor::new();

    spawn_tasks(
        &executor,
        &queues,
        StationHardware {
            source: MockSource::new(samples),
            display: rig.display.clone(),
            indicator: rig.indicator.clone(),
            buzzer: rig.buzzer.clone(),
            matrix: rig.matrix.clone(),
        },
        &StationConfig::default(),
        YieldPause,
        rig.log.clone(),
    );

    for _ in 0..TICKS {
        executor.try_tick();
    }
    rig
}

#[test]
fn consumers_start_in_spawn_order() {
    let rig = run_station(&[NORMAL]);
    let events = rig.log.events();

    assert_eq!(events[..4], [
        StationEvent::Started(ConsumerId::Display),
        StationEvent::Started(ConsumerId::Indicator),
        StationEvent::Started(ConsumerId::Buzzer),
        StationEvent::Started(ConsumerId::Matrix),
    ]);
}

#[test]
fn alert_source_reaches_every_actuator() {
    let rig = run_station(&[ALERT]);

    let display = rig.display.borrow();
    assert!(!display.frames.is_empty());
    assert_eq!(display.frames.last().map(|f| f.mode.text.as_str()), Some(MODE_ALERT));

    assert!(rig.indicator.borrow().is_red());
    assert!(rig.buzzer.borrow().calls.contains(&true));
    assert!(rig
        .matrix
        .borrow()
        .calls
        .iter()
        .any(|c| matches!(c, MatrixCall::Show { .. })));

    let events = rig.log.events();
    for consumer in [ConsumerId::Buzzer, ConsumerId::Matrix] {
        assert!(
            events.contains(&StationEvent::Latched { consumer, sample: ALERT }),
            "{consumer:?} never latched: {events:?}"
        );
    }
}

#[test]
fn normal_source_leaves_actuators_quiet() {
    let rig = run_station(&[NORMAL]);

    let display = rig.display.borrow();
    assert!(!display.frames.is_empty());
    assert!(display.frames.iter().all(|f| f.mode.text.as_str() == MODE_NORMAL));

    let indicator = rig.indicator.borrow();
    assert!(!indicator.calls.is_empty());
    assert!(!indicator.is_red());
    assert!(!rig.buzzer.borrow().calls.contains(&true));
    assert!(!rig
        .matrix
        .borrow()
        .calls
        .iter()
        .any(|c| matches!(c, MatrixCall::Show { .. })));
    assert!(!rig
        .log
        .events()
        .iter()
        .any(|e| matches!(e, StationEvent::Latched { .. })));
}
