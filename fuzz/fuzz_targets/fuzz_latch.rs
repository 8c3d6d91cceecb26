//! Fuzz target: `AlertLatch` wake sequences
//!
//! Decodes the input into an arbitrary pulse pattern and an arbitrary
//! sequence of wakes, then verifies:
//! - No panics under any wake order
//! - Once engaged, the latch only releases on a `Probed(Some(_))` wake
//!   carrying a non-alert sample
//! - `stale_probes` resets whenever a sample is delivered
//!
//! cargo fuzz run fuzz_latch

#![no_main]

use floodwatch::alert::is_alert;
use floodwatch::fsm::pulse::PulsePattern;
use floodwatch::fsm::{AlertLatch, Transition, Wake};
use floodwatch::sample::Sample;
use libfuzzer_sys::fuzz_target;

fn sample(bytes: &[u8]) -> Sample {
    let w = u16::from_le_bytes([bytes[0], bytes[1]]);
    let r = u16::from_le_bytes([bytes[2], bytes[3]]);
    Sample::new(w, r)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let pattern = PulsePattern {
        on_ms: u32::from(data[0]),
        off_ms: u32::from(data[1]),
        beats: data[2],
        idle_settle_ms: u32::from(data[3]),
    };
    let mut latch = AlertLatch::new(pattern);

    // Each wake is one tag byte plus four sample bytes.
    for chunk in data[4..].chunks_exact(5) {
        let s = sample(&chunk[1..]);
        let wake = match chunk[0] % 4 {
            0 => Wake::Received(s),
            1 => Wake::Elapsed,
            2 => Wake::Probed(None),
            _ => Wake::Probed(Some(s)),
        };

        let was_alerting = latch.is_alerting();
        let step = latch.tick(wake);

        if was_alerting && !latch.is_alerting() {
            assert!(
                matches!(wake, Wake::Probed(Some(p)) if !is_alert(&p)),
                "latch cleared by {:?}",
                wake
            );
            assert_eq!(step.transition, Some(Transition::Released(s)));
        }
        if let Some(Transition::Latched(t)) = step.transition {
            assert!(is_alert(&t));
        }
        if matches!(wake, Wake::Probed(Some(_))) && step.drive.is_some() {
            assert_eq!(latch.stale_probes(), 0);
        }
    }
});
