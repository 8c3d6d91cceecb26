//! Fuzz target: `DisplayFrame::render`
//!
//! Any pair of raw readings must render without panicking, every line
//! must fit its fixed-capacity buffer untruncated, and the mode line must
//! agree with the alert predicate.
//!
//! cargo fuzz run fuzz_display_frame

#![no_main]

use floodwatch::alert::is_alert;
use floodwatch::sample::Sample;
use floodwatch::tasks::display::{DisplayFrame, MODE_ALERT, MODE_NORMAL};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 4]| {
    let s = Sample::new(
        u16::from_le_bytes([data[0], data[1]]),
        u16::from_le_bytes([data[2], data[3]]),
    );
    let frame = DisplayFrame::render(&s);

    assert!(frame.water.text.ends_with('%'));
    assert!(frame.rain.text.ends_with('%'));
    let expected = if is_alert(&s) { MODE_ALERT } else { MODE_NORMAL };
    assert_eq!(frame.mode.text.as_str(), expected);
    assert_eq!(frame.alert, is_alert(&s));
});
