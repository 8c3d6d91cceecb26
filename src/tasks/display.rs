//! Display consumer: memoryless text rendering.
//!
//! Each received sample is rendered into a fresh four-line
//! [`DisplayFrame`]; nothing carries over between samples.
//!
//! ```text
//!  ┌────────────────────────┐
//!  │ EST. DE ALERTA         │  y=0
//!  │ N.Agua:  73%           │  y=16
//!  │ V.Chuva:  24%          │  y=28
//!  │ MODO ALERTA!!!         │  y=45
//!  └────────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;
use log::info;

use crate::alert::is_alert;
use crate::app::events::StationEvent;
use crate::app::ports::{EventSink, Pause, TextDisplay};
use crate::channels::{ConsumerId, SampleReceiver};
use crate::sample::Sample;

/// Capacity of one rendered line.
pub const LINE_CAP: usize = 20;

pub const TITLE: &str = "EST. DE ALERTA";
pub const MODE_ALERT: &str = "MODO ALERTA!!!";
pub const MODE_NORMAL: &str = "Modo: Normal";

/// One positioned text line (pixel coordinates of the top-left glyph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String<LINE_CAP>,
    pub x: u8,
    pub y: u8,
}

impl DisplayLine {
    fn new(x: u8, y: u8, args: core::fmt::Arguments<'_>) -> Self {
        let mut text = String::new();
        let written = text.write_fmt(args);
        debug_assert!(written.is_ok(), "display line exceeds {LINE_CAP} bytes");
        Self { text, x, y }
    }
}

/// The complete contents of the panel for one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    pub title: DisplayLine,
    pub water: DisplayLine,
    pub rain: DisplayLine,
    pub mode: DisplayLine,
    pub alert: bool,
}

impl DisplayFrame {
    pub fn render(sample: &Sample) -> Self {
        let alert = is_alert(sample);
        let mode = if alert {
            DisplayLine::new(10, 45, format_args!("{}", MODE_ALERT))
        } else {
            DisplayLine::new(20, 45, format_args!("{}", MODE_NORMAL))
        };
        Self {
            title: DisplayLine::new(5, 0, format_args!("{}", TITLE)),
            water: DisplayLine::new(0, 16, format_args!("N.Agua: {:3}%", sample.water_percent())),
            rain: DisplayLine::new(0, 28, format_args!("V.Chuva: {:3}%", sample.rain_percent())),
            mode,
            alert,
        }
    }

    /// Lines in top-to-bottom order.
    pub fn lines(&self) -> [&DisplayLine; 4] {
        [&self.title, &self.water, &self.rain, &self.mode]
    }
}

pub struct DisplayTask<'a, D, P, E> {
    rx: SampleReceiver<'a>,
    display: D,
    pause: P,
    sink: E,
    settle_ms: u32,
}

impl<'a, D: TextDisplay, P: Pause, E: EventSink> DisplayTask<'a, D, P, E> {
    pub fn new(rx: SampleReceiver<'a>, display: D, pause: P, sink: E, settle_ms: u32) -> Self {
        Self {
            rx,
            display,
            pause,
            sink,
            settle_ms,
        }
    }

    /// Wait for a sample, render it, then settle.
    pub async fn cycle(&mut self) -> Sample {
        let sample = self.rx.receive().await;
        let frame = DisplayFrame::render(&sample);
        self.display.show(&frame);
        self.pause.pause(self.settle_ms).await;
        sample
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub async fn run(mut self) {
        info!("Display task started");
        self.sink.emit(&StationEvent::Started(ConsumerId::Display));
        loop {
            self.cycle().await;
        }
    }
}
