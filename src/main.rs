//! Floodwatch Firmware: Main Entry Point
//!
//! Hexagonal layout: the station tasks see hardware only through port
//! traits; adapters wire real peripherals in here.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SensorHub        OledPanel      StatusLed      BuzzerDriver   │
//! │  (SampleSource)   (TextDisplay)  (Indicator)    (Buzzer)       │
//! │  LedMatrix        LogEventSink   ReactorPause                  │
//! │  (Matrix)         (EventSink)    (Pause)                       │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │  Station tasks (pure logic)                            │    │
//! │  │  Acquisition · Display · Indicator · Buzzer · Matrix   │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Bootsel ISR (outside the station, GPIO falling edge)          │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::rmt::config::TransmitConfig;
use esp_idf_hal::rmt::TxRmtDriver;
use log::info;

use floodwatch::adapters::log_sink::LogEventSink;
use floodwatch::adapters::time::ReactorPause;
use floodwatch::channels::StationQueues;
use floodwatch::config::StationConfig;
use floodwatch::drivers::buzzer::BuzzerDriver;
use floodwatch::drivers::gpio::GpioOut;
use floodwatch::drivers::hw_init;
use floodwatch::drivers::led_matrix::LedMatrix;
use floodwatch::drivers::oled::OledPanel;
use floodwatch::drivers::status_led::StatusLed;
use floodwatch::drivers::task_pin::{spawn_on_core, Core};
use floodwatch::pins;
use floodwatch::sensors::SensorHub;
use floodwatch::station::{self, StationHardware};

/// Station executor thread: priority and stack.
const STATION_PRIORITY: u8 = 5;
const STATION_STACK_KB: usize = 16;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Floodwatch v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::bring_up() {
        // Peripheral init failure is critical: log and halt.
        log::error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Build drivers ──────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let rmt = TxRmtDriver::new(
        peripherals.rmt.channel0,
        peripherals.pins.gpio7,
        &TransmitConfig::new().clock_divider(1),
    )?;
    info!("LED matrix on GPIO {} (RMT ch0)", pins::LED_MATRIX_DATA_GPIO);

    let hardware = StationHardware {
        source: SensorHub::new(),
        display: OledPanel::new(),
        indicator: StatusLed::new(
            GpioOut::new(pins::LED_R_GPIO),
            GpioOut::new(pins::LED_G_GPIO),
            GpioOut::new(pins::LED_B_GPIO),
        )?,
        buzzer: BuzzerDriver::new(GpioOut::new(pins::BUZZER_GPIO))?,
        matrix: LedMatrix::new(rmt),
    };
    let config = StationConfig::default();

    // ── 4. Station thread ─────────────────────────────────────
    let handle = spawn_on_core(Core::App, STATION_PRIORITY, STATION_STACK_KB, "station\0", move || {
        let queues = StationQueues::new();
        station::run(&queues, hardware, &config, ReactorPause::new(), LogEventSink::new());
    })?;

    info!("System ready.");
    if handle.join().is_err() {
        log::error!("station thread panicked");
    }
    Ok(())
}
