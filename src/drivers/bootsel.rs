//! Bootloader re-entry on the bootsel button.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up. The GPIO ISR registered in
//! `hw_init` calls [`on_falling_edge`] on the first press.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: sets the RTC force-download flag and restarts the chip, so
//! the ROM comes back up in serial download mode. Never returns.
//! On host/test: latches a flag readable through [`reflash_requested`].

use core::sync::atomic::{AtomicBool, Ordering};

static REFLASH_REQUESTED: AtomicBool = AtomicBool::new(false);

/// `RTC_CNTL_OPTION1_REG` on the ESP32-S3.
#[cfg(target_os = "espidf")]
const RTC_CNTL_OPTION1_REG: usize = 0x6000_812C;
#[cfg(target_os = "espidf")]
const RTC_CNTL_FORCE_DOWNLOAD_BOOT: u32 = 1;

/// ISR entry. Lock-free.
#[cfg(target_os = "espidf")]
pub fn on_falling_edge() {
    REFLASH_REQUESTED.store(true, Ordering::Release);
    // SAFETY: single aligned write to an RTC control register; the chip
    // restarts immediately afterwards.
    unsafe {
        core::ptr::write_volatile(RTC_CNTL_OPTION1_REG as *mut u32, RTC_CNTL_FORCE_DOWNLOAD_BOOT);
        esp_idf_svc::sys::esp_restart();
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn on_falling_edge() {
    REFLASH_REQUESTED.store(true, Ordering::Release);
}

pub fn reflash_requested() -> bool {
    REFLASH_REQUESTED.load(Ordering::Acquire)
}
