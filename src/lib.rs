//! Floodwatch station firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod alert;
pub mod app;
pub mod channels;
pub mod config;
pub mod error;
pub mod fsm;
pub mod pins;
pub mod sample;
pub mod station;
pub mod tasks;

// Hardware-facing modules. Each driver carries its own host simulation.
pub mod adapters;
pub mod drivers;
pub mod sensors;
