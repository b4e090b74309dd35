//! Multisensor node firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod registry;
pub mod scheduler;
pub mod value;

pub mod error;
pub mod pins;

// Hardware-facing modules; ESP-IDF paths are cfg-guarded inside, host
// builds get the simulation halves.
pub mod adapters;
pub mod drivers;
pub mod sensors;
