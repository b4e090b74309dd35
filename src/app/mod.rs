//! Application core — pure domain logic, zero I/O.
//!
//! Scheduling decisions, sampling orchestration, and the retry policy
//! live here.  All interaction with hardware and the property bus happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals or a broker.

pub mod events;
pub mod ports;
pub mod service;
