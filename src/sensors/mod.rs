//! Sensor subsystem — one driver per physical sensor.
//!
//! Each driver normalizes its raw reading (ADC counts, GPIO level, DHT22
//! frame) into domain units.  Mapping readings onto registry properties is
//! the hardware adapter's job, not the drivers'.
//!
//! ## Dual-target design
//!
//! On ESP-IDF the drivers read real peripherals via `hw_init` helpers.
//! On host/test targets they read from static atomics so tests can inject
//! values without hardware.

pub mod dht22;
pub mod luminosity;
pub mod motion;
