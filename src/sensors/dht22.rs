//! DHT22 (AM2302) combined temperature/humidity sensor.
//!
//! One physical transaction yields both values, or fails as a unit — a
//! failed read produces zero publishable readings for the cycle, never a
//! lone temperature without its humidity.  The single-wire bit-timing
//! protocol blocks the thread for a few milliseconds; that is the slowest
//! sensor on the board and every configured interval must stay well above
//! it.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: bit-bangs the protocol via `drivers::dht22`.
//! On host/test: reads from static atomics, with a fail-injection flag so
//! tests can exercise the combined-failure path.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::error::SensorError;

/// One successful DHT22 transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_BITS: AtomicU32 = AtomicU32::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_HUMIDITY_BITS: AtomicU32 = AtomicU32::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_DHT_FAIL: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_climate(temperature_c: f32, humidity_pct: f32) {
    SIM_TEMP_BITS.store(temperature_c.to_bits(), Ordering::Relaxed);
    SIM_HUMIDITY_BITS.store(humidity_pct.to_bits(), Ordering::Relaxed);
}

/// Make every subsequent simulated read fail with a protocol timeout.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_dht_fail(fail: bool) {
    SIM_DHT_FAIL.store(fail, Ordering::Relaxed);
}

pub struct Dht22Sensor {
    gpio: i32,
}

impl Dht22Sensor {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// Run one transaction.  Both values come back together or not at all.
    #[cfg(target_os = "espidf")]
    pub fn read(&self) -> Result<ClimateReading, SensorError> {
        let (temperature_c, humidity_pct) = crate::drivers::dht22::read(self.gpio)?;
        Ok(ClimateReading {
            temperature_c,
            humidity_pct,
        })
    }

    /// Run one transaction.  Both values come back together or not at all.
    #[cfg(not(target_os = "espidf"))]
    pub fn read(&self) -> Result<ClimateReading, SensorError> {
        let _ = self.gpio;
        if SIM_DHT_FAIL.load(Ordering::Relaxed) {
            return Err(SensorError::ProtocolTimeout);
        }
        Ok(ClimateReading {
            temperature_c: f32::from_bits(SIM_TEMP_BITS.load(Ordering::Relaxed)),
            humidity_pct: f32::from_bits(SIM_HUMIDITY_BITS.load(Ordering::Relaxed)),
        })
    }
}
