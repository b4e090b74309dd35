//! System configuration parameters.
//!
//! All tunable parameters for the multisensor node: per-channel sampling
//! intervals, ADC depth, and loop pacing.  These are boot-time constants in
//! the reference deployment; the struct is serde-capable so a provisioning
//! layer can override them later without touching the sampling core.

use serde::{Deserialize, Serialize};

/// Core system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Sampling intervals ---
    /// Luminosity sampling/publish interval (seconds).
    pub luminosity_interval_secs: u32,
    /// Motion sampling/publish interval (seconds).
    pub motion_interval_secs: u32,
    /// Temperature/humidity sampling/publish interval (seconds).
    /// The DHT22 read blocks for a few milliseconds; intervals must stay
    /// comfortably above that blocking time.
    pub climate_interval_secs: u32,

    // --- ADC ---
    /// ADC resolution in bits.  Full scale for luminosity rescaling is
    /// `(1 << bits) - 1`.
    pub adc_resolution_bits: u8,

    // --- Loop pacing ---
    /// Main loop pass interval (milliseconds).  Bounds retry latency after
    /// a failed publish; must be well below the shortest channel interval.
    pub loop_interval_ms: u32,

    // --- Transport ---
    /// MQTT broker URL handed to the publisher adapter.
    pub mqtt_broker_url: heapless::String<64>,
}

impl SystemConfig {
    pub fn luminosity_interval_ms(&self) -> u32 {
        self.luminosity_interval_secs * 1000
    }

    pub fn motion_interval_ms(&self) -> u32 {
        self.motion_interval_secs * 1000
    }

    pub fn climate_interval_ms(&self) -> u32 {
        self.climate_interval_secs * 1000
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            luminosity_interval_secs: 1,
            motion_interval_secs: 1,
            climate_interval_secs: 5,
            adc_resolution_bits: crate::pins::ADC_RESOLUTION_BITS,
            loop_interval_ms: 50,
            mqtt_broker_url: default_broker_url(),
        }
    }
}

fn default_broker_url() -> heapless::String<64> {
    let mut url = heapless::String::new();
    let _ = url.push_str("mqtt://homeserver.local:1883");
    url
}
