//! LDR (photoresistor) luminosity sensor.
//!
//! Wired in a voltage divider read via ADC1.  The raw sample is linearly
//! rescaled to a 0–100 integer percentage with floor division —
//! `raw * 100 / max_raw` — so full scale maps exactly to 100 and zero to 0.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

#[cfg(not(target_os = "espidf"))]
static SIM_LDR_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_ldr_adc(raw: u16) {
    SIM_LDR_ADC.store(raw, Ordering::Relaxed);
}

pub struct LuminositySensor {
    max_raw: u16,
    _adc_gpio: i32,
}

impl LuminositySensor {
    pub fn new(adc_gpio: i32, resolution_bits: u8) -> Self {
        Self {
            max_raw: ((1u32 << resolution_bits) - 1) as u16,
            _adc_gpio: adc_gpio,
        }
    }

    /// Sample the ADC and return luminosity as an integer percentage.
    pub fn read(&self) -> Result<u8, SensorError> {
        let raw = self.read_adc()?;
        Ok(self.scale_percent(raw))
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, SensorError> {
        hw_init::adc1_read(crate::pins::LDR_ADC_CHANNEL)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> Result<u16, SensorError> {
        Ok(SIM_LDR_ADC.load(Ordering::Relaxed))
    }

    /// Floor-division rescale to 0–100.  Raw values above full scale are
    /// clamped rather than overflowing past 100.
    fn scale_percent(&self, raw: u16) -> u8 {
        let raw = raw.min(self.max_raw);
        (u32::from(raw) * 100 / u32::from(self.max_raw)) as u8
    }
}
