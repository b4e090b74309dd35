//! HC-SR501 PIR motion sensor.
//!
//! Digital output, HIGH while motion is detected.  The reading maps
//! straight to a boolean; downstream encoding turns it into the literal
//! strings `"true"` / `"false"`.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init.
//! On host/test: reads from a static `AtomicBool` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

#[cfg(not(target_os = "espidf"))]
static SIM_PIR: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_motion(detected: bool) {
    SIM_PIR.store(detected, Ordering::Relaxed);
}

pub struct MotionSensor {
    _gpio: i32,
}

impl MotionSensor {
    pub fn new(gpio: i32) -> Self {
        Self { _gpio: gpio }
    }

    /// Whether motion is currently detected.
    pub fn read(&self) -> Result<bool, SensorError> {
        Ok(self.read_gpio())
    }

    #[cfg(target_os = "espidf")]
    fn read_gpio(&self) -> bool {
        hw_init::gpio_read(crate::pins::PIR_GPIO)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self) -> bool {
        SIM_PIR.load(Ordering::Relaxed)
    }
}
