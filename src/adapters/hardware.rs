//! Hardware adapter — bridges the sensor drivers to [`SensorPort`].
//!
//! Owns all three sensor drivers and maps their typed readings onto the
//! registry properties each channel publishes.  This is the only module
//! that knows which node/property a sensor's value lands on; the drivers
//! know units, the domain knows schedules, and neither knows topics.

use crate::app::ports::{Reading, Readings, SensorPort};
use crate::error::SensorError;
use crate::scheduler::ChannelId;
use crate::sensors::dht22::Dht22Sensor;
use crate::sensors::luminosity::LuminositySensor;
use crate::sensors::motion::MotionSensor;
use crate::value::Value;

/// Concrete adapter that combines all sensor hardware behind one port.
pub struct HardwareAdapter {
    luminosity: LuminositySensor,
    motion: MotionSensor,
    climate: Dht22Sensor,
}

impl HardwareAdapter {
    pub fn new(luminosity: LuminositySensor, motion: MotionSensor, climate: Dht22Sensor) -> Self {
        Self {
            luminosity,
            motion,
            climate,
        }
    }
}

impl SensorPort for HardwareAdapter {
    fn sample(&mut self, channel: ChannelId) -> Result<Readings, SensorError> {
        let mut readings = Readings::new();
        match channel {
            ChannelId::Luminosity => {
                let percent = self.luminosity.read()?;
                let _ = readings.push(Reading {
                    node: "luminosity",
                    property: "state",
                    value: Value::Integer(i32::from(percent)),
                });
            }
            ChannelId::Motion => {
                let detected = self.motion.read()?;
                let _ = readings.push(Reading {
                    node: "motion",
                    property: "state",
                    value: Value::Bool(detected),
                });
            }
            ChannelId::Climate => {
                // One physical transaction; both readings or neither.
                let r = self.climate.read()?;
                let _ = readings.push(Reading {
                    node: "temperature",
                    property: "state",
                    value: Value::Float(r.temperature_c),
                });
                let _ = readings.push(Reading {
                    node: "humidity",
                    property: "state",
                    value: Value::Float(r.humidity_pct),
                });
            }
        }
        Ok(readings)
    }
}
