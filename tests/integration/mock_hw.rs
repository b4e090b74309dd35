//! Mock adapters for integration tests.
//!
//! Record every sample and publish call so tests can assert on the full
//! history without touching GPIO registers or a broker.

use multisensor::app::events::AppEvent;
use multisensor::app::ports::{EventSink, PublisherPort, Reading, Readings, SensorPort};
use multisensor::error::SensorError;
use multisensor::scheduler::ChannelId;
use multisensor::value::Value;

// ── MockSensors ───────────────────────────────────────────────

/// Scriptable sensor suite: fixed values per channel plus per-channel
/// failure injection.  Records the order channels were sampled in.
pub struct MockSensors {
    pub luminosity_percent: i32,
    pub motion: bool,
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub fail_luminosity: bool,
    pub fail_motion: bool,
    pub fail_climate: bool,
    pub sampled: Vec<ChannelId>,
}

impl MockSensors {
    pub fn new() -> Self {
        Self {
            luminosity_percent: 50,
            motion: false,
            temperature_c: 21.5,
            humidity_pct: 48.0,
            fail_luminosity: false,
            fail_motion: false,
            fail_climate: false,
            sampled: Vec::new(),
        }
    }
}

impl Default for MockSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockSensors {
    fn sample(&mut self, channel: ChannelId) -> Result<Readings, SensorError> {
        self.sampled.push(channel);
        let mut readings = Readings::new();
        match channel {
            ChannelId::Luminosity => {
                if self.fail_luminosity {
                    return Err(SensorError::AdcReadFailed);
                }
                let _ = readings.push(Reading {
                    node: "luminosity",
                    property: "state",
                    value: Value::Integer(self.luminosity_percent),
                });
            }
            ChannelId::Motion => {
                if self.fail_motion {
                    return Err(SensorError::GpioReadFailed);
                }
                let _ = readings.push(Reading {
                    node: "motion",
                    property: "state",
                    value: Value::Bool(self.motion),
                });
            }
            ChannelId::Climate => {
                if self.fail_climate {
                    return Err(SensorError::ProtocolTimeout);
                }
                let _ = readings.push(Reading {
                    node: "temperature",
                    property: "state",
                    value: Value::Float(self.temperature_c),
                });
                let _ = readings.push(Reading {
                    node: "humidity",
                    property: "state",
                    value: Value::Float(self.humidity_pct),
                });
            }
        }
        Ok(readings)
    }
}

// ── MockPublisher ─────────────────────────────────────────────

/// One recorded publish attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishCall {
    pub node: String,
    pub property: String,
    pub value: String,
    pub retained: bool,
    /// Whether the mock accepted the message.
    pub accepted: bool,
}

/// Recording publisher with scriptable refusal: refuse everything, or
/// refuse specific `(node, property)` pairs.
pub struct MockPublisher {
    pub ready: bool,
    pub fail_all: bool,
    pub fail_properties: Vec<(&'static str, &'static str)>,
    pub calls: Vec<PublishCall>,
}

#[allow(dead_code)]
impl MockPublisher {
    pub fn new() -> Self {
        Self {
            ready: true,
            fail_all: false,
            fail_properties: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Accepted publishes on `(node, property)`, in order.
    pub fn accepted(&self, node: &str, property: &str) -> Vec<&PublishCall> {
        self.calls
            .iter()
            .filter(|c| c.accepted && c.node == node && c.property == property)
            .collect()
    }

    pub fn accepted_count(&self, node: &str, property: &str) -> usize {
        self.accepted(node, property).len()
    }

    pub fn last_accepted_value(&self, node: &str, property: &str) -> Option<String> {
        self.accepted(node, property)
            .last()
            .map(|c| c.value.clone())
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl PublisherPort for MockPublisher {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn publish(&mut self, node: &str, property: &str, value: &str, retained: bool) -> bool {
        let refused = self.fail_all
            || self
                .fail_properties
                .iter()
                .any(|(n, p)| *n == node && *p == property);
        self.calls.push(PublishCall {
            node: node.to_string(),
            property: property.to_string(),
            value: value.to_string(),
            retained,
            accepted: !refused,
        });
        !refused
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// Event sink that keeps every emitted event for assertions.
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
