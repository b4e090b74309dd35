//! MQTT property publisher — the transport side of [`PublisherPort`].
//!
//! Topics follow the Homie layout `homie/<device-id>/<node>/<property>`.
//! Connection, reconnection, and session management belong to the MQTT
//! client underneath; this adapter only formats topics and reports whether
//! a message was **accepted into the client's outbound queue**.  That is
//! the "success" the domain's retry policy keys off — not end-to-end
//! delivery.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: wraps `EspMqttClient`; `is_ready` tracks the broker
//! connection via the client's event callback.
//! On host/test: always ready, logs every publish and accepts it (the
//! integration tests use a recording mock instead).

use core::fmt::Write;

use log::info;

use crate::app::ports::PublisherPort;

#[cfg(target_os = "espidf")]
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

#[cfg(target_os = "espidf")]
use esp_idf_svc::mqtt::client::{EspMqttClient, EventPayload, MqttClientConfiguration, QoS};

/// Full topic: "homie/" + device id + node + property + slashes.
type Topic = heapless::String<96>;

fn topic(device_id: &str, node: &str, property: &str) -> Topic {
    let mut t = Topic::new();
    let _ = write!(t, "homie/{device_id}/{node}/{property}");
    t
}

#[cfg(target_os = "espidf")]
pub struct MqttPublisher {
    client: EspMqttClient<'static>,
    connected: Arc<AtomicBool>,
    device_id: heapless::String<32>,
}

#[cfg(target_os = "espidf")]
impl MqttPublisher {
    /// Connect to `broker_url` with `device_id` as the MQTT client id.
    /// Readiness arrives asynchronously via the connection callback.
    pub fn new(broker_url: &str, device_id: &str) -> anyhow::Result<Self> {
        let connected = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&connected);

        let conf = MqttClientConfiguration {
            client_id: Some(device_id),
            ..Default::default()
        };
        let client = EspMqttClient::new_cb(broker_url, &conf, move |event| {
            match event.payload() {
                EventPayload::Connected(_) => {
                    info!("mqtt: connected");
                    flag.store(true, Ordering::Release);
                }
                EventPayload::Disconnected => {
                    info!("mqtt: disconnected");
                    flag.store(false, Ordering::Release);
                }
                _ => {}
            }
        })?;

        let mut id = heapless::String::new();
        let _ = id.push_str(device_id);
        Ok(Self {
            client,
            connected,
            device_id: id,
        })
    }
}

#[cfg(target_os = "espidf")]
impl PublisherPort for MqttPublisher {
    fn is_ready(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    fn publish(&mut self, node: &str, property: &str, value: &str, retained: bool) -> bool {
        if !self.is_ready() {
            return false;
        }
        let t = topic(&self.device_id, node, property);
        self.client
            .enqueue(&t, QoS::AtLeastOnce, retained, value.as_bytes())
            .is_ok()
    }
}

/// Host-side stand-in: logs publishes and accepts them all.
#[cfg(not(target_os = "espidf"))]
pub struct MqttPublisher {
    device_id: heapless::String<32>,
}

#[cfg(not(target_os = "espidf"))]
impl MqttPublisher {
    pub fn new(_broker_url: &str, device_id: &str) -> anyhow::Result<Self> {
        let mut id = heapless::String::new();
        let _ = id.push_str(device_id);
        Ok(Self { device_id: id })
    }
}

#[cfg(not(target_os = "espidf"))]
impl PublisherPort for MqttPublisher {
    fn is_ready(&self) -> bool {
        true
    }

    fn publish(&mut self, node: &str, property: &str, value: &str, retained: bool) -> bool {
        let t = topic(&self.device_id, node, property);
        info!("mqtt(sim): {} <- '{}' (retained={})", t, value, retained);
        true
    }
}
