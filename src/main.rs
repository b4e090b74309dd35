//! Multisensor node firmware — main entry point.
//!
//! Hexagonal architecture with a single-threaded sampling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter    MqttPublisher    MonotonicClock          │
//! │  (SensorPort)       (PublisherPort)  (Clock)                 │
//! │  LogEventSink                                                │
//! │  (EventSink)                                                 │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ────────────────────   │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │           SamplerService (pure logic)                  │  │
//! │  │  schedule · registry · retry policy                    │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Setup order matters: peripherals → transport → advertisement (retained
//! `unit` metadata) → steady-state loop.  The loop never exits; sensor and
//! publish failures are channel-local and only delay that channel's next
//! successful cycle.
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use multisensor::adapters::device_id;
use multisensor::adapters::hardware::HardwareAdapter;
use multisensor::adapters::log_sink::LogEventSink;
use multisensor::adapters::publisher::MqttPublisher;
use multisensor::adapters::time::MonotonicClock;
use multisensor::app::ports::{Clock, PublisherPort};
use multisensor::app::service::SamplerService;
use multisensor::config::SystemConfig;
use multisensor::drivers::hw_init;
use multisensor::pins;
use multisensor::sensors::dht22::Dht22Sensor;
use multisensor::sensors::luminosity::LuminositySensor;
use multisensor::sensors::motion::MotionSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!(
        "{} v{} booting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.  In
        // production the watchdog resets the board after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Configuration and identity ─────────────────────────
    let config = SystemConfig::default();
    let mac = device_id::read_mac();
    let dev_id = device_id::device_id(&mac);
    let topic_id = device_id::topic_id(&mac);
    info!("Device ID: {} (topic: {})", dev_id, topic_id);

    // ── 4. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new(
        LuminositySensor::new(pins::LDR_ADC_GPIO, config.adc_resolution_bits),
        MotionSensor::new(pins::PIR_GPIO),
        Dht22Sensor::new(pins::DHT22_GPIO),
    );
    let clock = MonotonicClock::new();
    let mut sink = LogEventSink::new();
    let mut publisher = MqttPublisher::new(config.mqtt_broker_url.as_str(), topic_id.as_str())?;

    // ── 5. Sampler service ────────────────────────────────────
    let mut service = SamplerService::new(&config)?;

    // ── 6. Setup phase ────────────────────────────────────────
    // Wait for the transport's ready signal, then advertise.  The
    // advertisement publishes retained unit metadata exactly once; if the
    // transport drops mid-advertisement, retry the whole phase.
    while !publisher.is_ready() {
        std::thread::sleep(Duration::from_millis(100));
    }
    while let Err(e) = service.setup(&mut publisher, &mut sink) {
        warn!("setup failed ({}), retrying", e);
        std::thread::sleep(Duration::from_millis(500));
    }

    info!("System ready. Entering sampling loop.");

    // ── 7. Sampling loop ──────────────────────────────────────
    loop {
        let now = clock.now_ms();
        service.tick(now, &mut hw, &mut publisher, &mut sink);
        std::thread::sleep(Duration::from_millis(u64::from(config.loop_interval_ms)));
    }
}
