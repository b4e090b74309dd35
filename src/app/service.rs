//! Sampler service — the hexagonal core.
//!
//! [`SamplerService`] owns the device registry and the per-channel
//! scheduling state.  Each loop pass it walks the channels in a fixed
//! order (luminosity → motion → climate), samples the due ones, and
//! publishes every resulting property retained.  A channel's timestamp
//! advances only when **all** of its publishes were accepted, so any
//! failure leaves it due and it retries on the very next pass.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ PublisherPort
//!                 │     SamplerService      │
//!       Clock ──▶ │  schedule · registry    │ ──▶ EventSink
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::SystemConfig;
use crate::registry::{multisensor_nodes, DeviceRegistry};
use crate::scheduler::{Channel, ChannelId, Tick};

use super::events::AppEvent;
use super::ports::{EventSink, PublisherPort, SensorPort};

/// Number of sampling channels on this board.
const CHANNEL_COUNT: usize = 3;

/// The sampling core.  Owns all scheduler state; sensors, publisher, and
/// event sink are injected per call through port traits.
pub struct SamplerService {
    registry: DeviceRegistry,
    channels: [Channel; CHANNEL_COUNT],
}

impl SamplerService {
    /// Build the service from configuration.  Channel order here is the
    /// iteration order of every loop pass.
    pub fn new(config: &SystemConfig) -> crate::error::Result<Self> {
        Ok(Self {
            registry: multisensor_nodes()?,
            channels: [
                Channel::new(ChannelId::Luminosity, config.luminosity_interval_ms()),
                Channel::new(ChannelId::Motion, config.motion_interval_ms()),
                Channel::new(ChannelId::Climate, config.climate_interval_ms()),
            ],
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// One-time setup: advertise every node/property and publish retained
    /// `unit` metadata, then seal the registry.  Call after the transport
    /// signals ready and before the first [`tick`](Self::tick).
    pub fn setup(
        &mut self,
        publisher: &mut impl PublisherPort,
        sink: &mut impl EventSink,
    ) -> crate::error::Result<()> {
        self.registry.advertise(publisher)?;
        sink.emit(&AppEvent::Advertised {
            nodes: self.registry.nodes().len(),
        });
        sink.emit(&AppEvent::Started {
            channels: self.channels.len(),
        });
        info!("sampler: setup complete, {} channels", self.channels.len());
        Ok(())
    }

    // ── Per-pass orchestration ────────────────────────────────

    /// Run one loop pass at tick `now`.
    ///
    /// For each due channel: sample, encode, publish retained.  The climate
    /// channel's two readings share one cycle — if either publish is
    /// refused the timestamp is not advanced and both values are re-sampled
    /// and re-published on the next pass, never a partial pair.
    pub fn tick(
        &mut self,
        now: Tick,
        sensors: &mut impl SensorPort,
        publisher: &mut impl PublisherPort,
        sink: &mut impl EventSink,
    ) {
        if !publisher.is_ready() {
            // Transport dropped out; channels accumulate due-ness and
            // publish their current state as soon as it returns.
            return;
        }

        for i in 0..self.channels.len() {
            let channel = self.channels[i];
            if !channel.is_due(now) {
                continue;
            }

            let readings = match sensors.sample(channel.id) {
                Ok(r) => r,
                Err(e) => {
                    warn!("{} read failed: {}", channel.id, e);
                    sink.emit(&AppEvent::SampleFailed {
                        channel: channel.id,
                        error: e,
                    });
                    continue;
                }
            };

            let mut all_published = true;
            for reading in &readings {
                debug_assert!(
                    self.registry.has_property(reading.node, reading.property),
                    "publish to unadvertised property {}/{}",
                    reading.node,
                    reading.property,
                );
                let payload = reading.value.encode();
                if !publisher.publish(reading.node, reading.property, &payload, true) {
                    warn!("{} sending failed ({}/{})", channel.id, reading.node, reading.property);
                    sink.emit(&AppEvent::PublishFailed {
                        channel: channel.id,
                        node: reading.node,
                        property: reading.property,
                    });
                    all_published = false;
                    break;
                }
            }

            if all_published {
                self.channels[i].mark_run(now);
                sink.emit(&AppEvent::Published {
                    channel: channel.id,
                });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Scheduling state, in loop iteration order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }
}
