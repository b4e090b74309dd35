//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SamplerService (domain)
//! ```
//!
//! Driven adapters (sensor hardware, MQTT client, system timer, event
//! sinks) implement these traits.  The
//! [`SamplerService`](super::service::SamplerService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::SensorError;
use crate::scheduler::{ChannelId, Tick};
use crate::value::Value;

// ───────────────────────────────────────────────────────────────
// Clock source (driven adapter: system timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond tick source.  The counter wraps at `u32::MAX`;
/// the scheduler's wrapping arithmetic depends on that, so implementations
/// must not saturate or reset mid-run.
pub trait Clock {
    fn now_ms(&self) -> Tick;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One normalized reading, addressed to the property it belongs on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub node: &'static str,
    pub property: &'static str,
    pub value: Value,
}

/// Readings from one channel cycle.  The climate channel yields two
/// (temperature + humidity) from a single physical transaction; the
/// others yield one.
pub type Readings = heapless::Vec<Reading, 2>;

/// Read-side port: the domain asks for a fresh sample of one channel.
///
/// A sample is a synchronous, bounded-latency blocking call.  An `Err`
/// yields zero readings for the cycle — never a partial set.
pub trait SensorPort {
    fn sample(&mut self, channel: ChannelId) -> Result<Readings, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Publisher port (driven adapter: domain → property bus)
// ───────────────────────────────────────────────────────────────

/// Write-side port onto the retained property bus.
///
/// `publish` returning `false` means transient transport failure; the
/// domain does not distinguish subtypes and applies the same fast-retry
/// policy to all of them.  "Success" here means the transport accepted
/// the message into its outbound queue, not end-to-end delivery.
pub trait PublisherPort {
    /// Whether the transport has signalled readiness.  The sampling loop
    /// idles until this is true.
    fn is_ready(&self) -> bool;

    /// Publish `value` on `(node, property)`.  State publishes always set
    /// `retained`, so the bus re-delivers the last value to new
    /// subscribers.
    fn publish(&mut self, node: &str, property: &str, value: &str, retained: bool) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, test
/// recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
