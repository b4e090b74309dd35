//! Outbound application events.
//!
//! The [`SamplerService`](super::service::SamplerService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — log to serial, count in a
//! test recorder, etc.

use crate::error::SensorError;
use crate::scheduler::ChannelId;

/// Structured events emitted by the sampling core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Setup finished: registry advertised and sealed.
    Advertised { nodes: usize },

    /// The sampling loop has entered steady state.
    Started { channels: usize },

    /// A channel completed a full cycle: sampled and all publishes accepted.
    Published { channel: ChannelId },

    /// A sensor read failed; the channel stays due and retries next pass.
    SampleFailed {
        channel: ChannelId,
        error: SensorError,
    },

    /// The transport refused a publish; the channel stays due and retries
    /// next pass.
    PublishFailed {
        channel: ChannelId,
        node: &'static str,
        property: &'static str,
    },
}
