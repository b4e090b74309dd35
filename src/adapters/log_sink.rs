//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).  A telemetry or RPC adapter
//! would implement the same trait.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Advertised { nodes } => {
                info!("SETUP | advertised {} nodes", nodes);
            }
            AppEvent::Started { channels } => {
                info!("START | sampling loop up, {} channels", channels);
            }
            AppEvent::Published { channel } => {
                // One line per successful cycle is too chatty for info at
                // 1 s intervals; keep it on debug.
                debug!("PUB   | {} cycle complete", channel);
            }
            AppEvent::SampleFailed { channel, error } => {
                warn!("FAIL  | {} read failed: {}", channel, error);
            }
            AppEvent::PublishFailed {
                channel,
                node,
                property,
            } => {
                warn!("FAIL  | {} publish refused on {}/{}", channel, node, property);
            }
        }
    }
}
