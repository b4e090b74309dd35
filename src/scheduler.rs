//! Per-channel interval scheduling.
//!
//! Each sensor channel owns a [`Channel`] record tracking when it last ran.
//! Due-ness is computed from a monotonic millisecond tick counter via
//! **wrapping** u32 subtraction, so the elapsed value stays correct when the
//! counter rolls over (~49.7 days of uptime).
//!
//! `mark_run` is only called after a fully successful publish cycle.  On
//! any failure the timestamp is left untouched, which keeps the channel due
//! and retries it on the very next loop pass — fast retry, never a skipped
//! interval.

use core::fmt;

/// Monotonic millisecond tick, Arduino-`millis()` width.
pub type Tick = u32;

/// Identifies one sampling channel.  Iteration order in the main loop is
/// the declaration order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelId {
    Luminosity,
    Motion,
    /// Combined temperature + humidity (one DHT22 transaction, two readings).
    Climate,
}

impl ChannelId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Luminosity => "luminosity",
            Self::Motion => "motion",
            Self::Climate => "climate",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling state for one sensor channel.
///
/// `interval_ms` is fixed for the channel lifetime.  `None` for `last_run`
/// is the never-run sentinel: it forces an immediate first sample at boot.
#[derive(Debug, Clone, Copy)]
pub struct Channel {
    pub id: ChannelId,
    interval_ms: u32,
    last_run: Option<Tick>,
}

impl Channel {
    /// `interval_ms` must be greater than zero.
    pub fn new(id: ChannelId, interval_ms: u32) -> Self {
        debug_assert!(interval_ms > 0, "channel interval must be positive");
        Self {
            id,
            interval_ms,
            last_run: None,
        }
    }

    /// Whether the channel should sample and publish this pass.
    ///
    /// True when the channel has never run, or when at least `interval_ms`
    /// have elapsed since the last successful run.  Wrapping subtraction
    /// keeps the elapsed value small and positive across counter rollover.
    pub fn is_due(&self, now: Tick) -> bool {
        match self.last_run {
            None => true,
            Some(last) => now.wrapping_sub(last) >= self.interval_ms,
        }
    }

    /// Record a successful run.  Call **only** after every publish in the
    /// channel's cycle succeeded; skipping this on failure is what makes
    /// the fast-retry policy work.
    pub fn mark_run(&mut self, now: Tick) {
        self.last_run = Some(now);
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn last_run(&self) -> Option<Tick> {
        self.last_run
    }
}
