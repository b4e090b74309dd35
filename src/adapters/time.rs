//! Monotonic clock adapter.
//!
//! Supplies the millisecond tick the scheduler runs on.  The tick is a
//! u32 and rolls over after ~49.7 days of uptime; the scheduler's wrapping
//! arithmetic handles that, so no rollover compensation happens here.
//!
//! - **`target_os = "espidf"`** — truncates `esp_timer_get_time()` (µs,
//!   monotonic) to milliseconds.
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side simulation.

use crate::app::ports::Clock;
use crate::scheduler::Tick;

/// Clock adapter over the platform's monotonic timer.
pub struct MonotonicClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    #[cfg(target_os = "espidf")]
    fn now_ms(&self) -> Tick {
        // Truncation to u32 is the intended wrap, not a loss.
        ((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1000) as Tick
    }

    #[cfg(not(target_os = "espidf"))]
    fn now_ms(&self) -> Tick {
        self.start.elapsed().as_millis() as Tick
    }
}
