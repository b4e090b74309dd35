//! DHT22 single-wire bit-timing protocol (ESP-IDF only).
//!
//! The host MCU pulls the data line low for >1 ms to request a frame, then
//! the sensor answers with an 80 µs low / 80 µs high preamble followed by
//! 40 data bits.  Each bit starts with a ~50 µs low; the length of the
//! following high pulse distinguishes 0 (~26 µs) from 1 (~70 µs).  The
//! whole transaction blocks for under 6 ms.
//!
//! Frame layout: humidity hi/lo, temperature hi/lo, checksum (sum of the
//! first four bytes, truncated to 8 bits).  Temperature uses a sign bit in
//! 0x8000, both values are tenths.

use esp_idf_svc::sys::{
    esp_rom_delay_us, esp_timer_get_time, gpio_get_level, gpio_set_level,
};

use crate::error::SensorError;

/// Longest level phase the protocol allows before we declare a timeout.
const PHASE_TIMEOUT_US: i64 = 120;

/// High pulses longer than this are a 1-bit.
const ONE_BIT_THRESHOLD_US: i64 = 50;

/// Run one full transaction on `gpio`.  Returns `(temperature_c,
/// humidity_pct)`.
pub fn read(gpio: i32) -> Result<(f32, f32), SensorError> {
    // Start signal: hold the line low >1 ms, then release and let the
    // pull-up restore it.
    unsafe {
        gpio_set_level(gpio, 0);
        esp_rom_delay_us(1100);
        gpio_set_level(gpio, 1);
        esp_rom_delay_us(30);
    }

    // Sensor preamble: 80 µs low, 80 µs high.
    wait_level(gpio, 0, PHASE_TIMEOUT_US)?;
    wait_level(gpio, 1, PHASE_TIMEOUT_US)?;
    wait_level(gpio, 0, PHASE_TIMEOUT_US)?;

    // 40 data bits.
    let mut frame = [0u8; 5];
    for i in 0..40 {
        wait_level(gpio, 1, PHASE_TIMEOUT_US)?;
        let high_us = wait_level(gpio, 0, PHASE_TIMEOUT_US)?;
        if high_us > ONE_BIT_THRESHOLD_US {
            frame[i / 8] |= 1 << (7 - (i % 8));
        }
    }

    let sum = frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3]);
    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity_raw = u16::from_be_bytes([frame[0], frame[1]]);
    let temp_raw = u16::from_be_bytes([frame[2], frame[3]]);

    let humidity_pct = f32::from(humidity_raw) / 10.0;
    let magnitude = f32::from(temp_raw & 0x7FFF) / 10.0;
    let temperature_c = if temp_raw & 0x8000 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok((temperature_c, humidity_pct))
}

/// Busy-wait until the line reads `level`, returning the time spent
/// waiting in microseconds.  Errs if the phase exceeds `timeout_us`.
fn wait_level(gpio: i32, level: i32, timeout_us: i64) -> Result<i64, SensorError> {
    // SAFETY: plain register reads/timer queries on a configured pin.
    let start = unsafe { esp_timer_get_time() };
    loop {
        if unsafe { gpio_get_level(gpio) } == level as u32 {
            return Ok(unsafe { esp_timer_get_time() } - start);
        }
        if unsafe { esp_timer_get_time() } - start > timeout_us {
            return Err(SensorError::ProtocolTimeout);
        }
    }
}
