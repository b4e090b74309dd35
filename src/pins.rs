//! GPIO / peripheral pin assignments for the multisensor node board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR (photoresistor) in a voltage divider — luminosity measurement.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const LDR_ADC_GPIO: i32 = 5;
/// ADC1 channel number for the LDR input.
pub const LDR_ADC_CHANNEL: u32 = 4;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// HC-SR501 PIR motion sensor — digital output, HIGH while motion detected.
pub const PIR_GPIO: i32 = 6;

/// DHT22 temperature/humidity sensor — single-wire data line.
/// Open-drain with external pull-up; the driver bit-bangs the protocol.
pub const DHT22_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// ADC configuration
// ---------------------------------------------------------------------------

/// ADC resolution configured in hw_init (bits). 12-bit gives 0–4095 raw.
pub const ADC_RESOLUTION_BITS: u8 = 12;
