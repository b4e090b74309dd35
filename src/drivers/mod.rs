//! Hardware initialisation and low-level peripheral protocol helpers.

#[cfg(target_os = "espidf")]
pub mod dht22;
pub mod hw_init;
