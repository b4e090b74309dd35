//! Device identity derived from the ESP32 factory MAC address.
//!
//! Produces a stable, human-readable device ID in the form `MS-XXYYZZ`
//! (last 3 bytes of the 6-byte MAC in uppercase hex), plus the lowercase
//! `multisensor-xxyyzz` form used as the Homie topic segment and MQTT
//! client id.  Deterministic across reboots (factory-burned eFuse MAC).

/// Fixed-size device ID string: "MS-XXYYZZ".
pub type DeviceIdString = heapless::String<16>;

/// Full 6-byte MAC address.
pub type MacAddress = [u8; 6];

/// Read the factory MAC address from eFuse.
#[cfg(target_os = "espidf")]
pub fn read_mac() -> MacAddress {
    let mut mac: MacAddress = [0u8; 6];
    unsafe {
        esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
    }
    mac
}

/// Simulation: returns a deterministic fake MAC.
#[cfg(not(target_os = "espidf"))]
pub fn read_mac() -> MacAddress {
    [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE]
}

/// Derive the short device ID from the last 3 MAC bytes.
/// Format: `MS-XXYYZZ` (e.g., `MS-EFCAFE`).
pub fn device_id(mac: &MacAddress) -> DeviceIdString {
    let mut id = DeviceIdString::new();
    use core::fmt::Write;
    let _ = write!(id, "MS-{:02X}{:02X}{:02X}", mac[3], mac[4], mac[5]);
    id
}

/// Derive the Homie topic segment / MQTT client id from the last 3 MAC
/// bytes.  Format: `multisensor-xxyyzz` (lowercase).
pub fn topic_id(mac: &MacAddress) -> heapless::String<32> {
    let mut name = heapless::String::<32>::new();
    use core::fmt::Write;
    let _ = write!(name, "multisensor-{:02x}{:02x}{:02x}", mac[3], mac[4], mac[5]);
    name
}
