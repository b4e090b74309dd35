//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements    | Connects to                     |
//! |--------------|---------------|---------------------------------|
//! | `hardware`   | SensorPort    | ESP32 ADC, GPIO, DHT22          |
//! | `publisher`  | PublisherPort | MQTT broker (Homie topic tree)  |
//! | `time`       | Clock         | ESP32 high-resolution timer     |
//! | `log_sink`   | EventSink     | Serial log output               |
//! | `device_id`  | —             | Factory MAC (device identity)   |

pub mod device_id;
pub mod hardware;
pub mod log_sink;
pub mod publisher;
pub mod time;
