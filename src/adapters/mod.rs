//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                     | Connects to              |
//! |-------------|--------------------------------|--------------------------|
//! | `hardware`  | ClimatePort, ProbePort,        | DHT22, DS18B20, DotStar  |
//! |             | IndicatorPort                  |                          |
//! | `log_sink`  | EventSink                      | Console log output       |
//! | `time`      | ClockPort                      | ESP32 system timer       |
//! | `uart`      | SerialPort                     | ESP-IDF UART driver      |

pub mod hardware;
pub mod log_sink;
pub mod time;
#[cfg(target_os = "espidf")]
pub mod uart;
