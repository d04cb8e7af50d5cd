//! System configuration parameters
//!
//! All tunable parameters for the monitor. These are compile-time
//! constants: the firmware never loads configuration at runtime, and a
//! retune means a reflash.

use serde::{Deserialize, Serialize};

/// Sampling period of the sensor loop (milliseconds).
pub const SAMPLE_PERIOD_MS: u32 = 1000;

/// Exponential smoothing constant for the primary temperature.
/// At 1 Hz this gives a time constant of ~20 s.
pub const SMOOTHING_ALPHA: f32 = 0.95;

/// Heartbeat brightness levels (0-255).
pub const LED_DIM: u8 = 50;
pub const LED_BRIGHT: u8 = 80;

/// Probe readings at or below this value are the driver's own
/// "disconnected" sentinel (-127 °C) and are reported as undefined.
pub const PROBE_DISCONNECTED_C: f32 = -126.0;

/// Reply to the `id?` query. The host application matches on this.
pub const IDENTIFICATION: &str = "Arduino, E. coli sauna";

/// Longest command token accepted on the serial link (bytes).
pub const MAX_COMMAND_LEN: usize = 64;

/// Command UART baud rate.
pub const SERIAL_BAUD: u32 = 9600;

/// Runtime view of the compile-time configuration, handed to
/// [`MonitorService`](crate::app::service::MonitorService).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Timing ---
    /// Sensor sampling period (milliseconds)
    pub sample_period_ms: u32,

    // --- Filter ---
    /// Weight of the previous smoothed value, in (0, 1)
    pub smoothing_alpha: f32,

    // --- Indicator ---
    /// Heartbeat low brightness
    pub led_dim: u8,
    /// Heartbeat high brightness (also used while booting)
    pub led_bright: u8,

    // --- Probe ---
    /// Readings at or below this are treated as "probe absent"
    pub probe_disconnected_c: f32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: SAMPLE_PERIOD_MS,
            smoothing_alpha: SMOOTHING_ALPHA,
            led_dim: LED_DIM,
            led_bright: LED_BRIGHT,
            probe_disconnected_c: PROBE_DISCONNECTED_C,
        }
    }
}
