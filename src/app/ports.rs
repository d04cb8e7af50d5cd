//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensors, indicator, serial link, event sinks)
//! implement these traits. The [`MonitorService`](super::service::MonitorService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Sensor ports never return errors: a failed read is an undefined value
//! (`None`, or the probe's own sentinel), which is an expected outcome the
//! loop reports rather than a fault it handles.

use super::indicator::Rgb;
use crate::error::CommsError;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One humidity/temperature transaction with the primary sensor.
/// Each field is `None` when that half of the read failed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimateSample {
    /// Relative humidity [%]
    pub humidity: Option<f32>,
    /// Temperature [°C]
    pub temperature: Option<f32>,
}

/// The primary humidity/temperature sensor.
pub trait ClimatePort {
    /// Read humidity and temperature. `now_ms` lets slow sensors return a
    /// cached transaction instead of re-polling the bus.
    fn read_climate(&mut self, now_ms: u32) -> ClimateSample;
}

/// The secondary single-wire temperature probe.
pub trait ProbePort {
    /// Start a temperature conversion.
    fn request_conversion(&mut self);

    /// Result of the last conversion in °C. Returns the probe library's
    /// disconnected sentinel (-127.0) when the probe did not answer.
    fn read_celsius(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → light)
// ───────────────────────────────────────────────────────────────

/// Single-pixel RGB status light.
pub trait IndicatorPort {
    fn show(&mut self, colour: Rgb, brightness: u8);
}

// ───────────────────────────────────────────────────────────────
// Serial port (driven adapter: domain ↔ host link)
// ───────────────────────────────────────────────────────────────

/// Byte-stream link to the host.
pub trait SerialPort {
    /// Copy whatever bytes are already buffered into `buf` without
    /// waiting. Returns the number of bytes copied (0 when idle).
    fn read_available(&mut self, buf: &mut [u8]) -> usize;

    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), CommsError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock. Wraps at `u32::MAX`.
pub trait ClockPort {
    fn millis(&self) -> u32;
}
