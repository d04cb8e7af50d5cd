//! Error types for the monitor firmware.
//!
//! All variants are `Copy` so drivers can hand them back without
//! allocation. None of these are fatal: adapters turn sensor errors into
//! undefined readings, and the responder logs comms errors.

use core::fmt;

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor did not drive the expected edge in time.
    Timeout,
    /// DHT22 frame checksum mismatch.
    Checksum,
    /// No device answered the single-wire reset pulse.
    NoPresence,
    /// Single-wire scratchpad CRC mismatch.
    Crc,
    /// The GPIO itself reported an error.
    Pin,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timed out waiting for sensor"),
            Self::Checksum => write!(f, "checksum mismatch"),
            Self::NoPresence => write!(f, "no presence pulse"),
            Self::Crc => write!(f, "scratchpad CRC mismatch"),
            Self::Pin => write!(f, "GPIO error"),
        }
    }
}

// ---------------------------------------------------------------------------
// Communications errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommsError {
    /// Bytes could not be queued on the command UART.
    UartWrite,
    /// A response did not fit the fixed line buffer.
    LineOverflow,
}

impl fmt::Display for CommsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UartWrite => write!(f, "UART write failed"),
            Self::LineOverflow => write!(f, "response exceeds line buffer"),
        }
    }
}

impl core::error::Error for SensorError {}
impl core::error::Error for CommsError {}
