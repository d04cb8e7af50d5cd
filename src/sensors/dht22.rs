//! DHT22 (AM2302) humidity/temperature sensor driver.
//!
//! Single open-drain data line with a pull-up. One transaction:
//!
//! ```text
//! host:   ──┐ ≥1 ms  ┌─ release
//!           └────────┘
//! sensor:              ┐ 80 µs ┌ 80 µs ┐ 40 × (50 µs low + 26/70 µs high)
//!                      └───────┘       └─────────────────────────────────
//! ```
//!
//! A high pulse longer than ~40 µs is a `1`. The frame is humidity (16 bit,
//! ×10), temperature (15 bit magnitude + sign bit, ×10), checksum.
//!
//! The sensor must not be polled more than once every 2 s, so the last
//! transaction is cached and returned for reads inside that window.
//!
//! Generic over `embedded-hal` 1.0 pin and delay traits; on ESP-IDF the
//! pin is a `PinDriver` in input/output open-drain mode and the delay is
//! `Ets`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::SensorError;

/// Minimum interval between bus transactions (ms).
pub const MIN_INTERVAL_MS: u32 = 2000;

const START_LOW_US: u32 = 1100;
const RELEASE_US: u32 = 30;
const HANDSHAKE_TIMEOUT_US: u32 = 100;
const BIT_LOW_TIMEOUT_US: u32 = 70;
const BIT_HIGH_TIMEOUT_US: u32 = 100;
const ONE_THRESHOLD_US: u32 = 40;

/// Relative humidity [%] and temperature [°C].
pub type Climate = (f32, f32);

/// Decode a 5-byte frame, verifying the checksum.
pub fn decode(frame: [u8; 5]) -> Result<Climate, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity = u16::from_be_bytes([frame[0], frame[1]]) as f32 / 10.0;
    let magnitude = u16::from_be_bytes([frame[2] & 0x7F, frame[3]]) as f32 / 10.0;
    let temperature = if frame[2] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };
    Ok((humidity, temperature))
}

pub struct Dht22<P, D> {
    pin: P,
    delay: D,
    last: Option<(u32, Result<Climate, SensorError>)>,
}

impl<P, D> Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(mut pin: P, delay: D) -> Self {
        // Idle state is released (pulled high).
        let _ = pin.set_high();
        Self {
            pin,
            delay,
            last: None,
        }
    }

    /// Read humidity and temperature, re-using the previous transaction
    /// if it is younger than [`MIN_INTERVAL_MS`].
    pub fn read(&mut self, now_ms: u32) -> Result<Climate, SensorError> {
        if let Some((at, result)) = self.last {
            if now_ms.wrapping_sub(at) < MIN_INTERVAL_MS {
                return result;
            }
        }
        let result = self.transaction();
        self.last = Some((now_ms, result));
        result
    }

    fn transaction(&mut self) -> Result<Climate, SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(START_LOW_US);
        self.pin.set_high().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(RELEASE_US);

        // Sensor response: pulls low, then high, then low for the first bit.
        self.wait_while(true, HANDSHAKE_TIMEOUT_US)?;
        self.wait_while(false, HANDSHAKE_TIMEOUT_US)?;
        self.wait_while(true, HANDSHAKE_TIMEOUT_US)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            self.wait_while(false, BIT_LOW_TIMEOUT_US)?;
            let high_us = self.wait_while(true, BIT_HIGH_TIMEOUT_US)?;
            if high_us > ONE_THRESHOLD_US {
                frame[bit / 8] |= 0x80 >> (bit % 8);
            }
        }

        decode(frame)
    }

    /// Spin while the line is at `level`; return how long that took (µs).
    fn wait_while(&mut self, level: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let mut elapsed = 0;
        while self.pin.is_high().map_err(|_| SensorError::Pin)? == level {
            if elapsed >= timeout_us {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed += 1;
        }
        Ok(elapsed)
    }
}
