//! DS18B20 single-wire temperature probe.
//!
//! One probe on a dedicated open-drain line with a 4.7 kΩ pull-up, so
//! every transaction uses Skip ROM. Failures surface as the
//! conventional disconnected value [`DISCONNECTED_C`] rather than an
//! error, which is what the sampler expects from a probe.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use crate::error::SensorError;

/// Reported when the probe does not answer or its data is corrupt.
pub const DISCONNECTED_C: f32 = -127.0;

const CMD_SKIP_ROM: u8 = 0xCC;
const CMD_CONVERT_T: u8 = 0x44;
const CMD_READ_SCRATCHPAD: u8 = 0xBE;

/// Worst-case 12-bit conversion time (ms).
const MAX_CONVERSION_MS: u32 = 750;

/// Dallas/Maxim CRC-8 (polynomial x^8 + x^5 + x^4 + 1, reflected).
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        let mut b = byte;
        for _ in 0..8 {
            let mix = (crc ^ b) & 0x01;
            crc >>= 1;
            if mix != 0 {
                crc ^= 0x8C;
            }
            b >>= 1;
        }
    }
    crc
}

/// Temperature from a 9-byte scratchpad, verifying the CRC.
pub fn decode_scratchpad(scratchpad: &[u8; 9]) -> Result<f32, SensorError> {
    // A floating line reads all ones and fails the CRC. A shorted line
    // reads all zeros, whose CRC is valid.
    if scratchpad.iter().all(|&b| b == 0) {
        return Err(SensorError::NoPresence);
    }
    if crc8(&scratchpad[..8]) != scratchpad[8] {
        return Err(SensorError::Crc);
    }
    let raw = i16::from_le_bytes([scratchpad[0], scratchpad[1]]);
    Ok(f32::from(raw) / 16.0)
}

pub struct Ds18b20<P, D> {
    pin: P,
    delay: D,
    /// The last conversion finished and has not been read yet.
    converted: bool,
}

impl<P, D> Ds18b20<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(mut pin: P, delay: D) -> Self {
        let _ = pin.set_high();
        Self {
            pin,
            delay,
            converted: false,
        }
    }

    /// Start a conversion and wait until the probe reports it finished.
    pub fn request_temperature(&mut self) -> Result<(), SensorError> {
        self.converted = false;
        self.convert()?;
        self.converted = true;
        Ok(())
    }

    fn convert(&mut self) -> Result<(), SensorError> {
        self.reset()?;
        self.write_byte(CMD_SKIP_ROM)?;
        self.write_byte(CMD_CONVERT_T)?;

        // The probe holds read slots at 0 while converting.
        for _ in 0..MAX_CONVERSION_MS {
            if self.read_bit()? {
                return Ok(());
            }
            self.delay.delay_ms(1);
        }
        Err(SensorError::Timeout)
    }

    /// Read back the last conversion.
    pub fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.reset()?;
        self.write_byte(CMD_SKIP_ROM)?;
        self.write_byte(CMD_READ_SCRATCHPAD)?;
        let mut scratchpad = [0u8; 9];
        for byte in &mut scratchpad {
            *byte = self.read_byte()?;
        }
        decode_scratchpad(&scratchpad)
    }

    /// Read the last conversion, mapping any failure to [`DISCONNECTED_C`].
    ///
    /// Without a successful [`request_temperature`](Self::request_temperature)
    /// since the previous read the scratchpad is stale, so the bus is not
    /// touched.
    pub fn read_celsius(&mut self) -> f32 {
        if !core::mem::take(&mut self.converted) {
            debug!("DS18B20 has no fresh conversion");
            return DISCONNECTED_C;
        }
        match self.read_temperature() {
            Ok(c) => c,
            Err(e) => {
                debug!("DS18B20 read failed: {}", e);
                DISCONNECTED_C
            }
        }
    }

    // ── Bus primitives ────────────────────────────────────────

    /// Reset pulse; `Err(NoPresence)` when nothing answers.
    fn reset(&mut self) -> Result<(), SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(480);
        self.pin.set_high().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(70);
        let present = self.pin.is_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(410);
        if present {
            Ok(())
        } else {
            Err(SensorError::NoPresence)
        }
    }

    fn write_bit(&mut self, bit: bool) -> Result<(), SensorError> {
        let (low_us, high_us) = if bit { (6, 64) } else { (60, 10) };
        self.pin.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(low_us);
        self.pin.set_high().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(high_us);
        Ok(())
    }

    fn read_bit(&mut self) -> Result<bool, SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(6);
        self.pin.set_high().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(9);
        let bit = self.pin.is_high().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(55);
        Ok(bit)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), SensorError> {
        for i in 0..8 {
            self.write_bit(byte & (1 << i) != 0)?;
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, SensorError> {
        let mut byte = 0;
        for i in 0..8 {
            if self.read_bit()? {
                byte |= 1 << i;
            }
        }
        Ok(byte)
    }
}
