//! Command UART adapter (ESP-IDF only).
//!
//! Implements [`SerialPort`] over `esp_idf_hal::uart::UartDriver`. Reads
//! use a zero tick timeout so the main loop never blocks on the host;
//! writes block until the bytes are queued in the driver's TX ring.

use esp_idf_hal::delay::{BLOCK, NON_BLOCK};
use esp_idf_hal::uart::UartDriver;

use crate::app::ports::SerialPort;
use crate::error::CommsError;

pub struct UartSerial<'d> {
    uart: UartDriver<'d>,
}

impl<'d> UartSerial<'d> {
    pub fn new(uart: UartDriver<'d>) -> Self {
        Self { uart }
    }

    fn write_all(&mut self, mut bytes: &[u8]) -> Result<(), CommsError> {
        while !bytes.is_empty() {
            let n = self.uart.write(bytes).map_err(|_| CommsError::UartWrite)?;
            bytes = &bytes[n..];
        }
        Ok(())
    }
}

impl SerialPort for UartSerial<'_> {
    fn read_available(&mut self, buf: &mut [u8]) -> usize {
        self.uart.read(buf, NON_BLOCK).unwrap_or(0)
    }

    fn write_line(&mut self, line: &str) -> Result<(), CommsError> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\r\n")?;
        self.uart
            .wait_tx_done(BLOCK)
            .map_err(|_| CommsError::UartWrite)
    }
}
