//! Polled command responder.
//!
//! Idle → Parsing → Dispatch → Idle. Each poll drains what the serial
//! port already holds (one buffer's worth), feeds the line decoder, and
//! answers every complete command in arrival order. It never waits for
//! input.

use log::{debug, warn};

use super::codec::LineDecoder;
use super::protocol::{Command, Measurement};
use crate::app::ports::SerialPort;
use crate::config::IDENTIFICATION;
use crate::error::CommsError;

/// Bytes pulled from the serial port per poll.
const READ_CHUNK: usize = 64;

pub struct CommandResponder {
    decoder: LineDecoder,
    identification: &'static str,
}

impl Default for CommandResponder {
    fn default() -> Self {
        Self::new(IDENTIFICATION)
    }
}

impl CommandResponder {
    pub fn new(identification: &'static str) -> Self {
        Self {
            decoder: LineDecoder::new(),
            identification,
        }
    }

    /// Read available input and answer any complete commands.
    /// Returns the number of commands answered.
    pub fn poll(&mut self, serial: &mut impl SerialPort, measurement: &Measurement) -> usize {
        let mut buf = [0u8; READ_CHUNK];
        let n = serial.read_available(&mut buf);
        let mut answered = 0;

        for &byte in &buf[..n] {
            let Some(token) = self.decoder.push(byte) else {
                continue;
            };
            let Some(cmd) = Command::parse(&token) else {
                continue;
            };
            debug!("Command '{}' -> {:?}", token, cmd);
            match self.dispatch(cmd, serial, measurement) {
                Ok(()) => answered += 1,
                Err(e) => warn!("Reply to '{}' failed: {}", token, e),
            }
        }
        answered
    }

    fn dispatch(
        &self,
        cmd: Command,
        serial: &mut impl SerialPort,
        measurement: &Measurement,
    ) -> Result<(), CommsError> {
        match cmd {
            Command::Identify => serial.write_line(self.identification),
            Command::Report => serial.write_line(&measurement.format_report()?),
        }
    }
}
