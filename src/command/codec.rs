//! Newline-terminated token decoder.
//!
//! Wire format:
//! ```text
//! ┌──────────────────────────┬────┐
//! │ ASCII token (≤ 64 B)     │ LF │     CR anywhere is ignored
//! └──────────────────────────┴────┘
//! ```
//!
//! The decoder accumulates incoming bytes and yields complete tokens. A
//! single read may return part of a line or several lines, so bytes are
//! fed one at a time. Lines that overflow the buffer are discarded up to
//! the next terminator; empty and non-ASCII tokens are dropped.

use heapless::{String, Vec};

use crate::config::MAX_COMMAND_LEN;

/// A complete, trimmed command token.
pub type Token = String<MAX_COMMAND_LEN>;

const TERMINATOR: u8 = b'\n';
const CARRIAGE_RETURN: u8 = b'\r';

/// Decoder state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    /// Collecting bytes of the current line.
    Collecting,
    /// Current line overflowed; skip until the terminator.
    Discarding,
}

/// Streaming line decoder.
pub struct LineDecoder {
    state: DecoderState,
    buf: Vec<u8, MAX_COMMAND_LEN>,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Collecting,
            buf: Vec::new(),
        }
    }

    /// Feed one byte. Returns a token when `byte` completes a well-formed
    /// line.
    pub fn push(&mut self, byte: u8) -> Option<Token> {
        match byte {
            CARRIAGE_RETURN => None,
            TERMINATOR => {
                let token = match self.state {
                    DecoderState::Collecting => Self::token_from(&self.buf),
                    DecoderState::Discarding => None,
                };
                self.reset();
                token
            }
            _ => {
                if self.state == DecoderState::Collecting && self.buf.push(byte).is_err() {
                    self.state = DecoderState::Discarding;
                    self.buf.clear();
                }
                None
            }
        }
    }

    /// Drop any partial line.
    pub fn reset(&mut self) {
        self.state = DecoderState::Collecting;
        self.buf.clear();
    }

    /// Number of bytes held for the current line.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    fn token_from(bytes: &[u8]) -> Option<Token> {
        if !bytes.is_ascii() {
            return None;
        }
        let text = core::str::from_utf8(bytes).ok()?.trim();
        if text.is_empty() {
            return None;
        }
        let mut token = Token::new();
        token.push_str(text).ok()?;
        Some(token)
    }
}
