//! Command set and report line format.
//!
//! Report line (newline-terminated, fields separated by `\t`):
//! ```text
//! <tick_ms>  <smoothed °C, 3 dp>  <humidity %, 1 dp>  <probe °C, 2 dp>
//! ```
//! An undefined field is printed as `nan`, the marker the host side
//! already understands.

use core::fmt::{self, Write};

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::error::CommsError;

/// Text printed for an undefined value.
pub const UNDEFINED_MARKER: &str = "nan";

/// Query that returns the identification string.
pub const IDENTIFY_QUERY: &str = "id?";

/// Capacity of one report line (without the newline).
pub const REPORT_CAPACITY: usize = 96;

/// A formatted report line.
pub type ReportLine = String<REPORT_CAPACITY>;

/// Commands understood by the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `id?`
    Identify,
    /// Any other non-empty token.
    Report,
}

impl Command {
    /// Classify a decoded token. Empty tokens are not commands.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "" => None,
            IDENTIFY_QUERY => Some(Self::Identify),
            _ => Some(Self::Report),
        }
    }
}

/// Snapshot reported by the `Report` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Clock value at the last sample [ms]
    pub tick_ms: u32,
    /// Smoothed primary temperature [°C]
    pub smoothed_temperature: Option<f32>,
    /// Primary relative humidity [%]
    pub humidity: Option<f32>,
    /// Secondary probe temperature [°C]
    pub probe_temperature: Option<f32>,
}

struct Field(Option<f32>, usize);

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:.*}", self.1, v),
            None => f.write_str(UNDEFINED_MARKER),
        }
    }
}

impl Measurement {
    /// Render the report line (no trailing newline).
    pub fn format_report(&self) -> Result<ReportLine, CommsError> {
        let mut line = ReportLine::new();
        write!(
            line,
            "{}\t{}\t{}\t{}",
            self.tick_ms,
            Field(self.smoothed_temperature, 3),
            Field(self.humidity, 1),
            Field(self.probe_temperature, 2),
        )
        .map_err(|_| CommsError::LineOverflow)?;
        Ok(line)
    }

    /// Parse a report line received from the device (host side).
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let mut fields = line.trim_end_matches(['\r', '\n']).split('\t');
        let mut next = || fields.next().ok_or(ParseError::FieldCount);

        let tick_ms = next()?.trim().parse().map_err(|_| ParseError::Tick)?;
        let smoothed_temperature = parse_value(next()?, 1)?;
        let humidity = parse_value(next()?, 2)?;
        let probe_temperature = parse_value(next()?, 3)?;
        if fields.next().is_some() {
            return Err(ParseError::FieldCount);
        }

        Ok(Self {
            tick_ms,
            smoothed_temperature,
            humidity,
            probe_temperature,
        })
    }
}

fn parse_value(field: &str, index: usize) -> Result<Option<f32>, ParseError> {
    let field = field.trim();
    if field.eq_ignore_ascii_case(UNDEFINED_MARKER) {
        return Ok(None);
    }
    field
        .parse::<f32>()
        .map(Some)
        .map_err(|_| ParseError::Value(index))
}

/// Errors from [`Measurement::parse_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not have exactly four fields.
    FieldCount,
    /// The tick field is not an unsigned integer.
    Tick,
    /// The numeric field at this index is neither a number nor `nan`.
    Value(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount => write!(f, "expected 4 tab-separated fields"),
            Self::Tick => write!(f, "tick is not an unsigned integer"),
            Self::Value(i) => write!(f, "field {} is not a number", i),
        }
    }
}

impl core::error::Error for ParseError {}
