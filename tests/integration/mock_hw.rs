//! Mock adapters for integration tests.
//!
//! Scripted sensor values in, recorded indicator/serial/event calls out,
//! so tests can assert on the full history without touching GPIO.

use std::collections::VecDeque;

use sauna_monitor::app::events::AppEvent;
use sauna_monitor::app::indicator::Rgb;
use sauna_monitor::app::ports::{
    ClimatePort, ClimateSample, EventSink, IndicatorPort, ProbePort, SerialPort,
};
use sauna_monitor::error::CommsError;

pub const PROBE_DISCONNECTED: f32 = -127.0;

pub fn climate(humidity: Option<f32>, temperature: Option<f32>) -> ClimateSample {
    ClimateSample {
        humidity,
        temperature,
    }
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Consumed one per sample; `fallback` once empty.
    pub climate: VecDeque<ClimateSample>,
    pub probe: VecDeque<f32>,
    pub fallback: ClimateSample,
    pub probe_fallback: f32,
    pub conversions: usize,
    pub led: Vec<(Rgb, u8)>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            climate: VecDeque::new(),
            probe: VecDeque::new(),
            fallback: climate(Some(50.0), Some(25.0)),
            probe_fallback: 30.0,
            conversions: 0,
            led: Vec::new(),
        }
    }

    pub fn last_led(&self) -> Option<(Rgb, u8)> {
        self.led.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimatePort for MockHardware {
    fn read_climate(&mut self, _now_ms: u32) -> ClimateSample {
        self.climate.pop_front().unwrap_or(self.fallback)
    }
}

impl ProbePort for MockHardware {
    fn request_conversion(&mut self) {
        self.conversions += 1;
    }

    fn read_celsius(&mut self) -> f32 {
        self.probe.pop_front().unwrap_or(self.probe_fallback)
    }
}

impl IndicatorPort for MockHardware {
    fn show(&mut self, colour: Rgb, brightness: u8) {
        self.led.push((colour, brightness));
    }
}

// ── MockSerial ────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSerial {
    pub input: VecDeque<u8>,
    pub lines: Vec<String>,
}

#[allow(dead_code)]
impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&mut self, data: &[u8]) {
        self.input.extend(data);
    }
}

impl SerialPort for MockSerial {
    fn read_available(&mut self, buf: &mut [u8]) -> usize {
        let n = self.input.len().min(buf.len());
        for (slot, byte) in buf.iter_mut().zip(self.input.drain(..n)) {
            *slot = byte;
        }
        n
    }

    fn write_line(&mut self, line: &str) -> Result<(), CommsError> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events other than the per-sample `Sampled` chatter.
    pub fn transitions(&self) -> Vec<&AppEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, AppEvent::Sampled(_)))
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
