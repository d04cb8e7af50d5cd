//! Application service, the hexagonal core.
//!
//! [`MonitorService`] owns the sampler, the command responder, and the
//! loop bookkeeping. The hardware and the serial link are injected at
//! call sites through port traits, making the whole loop testable with
//! mock adapters.
//!
//! ```text
//!  ClimatePort ──▶ ┌─────────────────────────┐ ──▶ IndicatorPort
//!    ProbePort ──▶ │     MonitorService      │ ──▶ EventSink
//!                  │ sampler · filter · cmds │ ◀─▶ SerialPort
//!                  └─────────────────────────┘
//! ```

use log::info;

use crate::command::protocol::Measurement;
use crate::command::responder::CommandResponder;
use crate::config::{IDENTIFICATION, MonitorConfig};
use crate::sensors::{SensorReading, SensorSampler};

use super::events::AppEvent;
use super::indicator::{self, Brightness, IndicatorState};
use super::ports::{ClimatePort, EventSink, IndicatorPort, ProbePort, SerialPort};

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

/// The sampling loop state.
pub struct MonitorService {
    config: MonitorConfig,
    sampler: SensorSampler,
    responder: CommandResponder,
    /// Clock value when the last sample was taken.
    last_sample_ms: u32,
    /// Heartbeat phase; `true` renders the bright level.
    blink_phase: bool,
    booting_done: bool,
    indicator: IndicatorState,
    probe_present: bool,
    samples: u64,
}

impl MonitorService {
    /// Construct the service. The indicator stays in `Booting` until
    /// [`start`](Self::start) is called.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            sampler: SensorSampler::new(config.smoothing_alpha, config.probe_disconnected_c),
            responder: CommandResponder::new(IDENTIFICATION),
            config,
            last_sample_ms: 0,
            blink_phase: false,
            booting_done: false,
            indicator: IndicatorState::Booting,
            probe_present: true,
            samples: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Show the setup colour. Call before bringing up the sensors.
    pub fn boot_indicator(&mut self, hw: &mut impl IndicatorPort) {
        self.show(false, hw);
    }

    /// Mark setup complete and show the okay colour.
    pub fn start(&mut self, hw: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        self.booting_done = true;
        let (colour, brightness) = indicator::render(true, true, true, self.levels());
        hw.show(colour, brightness);
        self.indicator = IndicatorState::Okay;
        sink.emit(&AppEvent::Started {
            period_ms: self.config.sample_period_ms,
        });
        info!("Monitor started, sampling every {} ms", self.config.sample_period_ms);
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// One main-loop iteration.
    ///
    /// Samples when a full period has elapsed since the last sample
    /// (wrapping arithmetic, so clock rollover is harmless), then always
    /// services the command link so reply latency does not depend on the
    /// sampling period. Returns `true` if a sample was taken.
    pub fn poll(
        &mut self,
        now_ms: u32,
        hw: &mut (impl ClimatePort + ProbePort + IndicatorPort),
        serial: &mut impl SerialPort,
        sink: &mut impl EventSink,
    ) -> bool {
        let due = now_ms.wrapping_sub(self.last_sample_ms) >= self.config.sample_period_ms;
        if due {
            self.last_sample_ms = now_ms;
            self.tick(now_ms, hw, sink);
        }

        let measurement = self.measurement();
        self.responder.poll(serial, &measurement);
        due
    }

    fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl ClimatePort + ProbePort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        self.samples += 1;
        let reading = self.sampler.sample(now_ms, hw);
        self.report_transitions(&reading, sink);

        self.show(reading.is_valid(), hw);
        self.blink_phase = !self.blink_phase;

        sink.emit(&AppEvent::Sampled(self.measurement()));
    }

    fn show(&mut self, reading_valid: bool, hw: &mut impl IndicatorPort) {
        let (colour, brightness) =
            indicator::render(reading_valid, self.booting_done, self.blink_phase, self.levels());
        hw.show(colour, brightness);
        self.indicator = IndicatorState::from_inputs(reading_valid, self.booting_done);
    }

    fn report_transitions(&mut self, reading: &SensorReading, sink: &mut impl EventSink) {
        let was_ok = self.indicator != IndicatorState::SensorError;
        match (was_ok, reading.is_valid()) {
            (true, false) => sink.emit(&AppEvent::SensorFault {
                humidity_ok: reading.humidity.is_some(),
                temperature_ok: reading.temperature.is_some(),
            }),
            (false, true) => sink.emit(&AppEvent::SensorRecovered),
            _ => {}
        }

        let present = reading.probe_temperature.is_some();
        if present != self.probe_present {
            self.probe_present = present;
            let event = if present {
                AppEvent::ProbeRestored
            } else {
                AppEvent::ProbeLost
            };
            sink.emit(&event);
        }
    }

    fn levels(&self) -> Brightness {
        Brightness {
            dim: self.config.led_dim,
            bright: self.config.led_bright,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// What the `Report` command answers right now.
    pub fn measurement(&self) -> Measurement {
        let last = self.sampler.last();
        Measurement {
            tick_ms: self.last_sample_ms,
            smoothed_temperature: self.sampler.smoothed_temperature(),
            humidity: last.humidity,
            probe_temperature: last.probe_temperature,
        }
    }

    /// Values from the most recent sample.
    pub fn last_reading(&self) -> &SensorReading {
        self.sampler.last()
    }

    pub fn indicator_state(&self) -> IndicatorState {
        self.indicator
    }

    pub fn blink_phase(&self) -> bool {
        self.blink_phase
    }

    /// Samples taken since startup.
    pub fn sample_count(&self) -> u64 {
        self.samples
    }
}
