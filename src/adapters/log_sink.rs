//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (the ESP-IDF console UART in production, which is not the
//! command UART).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn show(v: Option<f32>) -> f32 {
    v.unwrap_or(f32::NAN)
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { period_ms } => {
                info!("START | period={}ms", period_ms);
            }
            AppEvent::SensorFault {
                humidity_ok,
                temperature_ok,
            } => {
                warn!(
                    "FAULT | DHT22 read failed (humidity={} temperature={})",
                    if *humidity_ok { "OK" } else { "FAIL" },
                    if *temperature_ok { "OK" } else { "FAIL" },
                );
            }
            AppEvent::SensorRecovered => {
                info!("FAULT | DHT22 recovered");
            }
            AppEvent::ProbeLost => {
                warn!("PROBE | DS18B20 not answering");
            }
            AppEvent::ProbeRestored => {
                info!("PROBE | DS18B20 back");
            }
            AppEvent::Sampled(m) => {
                debug!(
                    "SAMPLE | t={}ms | T={:.3}\u{00b0}C | RH={:.1}% | probe={:.2}\u{00b0}C",
                    m.tick_ms,
                    show(m.smoothed_temperature),
                    show(m.humidity),
                    show(m.probe_temperature),
                );
            }
        }
    }
}
