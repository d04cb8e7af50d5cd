//! Sensor subsystem: individual drivers and the per-tick [`SensorSampler`].
//!
//! The sampler reads the primary climate sensor and the secondary probe
//! once per tick, feeds the smoothing filter, and keeps the last-known
//! values that the command responder reports.

pub mod dht22;
pub mod ds18b20;

use crate::app::ports::{ClimatePort, ProbePort};
use crate::control::smoothing::SmoothingFilter;

/// Last-known values from one tick. `None` is "no valid reading".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorReading {
    /// Relative humidity [%]
    pub humidity: Option<f32>,
    /// Raw primary temperature [°C]
    pub temperature: Option<f32>,
    /// Secondary probe temperature [°C]
    pub probe_temperature: Option<f32>,
}

impl SensorReading {
    /// A reading is valid when the primary sensor produced both values.
    /// The probe does not take part.
    pub fn is_valid(&self) -> bool {
        self.humidity.is_some() && self.temperature.is_some()
    }
}

/// Map a raw probe value to a reading, dropping the disconnected sentinel.
pub fn normalise_probe(raw_c: f32, disconnected_c: f32) -> Option<f32> {
    if raw_c.is_nan() || raw_c <= disconnected_c {
        None
    } else {
        Some(raw_c)
    }
}

/// Orchestrates the periodic reads and owns the filter state.
pub struct SensorSampler {
    filter: SmoothingFilter,
    last: SensorReading,
    probe_disconnected_c: f32,
}

impl SensorSampler {
    pub fn new(smoothing_alpha: f32, probe_disconnected_c: f32) -> Self {
        Self {
            filter: SmoothingFilter::new(smoothing_alpha),
            last: SensorReading::default(),
            probe_disconnected_c,
        }
    }

    /// Take one sample. Call exactly once per scheduler tick.
    ///
    /// A failed primary temperature read leaves the smoothed value as it
    /// was; a failed humidity read does not touch the filter at all.
    pub fn sample(
        &mut self,
        now_ms: u32,
        hw: &mut (impl ClimatePort + ProbePort),
    ) -> SensorReading {
        let climate = hw.read_climate(now_ms);
        if let Some(t) = climate.temperature {
            self.filter.update(t);
        }

        hw.request_conversion();
        let probe_temperature = normalise_probe(hw.read_celsius(), self.probe_disconnected_c);

        self.last = SensorReading {
            humidity: climate.humidity,
            temperature: climate.temperature,
            probe_temperature,
        };
        self.last
    }

    /// Values from the most recent sample.
    pub fn last(&self) -> &SensorReading {
        &self.last
    }

    /// Current smoothed primary temperature.
    pub fn smoothed_temperature(&self) -> Option<f32> {
        self.filter.value()
    }
}
