//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the DHT22, the DS18B20 probe, and the DotStar pixel, exposing
//! them through [`ClimatePort`], [`ProbePort`], and [`IndicatorPort`].
//! Driver errors stop here: they are logged and turned into undefined
//! readings, which is all the domain needs to know.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::{debug, warn};

use crate::app::indicator::Rgb;
use crate::app::ports::{ClimatePort, ClimateSample, IndicatorPort, ProbePort};
use crate::drivers::status_led::DotStar;
use crate::sensors::dht22::Dht22;
use crate::sensors::ds18b20::Ds18b20;

/// Concrete adapter that combines all hardware behind port traits.
///
/// `P` is an open-drain input/output pin, `D` a microsecond delay,
/// `O` a push-pull output.
pub struct HardwareAdapter<P, D, O> {
    dht: Dht22<P, D>,
    probe: Ds18b20<P, D>,
    led: DotStar<O>,
}

impl<P, D, O> HardwareAdapter<P, D, O>
where
    P: InputPin + OutputPin,
    D: DelayNs,
    O: OutputPin,
{
    pub fn new(dht: Dht22<P, D>, probe: Ds18b20<P, D>, led: DotStar<O>) -> Self {
        Self { dht, probe, led }
    }
}

// ── ClimatePort implementation ────────────────────────────────

impl<P, D, O> ClimatePort for HardwareAdapter<P, D, O>
where
    P: InputPin + OutputPin,
    D: DelayNs,
    O: OutputPin,
{
    fn read_climate(&mut self, now_ms: u32) -> ClimateSample {
        match self.dht.read(now_ms) {
            Ok((humidity, temperature)) => ClimateSample {
                humidity: Some(humidity),
                temperature: Some(temperature),
            },
            Err(e) => {
                debug!("DHT22 read failed: {}", e);
                ClimateSample::default()
            }
        }
    }
}

// ── ProbePort implementation ──────────────────────────────────

impl<P, D, O> ProbePort for HardwareAdapter<P, D, O>
where
    P: InputPin + OutputPin,
    D: DelayNs,
    O: OutputPin,
{
    fn request_conversion(&mut self) {
        if let Err(e) = self.probe.request_temperature() {
            debug!("DS18B20 conversion failed: {}", e);
        }
    }

    fn read_celsius(&mut self) -> f32 {
        self.probe.read_celsius()
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<P, D, O> IndicatorPort for HardwareAdapter<P, D, O>
where
    P: InputPin + OutputPin,
    D: DelayNs,
    O: OutputPin,
{
    fn show(&mut self, colour: Rgb, brightness: u8) {
        if self.led.set_colour(colour, brightness).is_err() {
            warn!("Status LED write failed");
        }
    }
}
