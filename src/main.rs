//! Sauna monitor firmware entry point.
//!
//! Hexagonal architecture with a single cooperative loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter             UartSerial    LogEventSink        │
//! │  (Climate+Probe+Indicator)   (SerialPort)  (EventSink)         │
//! │  Esp32TimeAdapter (ClockPort)                                  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            MonitorService (pure logic)                 │    │
//! │  │  SensorSampler · SmoothingFilter · CommandResponder    │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::{UartDriver, config::Config as UartConfig};
use esp_idf_hal::units::Hertz;
use log::info;

use sauna_monitor::adapters::hardware::HardwareAdapter;
use sauna_monitor::adapters::log_sink::LogEventSink;
use sauna_monitor::adapters::time::Esp32TimeAdapter;
use sauna_monitor::adapters::uart::UartSerial;
use sauna_monitor::app::ports::ClockPort;
use sauna_monitor::app::service::MonitorService;
use sauna_monitor::config::{MonitorConfig, SERIAL_BAUD};
use sauna_monitor::drivers::status_led::DotStar;
use sauna_monitor::pins;
use sauna_monitor::sensors::dht22::Dht22;
use sauna_monitor::sensors::ds18b20::Ds18b20;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Sauna monitor v{}", env!("CARGO_PKG_VERSION"));

    let config = MonitorConfig::default();
    let mut app = MonitorService::new(config);
    let peripherals = Peripherals::take()?;

    // ── 2. Status LED first, so setup is visible ──────────────
    // SAFETY: every GPIO number in `pins` is distinct and claimed once here.
    let (led_data, led_clock) = unsafe {
        (
            AnyOutputPin::new(pins::DOTSTAR_DATA_GPIO),
            AnyOutputPin::new(pins::DOTSTAR_CLOCK_GPIO),
        )
    };
    let led = DotStar::new(PinDriver::output(led_data)?, PinDriver::output(led_clock)?);

    // ── 3. Sensors ────────────────────────────────────────────
    // SAFETY: as above.
    let (dht_pin, probe_pin, uart_tx, uart_rx) = unsafe {
        (
            AnyIOPin::new(pins::DHT22_GPIO),
            AnyIOPin::new(pins::DS18B20_GPIO),
            AnyIOPin::new(pins::CMD_UART_TX_GPIO),
            AnyIOPin::new(pins::CMD_UART_RX_GPIO),
        )
    };
    let dht = Dht22::new(PinDriver::input_output_od(dht_pin)?, Ets);
    let probe = Ds18b20::new(PinDriver::input_output_od(probe_pin)?, Ets);

    let mut hw = HardwareAdapter::new(dht, probe, led);
    app.boot_indicator(&mut hw);

    // ── 4. Command UART ───────────────────────────────────────
    let uart = UartDriver::new(
        peripherals.uart1,
        uart_tx,
        uart_rx,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &UartConfig::default().baudrate(Hertz(SERIAL_BAUD)),
    )?;
    let mut serial = UartSerial::new(uart);

    let mut log_sink = LogEventSink::new();
    let clock = Esp32TimeAdapter::new();

    app.start(&mut hw, &mut log_sink);
    info!("System ready. Entering sampling loop.");

    // ── 5. Main loop ──────────────────────────────────────────
    loop {
        app.poll(clock.millis(), &mut hw, &mut serial, &mut log_sink);
        // Yield so the idle task can feed the task watchdog.
        FreeRtos::delay_ms(1);
    }
}
