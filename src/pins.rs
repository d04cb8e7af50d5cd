//! GPIO / peripheral pin assignments for the monitor board.
//!
//! `main` references this module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors: single-wire, open drain with external 4.7 kΩ pull-ups
// ---------------------------------------------------------------------------

/// DHT22 humidity/temperature data line.
pub const DHT22_GPIO: i32 = 2;

/// DS18B20 probe data line.
pub const DS18B20_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Status LED (APA102 / DotStar, single pixel)
// ---------------------------------------------------------------------------

pub const DOTSTAR_DATA_GPIO: i32 = 8;
pub const DOTSTAR_CLOCK_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Command UART (UART1). The console UART0 carries logs only.
// ---------------------------------------------------------------------------

pub const CMD_UART_TX_GPIO: i32 = 17;
pub const CMD_UART_RX_GPIO: i32 = 18;
