//! Fuzz target: `Measurement::parse_line`
//!
//! Host-side parsing of device output must reject garbage with an
//! error, never a panic, and anything it accepts must format again.
//!
//! cargo fuzz run fuzz_report_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use sauna_monitor::command::protocol::Measurement;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(m) = Measurement::parse_line(line) {
        let _ = m.format_report();
    }
});
