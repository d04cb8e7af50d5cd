//! Fuzz target: `LineDecoder::push`
//!
//! Drives arbitrary byte sequences into the command line decoder and
//! asserts that it never panics and only ever yields trimmed, non-empty
//! ASCII tokens that fit the buffer.
//!
//! cargo fuzz run fuzz_line_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use sauna_monitor::command::codec::LineDecoder;
use sauna_monitor::command::protocol::Command;
use sauna_monitor::config::MAX_COMMAND_LEN;

fuzz_target!(|data: &[u8]| {
    let mut decoder = LineDecoder::new();

    for &byte in data {
        if let Some(token) = decoder.push(byte) {
            assert!(!token.is_empty(), "decoder must not yield empty tokens");
            assert!(token.len() <= MAX_COMMAND_LEN);
            assert!(token.is_ascii());
            assert!(Command::parse(&token).is_some());
        }
    }

    // After a reset the decoder must accept bytes cleanly again.
    decoder.reset();
    assert_eq!(decoder.pending(), 0);
});
