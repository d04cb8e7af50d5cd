//! Integration tests for the serial command path through the main loop.

use super::mock_hw::{MockHardware, MockSerial, PROBE_DISCONNECTED, RecordingSink, climate};

use sauna_monitor::app::service::MonitorService;
use sauna_monitor::command::protocol::Measurement;
use sauna_monitor::config::{IDENTIFICATION, MonitorConfig};

fn make_app() -> (MonitorService, MockHardware, MockSerial, RecordingSink) {
    let mut app = MonitorService::new(MonitorConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, MockSerial::new(), sink)
}

#[test]
fn commands_are_answered_between_samples() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    serial.send(b"id?\n");

    let sampled = app.poll(10, &mut hw, &mut serial, &mut sink);

    assert!(!sampled);
    assert_eq!(serial.lines, vec![IDENTIFICATION]);
}

#[test]
fn identification_ignores_sensor_state() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.fallback = climate(None, None);
    hw.probe_fallback = PROBE_DISCONNECTED;
    app.poll(1000, &mut hw, &mut serial, &mut sink);

    serial.send(b"id?\r\n");
    app.poll(1001, &mut hw, &mut serial, &mut sink);

    assert_eq!(serial.lines, vec![IDENTIFICATION]);
}

#[test]
fn report_carries_last_sample() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.fallback = climate(Some(61.2), Some(23.456));
    hw.probe_fallback = PROBE_DISCONNECTED;
    app.poll(5000, &mut hw, &mut serial, &mut sink);

    serial.send(b"?\n");
    app.poll(5001, &mut hw, &mut serial, &mut sink);

    assert_eq!(serial.lines, vec!["5000\t23.456\t61.2\tnan"]);
}

#[test]
fn each_field_shows_undefined_independently() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.fallback = climate(None, Some(30.0));
    app.poll(1000, &mut hw, &mut serial, &mut sink);

    serial.send(b"meas?\n");
    app.poll(1001, &mut hw, &mut serial, &mut sink);

    assert_eq!(serial.lines, vec!["1000\t30.000\tnan\t30.00"]);
}

#[test]
fn report_before_first_sample_is_all_undefined() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    serial.send(b"?\n");
    app.poll(5, &mut hw, &mut serial, &mut sink);
    assert_eq!(serial.lines, vec!["0\tnan\tnan\tnan"]);
}

#[test]
fn empty_and_oversized_input_gets_no_reply() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    serial.send(b"\n\r\n  \n");
    app.poll(1, &mut hw, &mut serial, &mut sink);

    let long = vec![b'x'; 200];
    for chunk in long.chunks(40) {
        serial.send(chunk);
        app.poll(2, &mut hw, &mut serial, &mut sink);
    }
    serial.send(b"\n");
    app.poll(3, &mut hw, &mut serial, &mut sink);

    assert!(serial.lines.is_empty());
}

#[test]
fn burst_of_commands_answered_in_order() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    serial.send(b"id?\n?\nid?\n");
    app.poll(10, &mut hw, &mut serial, &mut sink);

    assert_eq!(serial.lines.len(), 3);
    assert_eq!(serial.lines[0], IDENTIFICATION);
    assert_eq!(serial.lines[1], "0\tnan\tnan\tnan");
    assert_eq!(serial.lines[2], IDENTIFICATION);
}

#[test]
fn host_parses_device_report() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.fallback = climate(Some(48.7), Some(36.9));
    hw.probe_fallback = 37.25;
    app.poll(1000, &mut hw, &mut serial, &mut sink);
    serial.send(b"?\n");
    app.poll(1001, &mut hw, &mut serial, &mut sink);

    let m = Measurement::parse_line(&serial.lines[0]).unwrap();
    assert_eq!(m.tick_ms, 1000);
    assert!((m.smoothed_temperature.unwrap() - 36.9).abs() < 1e-3);
    assert!((m.humidity.unwrap() - 48.7).abs() < 1e-3);
    assert_eq!(m.probe_temperature, Some(37.25));
}
