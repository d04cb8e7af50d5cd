//! Integration tests for the MonitorService sampling loop:
//! scheduling, filtering, indicator state, and emitted events.

use super::mock_hw::{MockHardware, MockSerial, PROBE_DISCONNECTED, RecordingSink, climate};

use sauna_monitor::app::events::AppEvent;
use sauna_monitor::app::indicator::{COLOUR_OKAY, COLOUR_SENSOR_ERROR, IndicatorState};
use sauna_monitor::app::service::MonitorService;
use sauna_monitor::config::{LED_BRIGHT, LED_DIM, MonitorConfig};

fn make_app() -> (MonitorService, MockHardware, MockSerial, RecordingSink) {
    let mut app = MonitorService::new(MonitorConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.boot_indicator(&mut hw);
    app.start(&mut hw, &mut sink);
    (app, hw, MockSerial::new(), sink)
}

// ── Scheduling ───────────────────────────────────────────────

#[test]
fn samples_once_per_period() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();

    let taken: Vec<bool> = [0, 500, 999, 1000, 1500, 1999, 2000, 2001]
        .iter()
        .map(|&t| app.poll(t, &mut hw, &mut serial, &mut sink))
        .collect();

    assert_eq!(taken, [false, false, false, true, false, false, true, false]);
    assert_eq!(app.sample_count(), 2);
    assert_eq!(hw.conversions, 2);
}

#[test]
fn late_poll_reschedules_from_actual_sample_time() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    assert!(app.poll(1300, &mut hw, &mut serial, &mut sink));
    assert!(!app.poll(2299, &mut hw, &mut serial, &mut sink));
    assert!(app.poll(2300, &mut hw, &mut serial, &mut sink));
}

#[test]
fn clock_wraparound_keeps_the_period() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    assert!(app.poll(u32::MAX - 200, &mut hw, &mut serial, &mut sink));
    assert!(!app.poll(798, &mut hw, &mut serial, &mut sink));
    assert!(app.poll(799, &mut hw, &mut serial, &mut sink));
    assert_eq!(app.measurement().tick_ms, 799);
}

// ── Filtering ────────────────────────────────────────────────

#[test]
fn constant_input_stays_constant() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.fallback = climate(Some(40.0), Some(25.0));

    for tick in 1..=10 {
        app.poll(tick * 1000, &mut hw, &mut serial, &mut sink);
        let smoothed = app.measurement().smoothed_temperature.unwrap();
        assert!((smoothed - 25.0).abs() < 1e-4, "tick {tick}: {smoothed}");
    }
}

#[test]
fn undefined_read_between_two_good_reads_holds_value() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.climate.extend([
        climate(Some(40.0), Some(20.0)),
        climate(None, None),
        climate(Some(40.0), Some(20.0)),
    ]);

    for tick in 1..=3 {
        app.poll(tick * 1000, &mut hw, &mut serial, &mut sink);
        assert_eq!(app.measurement().smoothed_temperature, Some(20.0));
    }
}

#[test]
fn smoothing_follows_the_recurrence() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.climate.extend([climate(Some(40.0), Some(20.0)), climate(Some(40.0), Some(30.0))]);

    app.poll(1000, &mut hw, &mut serial, &mut sink);
    app.poll(2000, &mut hw, &mut serial, &mut sink);

    let expected = 0.95 * 20.0 + 0.05 * 30.0;
    let smoothed = app.measurement().smoothed_temperature.unwrap();
    assert!((smoothed - expected).abs() < 1e-4);
    assert_eq!(app.last_reading().temperature, Some(30.0));
}

// ── Indicator ────────────────────────────────────────────────

#[test]
fn heartbeat_alternates_on_good_readings() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.led.clear();

    let mut phases = Vec::new();
    for tick in 1..=4 {
        app.poll(tick * 1000, &mut hw, &mut serial, &mut sink);
        phases.push(app.blink_phase());
    }

    assert_eq!(phases, vec![true, false, true, false]);

    assert_eq!(
        hw.led,
        vec![
            (COLOUR_OKAY, LED_DIM),
            (COLOUR_OKAY, LED_BRIGHT),
            (COLOUR_OKAY, LED_DIM),
            (COLOUR_OKAY, LED_BRIGHT),
        ]
    );
    assert_eq!(app.indicator_state(), IndicatorState::Okay);
}

#[test]
fn primary_failure_shows_error_and_keeps_heartbeat() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.fallback = climate(Some(50.0), None);
    hw.led.clear();

    app.poll(1000, &mut hw, &mut serial, &mut sink);
    app.poll(2000, &mut hw, &mut serial, &mut sink);

    assert_eq!(
        hw.led,
        vec![(COLOUR_SENSOR_ERROR, LED_DIM), (COLOUR_SENSOR_ERROR, LED_BRIGHT)]
    );
    assert_eq!(app.indicator_state(), IndicatorState::SensorError);
}

#[test]
fn humidity_failure_alone_is_a_sensor_error() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.fallback = climate(None, Some(21.0));
    app.poll(1000, &mut hw, &mut serial, &mut sink);
    assert_eq!(app.indicator_state(), IndicatorState::SensorError);
    assert_eq!(app.measurement().smoothed_temperature, Some(21.0));
}

#[test]
fn probe_failure_never_forces_sensor_error() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.probe_fallback = PROBE_DISCONNECTED;

    app.poll(1000, &mut hw, &mut serial, &mut sink);

    assert_eq!(app.indicator_state(), IndicatorState::Okay);
    assert_eq!(hw.last_led().unwrap().0, COLOUR_OKAY);
    assert_eq!(app.measurement().probe_temperature, None);
}

#[test]
fn recovery_returns_to_okay() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.climate.push_back(climate(None, None));

    app.poll(1000, &mut hw, &mut serial, &mut sink);
    assert_eq!(app.indicator_state(), IndicatorState::SensorError);
    app.poll(2000, &mut hw, &mut serial, &mut sink);
    assert_eq!(app.indicator_state(), IndicatorState::Okay);
}

// ── Events ───────────────────────────────────────────────────

#[test]
fn fault_and_recovery_are_reported_once() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    hw.climate.extend([
        climate(Some(50.0), None),
        climate(Some(50.0), None),
        climate(Some(50.0), Some(22.0)),
    ]);
    hw.probe.extend([PROBE_DISCONNECTED, 30.0, 30.0]);

    for tick in 1..=3 {
        app.poll(tick * 1000, &mut hw, &mut serial, &mut sink);
    }

    assert_eq!(
        sink.transitions(),
        vec![
            &AppEvent::Started { period_ms: 1000 },
            &AppEvent::SensorFault {
                humidity_ok: true,
                temperature_ok: false,
            },
            &AppEvent::ProbeLost,
            &AppEvent::ProbeRestored,
            &AppEvent::SensorRecovered,
        ]
    );
}

#[test]
fn every_sample_is_published() {
    let (mut app, mut hw, mut serial, mut sink) = make_app();
    app.poll(1000, &mut hw, &mut serial, &mut sink);
    app.poll(2000, &mut hw, &mut serial, &mut sink);

    let sampled: Vec<u32> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Sampled(m) => Some(m.tick_ms),
            _ => None,
        })
        .collect();
    assert_eq!(sampled, [1000, 2000]);
}
