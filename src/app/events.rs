//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them (console log in
//! production, a `Vec` in tests).

use crate::command::protocol::Measurement;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Boot finished; the sampling loop is about to run.
    Started { period_ms: u32 },

    /// The primary sensor stopped returning a complete reading.
    SensorFault {
        humidity_ok: bool,
        temperature_ok: bool,
    },

    /// The primary sensor is returning complete readings again.
    SensorRecovered,

    /// The secondary probe stopped answering.
    ProbeLost,

    /// The secondary probe answers again.
    ProbeRestored,

    /// A sample was taken; carries what `?` would report now.
    Sampled(Measurement),
}
