//! Application core: pure domain logic, zero I/O.
//!
//! This module holds the sampling loop ([`service`]), the indicator
//! mapping ([`indicator`]), and the events the loop reports. All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer testable without real peripherals.

pub mod events;
pub mod indicator;
pub mod ports;
pub mod service;
