//! Signal conditioning applied to raw sensor values.

pub mod smoothing;
