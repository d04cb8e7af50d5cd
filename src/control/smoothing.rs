//! Exponential smoothing filter for the primary temperature
//!
//! One-pole low-pass:
//!
//! ```text
//! y(k) = a * y(k-1) + (1 - a) * x(k)      y(0) = x(0)
//! ```
//!
//! For a fixed sample period `T` the constant relates to the time
//! constant `tau` by `a = exp(-T / tau)`, i.e. `tau = -T / ln(a)`.

/// Smoothing filter. The state stays `None` until the first sample.
#[derive(Debug, Clone, Copy)]
pub struct SmoothingFilter {
    alpha: f32,
    state: Option<f32>,
}

impl SmoothingFilter {
    /// `alpha` must lie in (0, 1). It is not checked here.
    pub const fn new(alpha: f32) -> Self {
        Self { alpha, state: None }
    }

    /// Feed one raw sample and return the new smoothed value.
    ///
    /// Never call this with an undefined reading; skip the update instead
    /// so the previous smoothed value is held.
    pub fn update(&mut self, raw: f32) -> f32 {
        let next = match self.state {
            None => raw,
            Some(prev) => self.alpha * prev + (1.0 - self.alpha) * raw,
        };
        self.state = Some(next);
        next
    }

    /// Last smoothed value, if any sample has been taken.
    pub fn value(&self) -> Option<f32> {
        self.state
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Forget the history; the next sample re-seeds the filter.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Effective time constant in seconds for the given sample period.
    pub fn time_constant_s(&self, period_ms: u32) -> f32 {
        -(period_ms as f32 / 1000.0) / self.alpha.ln()
    }
}

/// Smoothing constant giving time constant `tau_s` at `period_ms`.
pub fn alpha_for(period_ms: u32, tau_s: f32) -> f32 {
    (-(period_ms as f32 / 1000.0) / tau_s).exp()
}
