//! Smoother state for Holt's double exponential smoothing.
//!
//! This module provides the request-scoped `(level, trend)` pair that the
//! recursion mutates. State lives for the duration of one forecast
//! invocation and is re-seeded from scratch on every call; nothing persists
//! across invocations.

// External dependencies
use num_traits::Float;

// Smoothed `(level, trend)` state as of the most recent observation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoltState<T> {
    // Smoothed estimate of the current baseline value.
    pub level: T,

    // Smoothed estimate of the per-period change.
    pub trend: T,
}

impl<T: Float> HoltState<T> {
    // Seed the state from the first pair of consecutive observations.
    #[inline]
    pub fn seed(first: T, second: T) -> Self {
        Self {
            level: first,
            trend: second - first,
        }
    }

    // Apply one step of the Holt recursion for `observation`.
    #[inline]
    pub fn advance(&mut self, alpha: T, beta: T, observation: T) {
        let level_prev = self.level;
        self.level = alpha * observation + (T::one() - alpha) * (level_prev + self.trend);
        self.trend = beta * (self.level - level_prev) + (T::one() - beta) * self.trend;
    }

    // One-step-ahead projection from the current state.
    #[inline]
    pub fn projection(&self) -> T {
        self.level + self.trend
    }
}
