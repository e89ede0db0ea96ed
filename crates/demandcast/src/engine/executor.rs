//! Execution engine for Holt forecasting.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that drives Holt's double
//! exponential smoothing. It seeds the smoother state from the leading pair
//! of observations, fits the state over the remaining history, and then
//! extrapolates the requested number of future periods.
//!
//! ## Design notes
//!
//! * Separates concerns: fitting, extrapolation, and result packaging.
//! * Generic over `Float` types to support f32 and f64.
//! * Pure: state is local to one invocation and discarded afterward, so
//!   concurrent calls need no coordination.
//! * Extrapolation feeds each emitted forecast back through the same
//!   recursion step as if it had been observed. Because the forecast equals
//!   the one-step projection exactly, the projection then advances by the
//!   terminal trend at every step; the recursion is kept literal rather
//!   than replaced by that closed form, so rounding accumulates identically
//!   wherever this engine runs.
//!
//! ## Invariants
//!
//! * Observations are consumed in chronological order.
//! * The fitted state reflects exactly the supplied history; no forecasts
//!   are emitted during fitting.
//! * The output length equals the requested horizon.
//!
//! ## Non-goals
//!
//! * This module does not normalize raw input (handled by the adapters).
//! * This module does not validate smoothing coefficients; their range is
//!   a caller responsibility.
//! * This module does not estimate alpha or beta from the data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::ForecastOutput;
use crate::engine::validator::Validator;
use crate::primitives::errors::ForecastError;
use crate::primitives::state::HoltState;

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for Holt forecasting operations.
#[derive(Debug, Clone, Copy)]
pub struct HoltExecutor<T: Float> {
    /// Level smoothing constant, conventionally in (0, 1).
    pub alpha: T,

    /// Trend smoothing constant, conventionally in (0, 1).
    pub beta: T,
}

impl<T: Float> Default for HoltExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> HoltExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default smoothing constants.
    pub fn new() -> Self {
        Self {
            alpha: T::from(0.2).unwrap(),
            beta: T::from(0.1).unwrap(),
        }
    }

    /// Set the level smoothing constant.
    pub fn alpha(mut self, alpha: T) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the trend smoothing constant.
    pub fn beta(mut self, beta: T) -> Self {
        self.beta = beta;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Fit the smoother over `data` and forecast `periods` future values.
    ///
    /// Returns the forecasts together with the terminal `(level, trend)`
    /// state as of the last historical observation.
    pub fn run(&self, data: &[T], periods: usize) -> Result<ForecastOutput<T>, ForecastError> {
        let mut state = self.fit(data)?;

        // Terminal state before any extrapolation
        let level = state.level;
        let trend = state.trend;

        let forecasts = self.extrapolate(&mut state, periods);

        Ok(ForecastOutput {
            forecasts,
            level,
            trend,
            alpha: self.alpha,
            beta: self.beta,
        })
    }

    // ========================================================================
    // Phases
    // ========================================================================

    /// Seed and fit the smoother state over the historical series.
    ///
    /// The state is seeded from the first pair of observations, then every
    /// subsequent observation is folded in chronologically. No forecasts
    /// are emitted here.
    pub fn fit(&self, data: &[T]) -> Result<HoltState<T>, ForecastError> {
        Validator::validate_history(data)?;

        let mut state = HoltState::seed(data[0], data[1]);
        for &observation in &data[1..] {
            state.advance(self.alpha, self.beta, observation);
        }

        Ok(state)
    }

    /// Extrapolate `periods` future values from a fitted state.
    ///
    /// Each emitted forecast is the one-step projection `level + trend`,
    /// and is then fed back through the recursion as if it had been
    /// observed before the next period is emitted.
    pub fn extrapolate(&self, state: &mut HoltState<T>, periods: usize) -> Vec<T> {
        let mut forecasts = Vec::with_capacity(periods);

        for _ in 0..periods {
            let forecast = state.projection();
            forecasts.push(forecast);
            state.advance(self.alpha, self.beta, forecast);
        }

        forecasts
    }
}
