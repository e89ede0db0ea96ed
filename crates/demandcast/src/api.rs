//! High-level API for demand forecasting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring the smoothing
//! constants and the forecast horizon, producing a ready-to-use forecaster.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Unvalidated coefficients**: Alpha and beta ranges are a caller
//!   responsibility; `build` only rejects builder misuse.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder pattern ending in `.build()`.
//! * **Sources**: A forecaster accepts either a raw slice or any
//!   [`SeriesSource`] (manual form or tabular artifact).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HoltBuilder`] via `Holt::new()`.
//! 2. Chain configuration methods (`.alpha()`, `.beta()`, `.horizon()`).
//! 3. Call `.build()` to obtain a [`HoltForecaster`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::HoltExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::manual::ManualEntryForm;
pub use crate::adapters::tabular::TabularSource;
pub use crate::adapters::{SeriesSource, HISTORY_MONTHS};
pub use crate::engine::output::ForecastOutput;
pub use crate::primitives::errors::ForecastError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a Holt forecaster.
#[derive(Debug, Clone)]
pub struct HoltBuilder<T> {
    /// Level smoothing constant, conventionally in (0, 1).
    pub alpha: Option<T>,

    /// Trend smoothing constant, conventionally in (0, 1).
    pub beta: Option<T>,

    /// Number of future periods to forecast.
    pub horizon: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for HoltBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> HoltBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            alpha: None,
            beta: None,
            horizon: None,
            duplicate_param: None,
        }
    }

    /// Set the level smoothing constant (default 0.2).
    pub fn alpha(mut self, alpha: T) -> Self {
        if self.alpha.is_some() {
            self.duplicate_param = Some("alpha");
        }
        self.alpha = Some(alpha);
        self
    }

    /// Set the trend smoothing constant (default 0.1).
    pub fn beta(mut self, beta: T) -> Self {
        if self.beta.is_some() {
            self.duplicate_param = Some("beta");
        }
        self.beta = Some(beta);
        self
    }

    /// Set the number of future periods to forecast (default 1).
    pub fn horizon(mut self, periods: usize) -> Self {
        if self.horizon.is_some() {
            self.duplicate_param = Some("horizon");
        }
        self.horizon = Some(periods);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the forecaster.
    ///
    /// Defaults are applied here: alpha 0.2, beta 0.1, horizon 1. The
    /// coefficient ranges are deliberately not checked.
    pub fn build(self) -> Result<HoltForecaster<T>, ForecastError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let executor = HoltExecutor::new();
        let executor = match self.alpha {
            Some(alpha) => executor.alpha(alpha),
            None => executor,
        };
        let executor = match self.beta {
            Some(beta) => executor.beta(beta),
            None => executor,
        };

        Ok(HoltForecaster {
            executor,
            horizon: self.horizon.unwrap_or(1),
        })
    }
}

// ============================================================================
// Forecaster
// ============================================================================

/// Configured Holt forecaster.
#[derive(Debug, Clone, Copy)]
pub struct HoltForecaster<T: Float> {
    executor: HoltExecutor<T>,
    horizon: usize,
}

impl<T: Float> HoltForecaster<T> {
    /// Forecast future demand from a historical series.
    ///
    /// `data` is chronological, oldest first. Returns one forecast per
    /// configured horizon period, or an error if the history is shorter
    /// than two observations.
    pub fn forecast(&self, data: &[T]) -> Result<ForecastOutput<T>, ForecastError> {
        self.executor.run(data, self.horizon)
    }

    /// Normalize a source and forecast future demand from it.
    pub fn forecast_source<S>(&self, source: &S) -> Result<ForecastOutput<T>, ForecastError>
    where
        S: SeriesSource<T>,
    {
        let series = source.normalize()?;
        self.forecast(&series)
    }

    /// The level smoothing constant in use.
    pub fn alpha(&self) -> T {
        self.executor.alpha
    }

    /// The trend smoothing constant in use.
    pub fn beta(&self) -> T {
        self.executor.beta
    }

    /// The configured forecast horizon.
    pub fn horizon(&self) -> usize {
        self.horizon
    }
}
