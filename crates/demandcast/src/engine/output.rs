//! Output types and result structures for forecasting operations.
//!
//! ## Purpose
//!
//! This module defines the `ForecastOutput` struct which encapsulates the
//! outputs of one forecast invocation: the extrapolated values and the
//! terminal smoother state they were projected from.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Traceability**: The smoothing constants used are carried alongside
//!   the forecasts.
//!
//! ## Invariants
//!
//! * `forecasts` is chronologically ordered, starting the period after the
//!   last historical observation.
//! * `level` and `trend` are the terminal state as of the last historical
//!   observation, before any extrapolation.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not map forecast indices to calendar labels.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Forecast output containing extrapolated values and terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutput<T> {
    /// Forecast values, one per future period, in chronological order.
    pub forecasts: Vec<T>,

    /// Terminal level as of the last historical observation.
    pub level: T,

    /// Terminal trend as of the last historical observation.
    pub trend: T,

    /// Level smoothing constant used for the fit.
    pub alpha: T,

    /// Trend smoothing constant used for the fit.
    pub beta: T,
}

impl<T: Float> ForecastOutput<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of forecast periods produced.
    pub fn horizon(&self) -> usize {
        self.forecasts.len()
    }

    /// Check if the forecast is empty (a zero-period horizon).
    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    /// The terminal `(level, trend)` pair the forecasts project from.
    pub fn terminal_state(&self) -> (T, T) {
        (self.level, self.trend)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ForecastOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Horizon:        {}", self.horizon())?;
        writeln!(f, "  Alpha:          {}", self.alpha)?;
        writeln!(f, "  Beta:           {}", self.beta)?;
        writeln!(f, "  Terminal level: {:.6}", self.level)?;
        writeln!(f, "  Terminal trend: {:.6}", self.trend)?;
        writeln!(f)?;

        writeln!(f, "Forecasts:")?;
        writeln!(f, "{:>8} {:>12}", "Period", "Forecast")?;
        writeln!(f, "{:-<width$}", "", width = 21)?;

        for (i, value) in self.forecasts.iter().enumerate() {
            writeln!(f, "{:>8} {:>12.4}", i + 1, value)?;
        }

        Ok(())
    }
}
