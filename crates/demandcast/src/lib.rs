//! # demandcast — Retail Demand Forecasting for Rust
//!
//! Monthly demand forecasting via Holt's double exponential smoothing,
//! together with the input-normalization rules that feed it: lenient
//! locale-aware numeric parsing, fixed twelve-slot manual entry, and
//! named-field tabular ingestion.
//!
//! ## What is Holt's method?
//!
//! Holt's linear (double exponential) smoothing extends simple exponential
//! smoothing with a trend component. It maintains two smoothed estimates —
//! a baseline *level* and a per-period *trend* — and updates both with each
//! observation:
//!
//! ```text
//! Level:   L_t = α x_t + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:   T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! ```
//!
//! This crate's extrapolation folds every emitted forecast back through the
//! same recursion as if it had been observed, which projects demand forward
//! by a constant step equal to the terminal trend.
//!
//! ## Quick Start
//!
//! ```rust
//! use demandcast::prelude::*;
//!
//! // Twelve months of unit demand for one article, oldest first.
//! let history = vec![
//!     120.0, 132.0, 98.0, 110.0, 125.0, 140.0,
//!     151.0, 160.0, 149.0, 155.0, 170.0, 180.0,
//! ];
//!
//! // Build the model
//! let model = Holt::new()
//!     .alpha(0.2)     // level smoothing constant
//!     .beta(0.1)      // trend smoothing constant
//!     .horizon(6)     // forecast 6 future months
//!     .build()?;
//!
//! // Forecast future demand
//! let result = model.forecast(&history)?;
//!
//! assert_eq!(result.horizon(), 6);
//! println!("{}", result);
//! # Result::<(), ForecastError>::Ok(())
//! ```
//!
//! ## Normalizing raw input
//!
//! Historical series rarely arrive clean. Two sources are supported, with
//! file input preferred over manual entry:
//!
//! ```rust
//! use demandcast::prelude::*;
//!
//! // Manual entry: one raw text value per month slot. Commas are accepted
//! // as decimal separators; unparsable or negative entries clamp to zero.
//! let mut form = ManualEntryForm::new();
//! form.set_slot(0, "120")?;
//! form.set_slot(1, "132,5")?;
//! form.set_slot(2, "n/a")?;
//!
//! let series: Vec<f64> = form.normalize()?;
//! assert_eq!(series.len(), 12);
//! assert_eq!(series[1], 132.5);
//! assert_eq!(series[2], 0.0);
//! # Result::<(), ForecastError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! The `forecast` method returns a `Result<ForecastOutput<T>, ForecastError>`.
//!
//! - **`Ok(ForecastOutput<T>)`**: Contains the forecasts and terminal state.
//! - **`Err(ForecastError)`**: Indicates a failure (e.g., fewer than two
//!   historical observations, a missing field in a tabular source).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use demandcast::prelude::*;
//! # let history = vec![10.0, 12.0, 14.0, 16.0];
//!
//! let model = Holt::new().build()?;
//! let result = model.forecast(&history)?;
//! # Result::<(), ForecastError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! demandcast = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Holt, C.C. (1957). "Forecasting Seasonals and Trends by Exponentially
//!   Weighted Moving Averages", ONR Memo 52.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, parsing, and smoother state.
mod primitives;

// Layer 2: Engine - validation, execution, and output types.
mod engine;

// Layer 3: Adapters - input-normalization sources.
mod adapters;

// High-level fluent API for demand forecasting.
mod api;

// Standard demandcast prelude.
pub mod prelude {
    pub use crate::api::{
        ForecastError, ForecastOutput, HoltBuilder as Holt, HoltForecaster, ManualEntryForm,
        SeriesSource, TabularSource, HISTORY_MONTHS,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
