//! Layer 3: Adapters
//!
//! # Purpose
//!
//! This layer shapes raw historical input into a clean numeric series for
//! the engine. Two sources are supported, with file input preferred over
//! manual entry:
//!
//! - **Tabular**: A named-field tabular artifact (an uploaded spreadsheet).
//! - **Manual**: A request-scoped form with twelve fixed month slots.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ForecastError;

/// Manual entry form with fixed month slots.
pub mod manual;

/// Named-field tabular sources.
pub mod tabular;

/// Number of months in a full year of history.
pub const HISTORY_MONTHS: usize = 12;

/// Trait for sources that can be normalized into a historical series.
///
/// A source yields an ordered, chronological sequence of non-negative
/// demand quantities, ready for the smoother.
pub trait SeriesSource<T: Float> {
    /// Normalize the source into a historical series.
    fn normalize(&self) -> Result<Vec<T>, ForecastError>;
}
