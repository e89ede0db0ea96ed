//! Manual entry adapter for per-month demand input.
//!
//! ## Purpose
//!
//! This module provides the fallback input path: a request-scoped form with
//! exactly twelve fixed slots, one raw text value per calendar month. It is
//! used when no tabular artifact is available or the artifact was rejected.
//!
//! ## Design notes
//!
//! * **Request-scoped**: A form is created per forecasting request and
//!   discarded afterward; `reset` restores every slot explicitly rather
//!   than relying on any shared state.
//! * **Total**: Normalization never fails on content. Unparsable, negative,
//!   or blank slots clamp to zero via the shared parsing primitive.
//! * **Order-preserving**: The output always holds exactly twelve values in
//!   slot order.
//!
//! ## Invariants
//!
//! * The form always holds exactly `HISTORY_MONTHS` slots.
//! * Normalized output length always equals `HISTORY_MONTHS`.
//!
//! ## Non-goals
//!
//! * This adapter does not reject all-zero series; whether a series carries
//!   enough signal to forecast is decided by the caller before invoking the
//!   engine.
//! * This adapter does not label slots with month names.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::{SeriesSource, HISTORY_MONTHS};
use crate::engine::validator::Validator;
use crate::primitives::errors::ForecastError;
use crate::primitives::parsing::parse_value;

// ============================================================================
// Manual Entry Form
// ============================================================================

/// Request-scoped form holding one raw text value per month slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntryForm {
    slots: Vec<String>,
}

impl Default for ManualEntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualEntryForm {
    /// Create a form with all twelve slots blank.
    pub fn new() -> Self {
        Self {
            slots: vec![String::new(); HISTORY_MONTHS],
        }
    }

    /// Number of slots in the form.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Set the raw text value of one slot.
    ///
    /// Slot 0 is the oldest month. Returns an error if `index` is outside
    /// the fixed slot range.
    pub fn set_slot(&mut self, index: usize, raw: &str) -> Result<(), ForecastError> {
        Validator::validate_slot_index(index, self.slots.len())?;
        self.slots[index] = String::from(raw);
        Ok(())
    }

    /// The raw text value of one slot, if the index is in range.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Restore every slot to blank.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

impl<T: Float> SeriesSource<T> for ManualEntryForm {
    /// Normalize the form into exactly twelve values in slot order.
    ///
    /// Each raw value goes through the lenient parsing primitive; blank and
    /// unreadable slots become zero. This path never fails on content.
    fn normalize(&self) -> Result<Vec<T>, ForecastError> {
        Ok(self.slots.iter().map(|raw| parse_value(raw)).collect())
    }
}
