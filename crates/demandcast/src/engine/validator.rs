//! Input validation for forecasting configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for historical series and
//! input-normalization sources. It checks requirements such as minimum
//! history length, record counts, and slot bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Series validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **History Requirements**: Seeding the trend needs one pair of
//!   consecutive observations, so at least 2 points are required.
//! * **Record Requirements**: Tabular sources must carry a full year of
//!   records before the leading twelve are taken.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Smoothing coefficients are never validated here; their range is a
//!   caller responsibility.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or clamp input data.
//! * This module does not perform the smoothing itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ForecastError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for forecasting input data.
///
/// Provides static methods for validating historical series and source
/// shapes. All methods return `Result<(), ForecastError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a historical series for Holt smoothing.
    ///
    /// The initial trend is seeded from the difference of the first two
    /// observations, so anything shorter than 2 points is rejected.
    pub fn validate_history<T: Float>(data: &[T]) -> Result<(), ForecastError> {
        let n = data.len();
        if n < 2 {
            return Err(ForecastError::InsufficientHistory { got: n, min: 2 });
        }
        Ok(())
    }

    // ========================================================================
    // Source Validation
    // ========================================================================

    /// Validate a manual-entry slot index against the fixed slot count.
    pub fn validate_slot_index(index: usize, slots: usize) -> Result<(), ForecastError> {
        if index >= slots {
            return Err(ForecastError::SlotOutOfRange { index, slots });
        }
        Ok(())
    }

    /// Validate the record count of a tabular source.
    pub fn validate_record_count(got: usize, min: usize) -> Result<(), ForecastError> {
        if got < min {
            return Err(ForecastError::InsufficientRecords { got, min });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ForecastError> {
        if let Some(param) = duplicate_param {
            return Err(ForecastError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
