//! Error types for demand forecasting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while normalizing
//! historical input and running the forecasting engine, including missing
//! tabular fields, short histories, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required counts).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **History validation**: Fewer than two observations leaves the smoother
//!    state undefined, so the engine reports instead of computing.
//! 2. **Tabular validation**: A named month field and value field are required,
//!    along with a minimum record count.
//! 3. **Lenient parsing is not an error**: Unparsable or negative cell values
//!    clamp to zero and never surface here.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for demand forecasting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// History is too short to seed the smoother; at least one pair of
    /// consecutive observations is needed to compute an initial trend.
    InsufficientHistory {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        min: usize,
    },

    /// A required named field is absent from a tabular source.
    MissingField {
        /// Name of the missing field, as configured by the caller.
        field: String,
    },

    /// A tabular source holds fewer records than a full year of history.
    InsufficientRecords {
        /// Number of records provided.
        got: usize,
        /// Minimum required records.
        min: usize,
    },

    /// A manual-entry slot index is outside the fixed slot range.
    SlotOutOfRange {
        /// The slot index provided.
        index: usize,
        /// Number of slots in the form.
        slots: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ForecastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InsufficientHistory { got, min } => {
                write!(
                    f,
                    "Insufficient history: got {got} observations, need at least {min}"
                )
            }
            Self::MissingField { field } => {
                write!(f, "Missing required field: '{field}'")
            }
            Self::InsufficientRecords { got, min } => {
                write!(f, "Insufficient records: got {got}, need at least {min}")
            }
            Self::SlotOutOfRange { index, slots } => {
                write!(
                    f,
                    "Slot index {index} is out of range (form has {slots} slots)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ForecastError {}
