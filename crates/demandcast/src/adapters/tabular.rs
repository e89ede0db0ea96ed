//! Tabular adapter for uploaded demand history.
//!
//! ## Purpose
//!
//! This module provides the preferred input path: a tabular artifact (an
//! uploaded spreadsheet or delimited file, already split into header and
//! rows by the caller) carrying a month-label field and a value field.
//!
//! ## Design notes
//!
//! * **Named fields**: The month and value fields are located by name, not
//!   position. Field names are configurable; header matching normalizes
//!   case, surrounding whitespace, and embedded line breaks, since exported
//!   spreadsheet headers routinely carry all three.
//! * **Row order is trusted**: The leading twelve records are taken in file
//!   order, with no re-sorting by the month label. A mis-ordered artifact
//!   therefore yields a mis-fitted trend; callers own row order.
//! * **Lenient cells**: Value cells go through the shared parsing
//!   primitive; unreadable or negative cells clamp to zero. Missing cells
//!   in short rows normalize like blank ones.
//!
//! ## Invariants
//!
//! * Normalized output length always equals `HISTORY_MONTHS`.
//! * The month field must be present even though it never affects ordering.
//!
//! ## Non-goals
//!
//! * This adapter does not parse file formats; the caller supplies header
//!   and rows as text.
//! * This adapter does not validate month labels against a calendar.

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
// Default Field Names
// ============================================================================

/// Default name of the month-label field.
pub const DEFAULT_MONTH_FIELD: &str = "month";

/// Default name of the value field.
pub const DEFAULT_VALUE_FIELD: &str = "value";

// ============================================================================
// Tabular Source
// ============================================================================

/// A tabular artifact with named columns and rows of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularSource {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    month_field: String,
    value_field: String,
}

impl TabularSource {
    /// Create a source from a header row and data rows.
    ///
    /// Field names default to [`DEFAULT_MONTH_FIELD`] and
    /// [`DEFAULT_VALUE_FIELD`]; override them with [`Self::month_field`]
    /// and [`Self::value_field`].
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            month_field: String::from(DEFAULT_MONTH_FIELD),
            value_field: String::from(DEFAULT_VALUE_FIELD),
        }
    }

    /// Set the name of the month-label field.
    pub fn month_field(mut self, name: &str) -> Self {
        self.month_field = String::from(name);
        self
    }

    /// Set the name of the value field.
    pub fn value_field(mut self, name: &str) -> Self {
        self.value_field = String::from(name);
        self
    }

    /// Number of data records in the source.
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    // ========================================================================
    // Field Lookup
    // ========================================================================

    /// Locate a field by normalized name.
    fn field_index(&self, name: &str) -> Result<usize, ForecastError> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|header| normalize_header(header) == wanted)
            .ok_or_else(|| ForecastError::MissingField {
                field: String::from(name),
            })
    }
}

impl<T: Float> SeriesSource<T> for TabularSource {
    /// Normalize the leading twelve records into a historical series.
    ///
    /// Both named fields must be present and the source must hold at least
    /// twelve records; otherwise the condition is reported and no series is
    /// produced, leaving the caller to fall back to manual entry.
    fn normalize(&self) -> Result<Vec<T>, ForecastError> {
        // The month field is required even though row order is trusted as
        // chronological.
        self.field_index(&self.month_field)?;
        let value_idx = self.field_index(&self.value_field)?;

        Validator::validate_record_count(self.rows.len(), HISTORY_MONTHS)?;

        Ok(self
            .rows
            .iter()
            .take(HISTORY_MONTHS)
            .map(|row| parse_value(row.get(value_idx).map(String::as_str).unwrap_or("")))
            .collect())
    }
}

// ============================================================================
// Header Normalization
// ============================================================================

/// Normalize a header cell for name matching.
///
/// Embedded line breaks become spaces, surrounding whitespace is trimmed,
/// and the result is lowercased.
fn normalize_header(raw: &str) -> String {
    raw.replace('\n', " ").trim().to_lowercase()
}
