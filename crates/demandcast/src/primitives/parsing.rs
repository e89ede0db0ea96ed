//! Lenient numeric parsing for raw input cells.
//!
//! ## Purpose
//!
//! This module normalizes one raw text value into a usable demand quantity.
//! Input arrives from spreadsheet cells or manual form entry, where decimal
//! commas, stray whitespace, and plain garbage are all routine.
//!
//! ## Design notes
//!
//! * **Best-effort**: Parse failures clamp to zero rather than erroring; a
//!   blank month and an unreadable month are treated the same way.
//! * **Locale-aware**: A comma is substituted with a period before parsing,
//!   so `"132,5"` reads as `132.5`.
//! * **Non-negative**: Demand quantities cannot be negative; negative parses
//!   clamp to zero. Non-finite parses (`"inf"`, `"NaN"`) clamp as well.
//!
//! ## Non-goals
//!
//! * This module does not report which values were clamped.
//! * This module does not handle thousands separators.

// External dependencies
use num_traits::Float;

// ============================================================================
// Parsing Functions
// ============================================================================

/// Normalize one raw text value into a non-negative demand quantity.
///
/// The raw text is trimmed and any comma decimal separator is substituted
/// with a period before parsing. Anything that fails to parse, parses
/// negative, or parses non-finite yields zero.
pub fn parse_value<T: Float>(raw: &str) -> T {
    let cleaned = raw.trim().replace(',', ".");

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            T::from(value).unwrap_or_else(T::zero)
        }
        _ => T::zero(),
    }
}
