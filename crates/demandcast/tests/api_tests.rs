//! Tests for the high-level forecasting API.
//!
//! These tests exercise the public builder and forecaster surface:
//! - Builder defaults and duplicate-parameter rejection
//! - Degenerate histories and the zero-period horizon
//! - The extrapolation law and pinned regression values
//! - Purity of repeated invocations
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults and misuse
//! 2. **Degenerate Input** - Short histories, empty horizons
//! 3. **Forecast Semantics** - Constant, linear, and irregular series
//! 4. **Purity** - Identical inputs produce identical outputs

use approx::assert_relative_eq;
use demandcast::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn irregular_demand() -> Vec<f64> {
    vec![
        120.0, 132.0, 98.0, 110.0, 125.0, 140.0, 151.0, 160.0, 149.0, 155.0, 170.0, 180.0,
    ]
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
///
/// Verifies that alpha, beta, and horizon default to 0.2, 0.1, and 1.
#[test]
fn test_builder_defaults() {
    let model = Holt::<f64>::new().build().unwrap();

    assert_eq!(model.alpha(), 0.2, "Default alpha should be 0.2");
    assert_eq!(model.beta(), 0.1, "Default beta should be 0.1");
    assert_eq!(model.horizon(), 1, "Default horizon should be 1");
}

/// Test duplicate parameter rejection.
///
/// Verifies that setting the same parameter twice fails at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let res = Holt::<f64>::new().alpha(0.2).alpha(0.3).build();

    assert!(
        matches!(
            res,
            Err(ForecastError::DuplicateParameter { parameter: "alpha" })
        ),
        "Duplicate alpha should error"
    );

    let res = Holt::<f64>::new().horizon(3).horizon(6).build();
    assert!(
        matches!(
            res,
            Err(ForecastError::DuplicateParameter {
                parameter: "horizon"
            })
        ),
        "Duplicate horizon should error"
    );
}

/// Test that coefficient ranges are not validated.
///
/// Verifies that out-of-convention alpha/beta are accepted; their range is
/// a caller responsibility.
#[test]
fn test_builder_accepts_unconventional_coefficients() {
    let model = Holt::new().alpha(1.5).beta(-0.2).build().unwrap();
    let result = model.forecast(&irregular_demand());

    assert!(result.is_ok(), "Engine should not range-check coefficients");
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test short histories report instead of computing.
///
/// Verifies that empty and single-point series return InsufficientHistory
/// for any coefficients and horizon.
#[test]
fn test_insufficient_history() {
    for (alpha, beta, horizon) in [(0.2, 0.1, 1), (0.5, 0.5, 12), (0.9, 0.05, 0)] {
        let model = Holt::new()
            .alpha(alpha)
            .beta(beta)
            .horizon(horizon)
            .build()
            .unwrap();

        assert!(
            matches!(
                model.forecast(&[]),
                Err(ForecastError::InsufficientHistory { got: 0, min: 2 })
            ),
            "Empty history should error"
        );
        assert!(
            matches!(
                model.forecast(&[42.0]),
                Err(ForecastError::InsufficientHistory { got: 1, min: 2 })
            ),
            "Single-point history should error"
        );
    }
}

/// Test the minimal viable history.
///
/// Verifies that exactly two observations are enough to forecast.
#[test]
fn test_two_point_history() {
    let model = Holt::new().horizon(2).build().unwrap();
    let result = model.forecast(&[10.0, 15.0]).unwrap();

    assert_eq!(result.horizon(), 2, "Two points should be sufficient");
}

/// Test the zero-period horizon.
///
/// Verifies that a zero horizon yields an empty forecast for any valid
/// history, while the terminal state is still reported.
#[test]
fn test_zero_horizon() {
    let model = Holt::new().horizon(0).build().unwrap();
    let result = model.forecast(&irregular_demand()).unwrap();

    assert!(result.is_empty(), "Zero horizon should yield no forecasts");
    assert_eq!(result.horizon(), 0);
    assert!(result.level.is_finite(), "Terminal state is still produced");
}

// ============================================================================
// Forecast Semantics Tests
// ============================================================================

/// Test a constant series.
///
/// Verifies that twelve equal values produce a zero terminal trend and
/// forecasts exactly equal to the constant.
#[test]
fn test_constant_series() {
    let model = Holt::new().alpha(0.2).beta(0.1).horizon(3).build().unwrap();
    let result = model.forecast(&[10.0; 12]).unwrap();

    assert_eq!(
        result.forecasts,
        vec![10.0, 10.0, 10.0],
        "Constant series should forecast the constant exactly"
    );
    assert_eq!(result.level, 10.0, "Terminal level should be exactly c");
    assert_eq!(result.trend, 0.0, "Terminal trend should be exactly 0");
}

/// Test a strictly linear series.
///
/// A perfectly linear series is a fixed point of the recursion, so the
/// terminal state lands exactly on the last observation and the common
/// difference; the regression values are pinned literals.
#[test]
fn test_linear_series_pinned() {
    let data: Vec<f64> = (0..12).map(|i| 100.0 + 5.0 * i as f64).collect();

    let model = Holt::new().alpha(0.2).beta(0.1).horizon(3).build().unwrap();
    let result = model.forecast(&data).unwrap();

    assert_eq!(result.level, 155.0, "Pinned terminal level");
    assert_eq!(result.trend, 5.0, "Pinned terminal trend");
    assert_eq!(result.forecasts, vec![160.0, 165.0, 170.0]);
}

/// Test an irregular series against pinned values.
///
/// Verifies the full recursion against precomputed literals for a
/// realistic demand series.
#[test]
fn test_irregular_series_pinned() {
    let model = Holt::new().alpha(0.2).beta(0.1).horizon(6).build().unwrap();
    let result = model.forecast(&irregular_demand()).unwrap();

    assert_relative_eq!(result.level, 186.41949101831045, epsilon = 1e-12);
    assert_relative_eq!(result.trend, 7.7995914386136835, epsilon = 1e-12);
    assert_relative_eq!(result.forecasts[0], 194.21908245692413, epsilon = 1e-12);
    assert_relative_eq!(result.forecasts[5], 233.21703964999256, epsilon = 1e-12);
}

/// Test the extrapolation law.
///
/// Feeding each forecast back through the recursion projects demand by a
/// constant step: forecast[k] must equal level + (k+1) * trend from the
/// terminal state, up to floating-point rounding.
#[test]
fn test_extrapolation_law() {
    let model = Holt::new().horizon(12).build().unwrap();
    let result = model.forecast(&irregular_demand()).unwrap();

    let (level, trend) = result.terminal_state();
    for (k, &forecast) in result.forecasts.iter().enumerate() {
        assert_relative_eq!(
            forecast,
            level + (k as f64 + 1.0) * trend,
            epsilon = 1e-9
        );
    }
}

/// Test horizon consistency.
///
/// Verifies that shorter horizons are prefixes of longer ones: the fit
/// depends only on the history, never on the horizon.
#[test]
fn test_horizon_prefix_consistency() {
    let history = irregular_demand();

    let short = Holt::new().horizon(3).build().unwrap();
    let long = Holt::new().horizon(12).build().unwrap();

    let short_result = short.forecast(&history).unwrap();
    let long_result = long.forecast(&history).unwrap();

    assert_eq!(
        &short_result.forecasts[..],
        &long_result.forecasts[..3],
        "Shorter horizon should be a prefix of the longer one"
    );
    assert_eq!(short_result.terminal_state(), long_result.terminal_state());
}

/// Test single-precision support.
///
/// Verifies the engine is generic over float width.
#[test]
fn test_f32_forecast() {
    let history: Vec<f32> = vec![10.0; 12];
    let model = Holt::<f32>::new().horizon(2).build().unwrap();
    let result = model.forecast(&history).unwrap();

    assert_eq!(result.forecasts, vec![10.0f32, 10.0]);
}

// ============================================================================
// Purity Tests
// ============================================================================

/// Test idempotence.
///
/// Verifies that identical inputs produce identical outputs; no state
/// survives between invocations.
#[test]
fn test_forecast_is_pure() {
    let history = irregular_demand();
    let model = Holt::new().alpha(0.2).beta(0.1).horizon(6).build().unwrap();

    let first = model.forecast(&history).unwrap();
    let second = model.forecast(&history).unwrap();

    assert_eq!(first, second, "Repeated invocations must match exactly");
}

/// Test forecasting from a normalized source.
///
/// Verifies the end-to-end path from a tabular artifact to forecasts.
#[test]
fn test_forecast_source_end_to_end() {
    let rows: Vec<Vec<String>> = (1..=12)
        .map(|m| vec![format!("M{m}"), format!("{}", 100 + m)])
        .collect();
    let source = TabularSource::new(vec!["month", "value"], rows);

    let model = Holt::<f64>::new().horizon(3).build().unwrap();
    let result = model.forecast_source(&source).unwrap();

    assert_eq!(result.horizon(), 3);
    // Strictly linear input (101..=112): the projection continues the line.
    assert_eq!(result.forecasts, vec![113.0, 114.0, 115.0]);
}
