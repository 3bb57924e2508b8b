//! Descriptive statistics, OLS regression, and Pearson correlation
//!
//! Operates on the log-log spectrum points to fit the power-law trend, and
//! on arbitrary paired series for the exercise-vs-expenditure association
//! view. Population (1/N) formulas throughout; covariance uses centered
//! sums, matching the standard-deviation computation so correlation stays
//! in [-1, 1] up to rounding.

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};
use crate::transform::LogLogPoint;

/// Full OLS fit over a log-log point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// OLS slope (the power-law exponent alpha)
    pub slope: f64,
    /// OLS intercept (log10 of the power-law prefactor)
    pub intercept: f64,
    /// Pearson correlation coefficient r
    pub correlation: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    pub std_dev_x: f64,
    pub std_dev_y: f64,
}

/// Descriptive statistics over two paired series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedStats {
    pub mean_x: f64,
    pub mean_y: f64,
    /// Population variance of x
    pub variance_x: f64,
    /// Population variance of y
    pub variance_y: f64,
    /// Pearson correlation between x and y
    pub correlation: f64,
    pub xy_sum: f64,
    pub x2_sum: f64,
    pub y2_sum: f64,
}

/// Arithmetic mean. Fails with [`AnalysisError::EmptyInput`] on empty input.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation, sqrt(Σ(x − mean)² / N).
pub fn std_dev(values: &[f64], mean: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let variance =
        values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

fn check_paired(x: &[f64], y: &[f64], min_len: usize) -> Result<usize> {
    if x.len() != y.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "paired series lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < min_len {
        return Err(AnalysisError::InvalidInput(format!(
            "need at least {} points, got {}",
            min_len,
            x.len()
        )));
    }
    Ok(x.len())
}

/// OLS slope, (N·Σxy − Σx·Σy) / (N·Σx² − (Σx)²).
///
/// Fails with [`AnalysisError::DegenerateInput`] when the denominator is
/// exactly zero (all x identical, vertical line).
pub fn regression_slope(x: &[f64], y: &[f64]) -> Result<f64> {
    let n = check_paired(x, y, 1)? as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(AnalysisError::DegenerateInput(
            "zero variance in x, regression line is vertical".to_string(),
        ));
    }
    Ok((n * sum_xy - sum_x * sum_y) / denominator)
}

/// OLS intercept, mean(y) − slope·mean(x).
pub fn regression_intercept(x: &[f64], y: &[f64], slope: f64) -> Result<f64> {
    check_paired(x, y, 1)?;
    Ok(mean(y)? - slope * mean(x)?)
}

/// Pearson correlation coefficient via centered sums.
///
/// Requires at least two points; fails with
/// [`AnalysisError::DegenerateInput`] when either series has zero variance.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    let n = check_paired(x, y, 2)? as f64;

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let dx2: f64 = x.iter().map(|a| (a - mean_x) * (a - mean_x)).sum();
    let dy2: f64 = y.iter().map(|a| (a - mean_y) * (a - mean_y)).sum();
    if dx2 == 0.0 || dy2 == 0.0 {
        return Err(AnalysisError::DegenerateInput(
            "zero variance in x or y, correlation undefined".to_string(),
        ));
    }

    let covariance = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>()
        / n;
    Ok(covariance / ((dx2 / n).sqrt() * (dy2 / n).sqrt()))
}

/// Fit the power-law trend over a log-log point set (at least two points).
pub fn regression(points: &[LogLogPoint]) -> Result<RegressionResult> {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();
    check_paired(&x, &y, 2)?;

    let slope = regression_slope(&x, &y)?;
    let intercept = regression_intercept(&x, &y, slope)?;
    let correlation = correlation(&x, &y)?;
    let mean_x = mean(&x)?;
    let mean_y = mean(&y)?;

    Ok(RegressionResult {
        slope,
        intercept,
        correlation,
        mean_x,
        mean_y,
        std_dev_x: std_dev(&x, mean_x)?,
        std_dev_y: std_dev(&y, mean_y)?,
    })
}

/// Descriptive statistics over two paired series (at least two points).
pub fn paired_stats(x: &[f64], y: &[f64]) -> Result<PairedStats> {
    check_paired(x, y, 2)?;

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    let sd_x = std_dev(x, mean_x)?;
    let sd_y = std_dev(y, mean_y)?;

    Ok(PairedStats {
        mean_x,
        mean_y,
        variance_x: sd_x * sd_x,
        variance_y: sd_y * sd_y,
        correlation: correlation(x, y)?,
        xy_sum: x.iter().zip(y).map(|(a, b)| a * b).sum(),
        x2_sum: x.iter().map(|a| a * a).sum(),
        y2_sum: y.iter().map(|a| a * a).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    fn points(x: &[f64], y: &[f64]) -> Vec<LogLogPoint> {
        x.iter()
            .zip(y)
            .map(|(&x, &y)| LogLogPoint { x, y })
            .collect()
    }

    #[test]
    fn test_mean_and_std_dev() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&data).unwrap();
        assert!((m - 5.0).abs() < EPS);
        assert!((std_dev(&data, m).unwrap() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert_eq!(mean(&[]).unwrap_err(), AnalysisError::EmptyInput);
        assert_eq!(std_dev(&[], 0.0).unwrap_err(), AnalysisError::EmptyInput);
        assert!(matches!(
            regression_slope(&[], &[]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(matches!(
            regression_slope(&[1.0, 2.0], &[1.0]),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0], 0.6, 2.2, 0.7746)]
    #[case(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0], 2.0, 1.0, 1.0)]
    #[case(&[0.0, 1.0, 2.0, 3.0], &[7.0, 5.0, 3.0, 1.0], -2.0, 7.0, -1.0)]
    fn test_regression_cases(
        #[case] x: &[f64],
        #[case] y: &[f64],
        #[case] expected_slope: f64,
        #[case] expected_intercept: f64,
        #[case] expected_r: f64,
    ) {
        let slope = regression_slope(x, y).unwrap();
        assert!((slope - expected_slope).abs() < 1e-4);

        let intercept = regression_intercept(x, y, slope).unwrap();
        assert!((intercept - expected_intercept).abs() < 1e-4);

        let r = correlation(x, y).unwrap();
        assert!((r - expected_r).abs() < 1e-4);
    }

    #[test]
    fn test_vertical_line_degenerate() {
        assert!(matches!(
            regression_slope(&[1.0, 1.0, 1.0, 1.0], &[1.0, 2.0, 3.0, 4.0]),
            Err(AnalysisError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_constant_y_correlation_degenerate() {
        assert!(matches!(
            correlation(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]),
            Err(AnalysisError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_correlation_needs_two_points() {
        assert!(matches!(
            correlation(&[1.0], &[2.0]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_regression_batch_over_points() {
        let pts = points(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[2.0, 4.0, 5.0, 4.0, 5.0],
        );
        let fit = regression(&pts).unwrap();
        assert!((fit.slope - 0.6).abs() < 1e-4);
        assert!((fit.intercept - 2.2).abs() < 1e-4);
        assert!((fit.correlation - 0.7746).abs() < 1e-4);
        assert!((fit.mean_x - 3.0).abs() < EPS);
        assert!((fit.mean_y - 4.0).abs() < EPS);
        assert!((fit.std_dev_x - 2.0f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_regression_batch_needs_two_points() {
        let pts = points(&[1.0], &[2.0]);
        assert!(matches!(
            regression(&pts),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_paired_stats_sums() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 7.0];
        let stats = paired_stats(&x, &y).unwrap();
        assert!((stats.mean_x - 2.0).abs() < EPS);
        assert!((stats.xy_sum - (4.0 + 10.0 + 21.0)).abs() < EPS);
        assert!((stats.x2_sum - 14.0).abs() < EPS);
        assert!((stats.y2_sum - 90.0).abs() < EPS);
        assert!(stats.correlation > 0.9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: a noiseless line y = m·x + b is recovered exactly
        #[test]
        fn prop_line_round_trip(
            m in -50.0f64..50.0,
            b in -100.0f64..100.0,
            xs in proptest::collection::btree_set(-1000i32..1000, 2..40)
        ) {
            let x: Vec<f64> = xs.iter().map(|&v| v as f64).collect();
            let y: Vec<f64> = x.iter().map(|&v| m * v + b).collect();

            let slope = regression_slope(&x, &y).unwrap();
            let intercept = regression_intercept(&x, &y, slope).unwrap();
            prop_assert!((slope - m).abs() < 1e-6 * (1.0 + m.abs()));
            prop_assert!((intercept - b).abs() < 1e-5 * (1.0 + b.abs()));
        }

        /// Property: correlation of a non-constant noiseless line is ±1
        #[test]
        fn prop_linear_correlation_is_unit(
            m in 0.01f64..50.0,
            b in -100.0f64..100.0,
            sign in proptest::bool::ANY,
            xs in proptest::collection::btree_set(-1000i32..1000, 2..40)
        ) {
            let m = if sign { m } else { -m };
            let x: Vec<f64> = xs.iter().map(|&v| v as f64).collect();
            let y: Vec<f64> = x.iter().map(|&v| m * v + b).collect();

            let r = correlation(&x, &y).unwrap();
            prop_assert!((r.abs() - 1.0).abs() < 1e-9);
            prop_assert!(r.signum() == m.signum());
        }

        /// Property: correlation always stays within [-1, 1] (up to rounding)
        #[test]
        fn prop_correlation_bounded(
            pairs in proptest::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 2..40)
        ) {
            let x: Vec<f64> = pairs.iter().map(|p| p.0).collect();
            let y: Vec<f64> = pairs.iter().map(|p| p.1).collect();
            if let Ok(r) = correlation(&x, &y) {
                prop_assert!(r.abs() <= 1.0 + 1e-9);
            }
        }
    }
}
