//! Discrete Fourier coefficient extraction
//!
//! Direct O(N·K) cosine/sine summation over the daily expenditure series —
//! intentionally not an FFT, since N is bounded by calendar size (tens to
//! low hundreds of days).
//!
//! Indexing convention: the angle term is θ(n) = 2π·k·n/N with n 0-indexed
//! over [0, N), and the (2/N) normalization applies to every k including the
//! DC term (so A_0 = 2 × mean). The same convention is used everywhere in
//! this crate; amplitudes and the log-log slope are only meaningful because
//! it never varies.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{AnalysisError, Result};

/// Coefficient triple for one frequency index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourierCoefficient {
    /// Frequency index
    pub k: usize,
    /// Cosine coefficient a_k
    pub a: f64,
    /// Sine coefficient b_k
    pub b: f64,
    /// Amplitude A_k = sqrt(a_k² + b_k²), always non-negative
    pub amplitude: f64,
}

/// One row of the per-sample worksheet for a single frequency index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourierTerm {
    /// Sample index n (0-based, day n+1)
    pub n: usize,
    /// Series value x[n]
    pub x: f64,
    /// cos θ(n)
    pub cos_term: f64,
    /// sin θ(n)
    pub sin_term: f64,
    /// x[n] · cos θ(n)
    pub x_cos: f64,
    /// x[n] · sin θ(n)
    pub x_sin: f64,
}

/// Calculate the coefficient triple (a_k, b_k, A_k) for one frequency index.
///
/// a_k = (2/N) Σ x[n]·cos(2πkn/N), b_k likewise with sin, n over [0, N).
/// Fails with [`AnalysisError::EmptySeries`] when the series has no samples.
pub fn coefficients(series: &[f64], k: usize) -> Result<FourierCoefficient> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }

    let n_total = series.len() as f64;
    let mut sum_a = 0.0;
    let mut sum_b = 0.0;
    for (n, &x) in series.iter().enumerate() {
        let angle = 2.0 * PI * k as f64 * n as f64 / n_total;
        sum_a += x * angle.cos();
        sum_b += x * angle.sin();
    }

    let a = (2.0 / n_total) * sum_a;
    let b = (2.0 / n_total) * sum_b;
    Ok(FourierCoefficient {
        k,
        a,
        b,
        amplitude: (a * a + b * b).sqrt(),
    })
}

/// Calculate coefficients for k = 1..=max_k, in order.
///
/// The DC term (k = 0) is excluded here; use [`full_spectrum`] when it is
/// needed.
pub fn spectrum(series: &[f64], max_k: usize) -> Result<Vec<FourierCoefficient>> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    (1..=max_k).map(|k| coefficients(series, k)).collect()
}

/// Calculate the full half-spectrum, k = 0..=N/2 including the DC term.
pub fn full_spectrum(series: &[f64]) -> Result<Vec<FourierCoefficient>> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    (0..=series.len() / 2)
        .map(|k| coefficients(series, k))
        .collect()
}

/// Build the per-sample worksheet for one frequency index.
///
/// Summing the `x_cos` / `x_sin` columns and scaling by 2/N reproduces the
/// a_k / b_k from [`coefficients`].
pub fn term_table(series: &[f64], k: usize) -> Result<Vec<FourierTerm>> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }

    let n_total = series.len() as f64;
    let rows = series
        .iter()
        .enumerate()
        .map(|(n, &x)| {
            let angle = 2.0 * PI * k as f64 * n as f64 / n_total;
            let cos_term = angle.cos();
            let sin_term = angle.sin();
            FourierTerm {
                n,
                x,
                cos_term,
                sin_term,
                x_cos: x * cos_term,
                x_sin: x * sin_term,
            }
        })
        .collect();
    Ok(rows)
}
