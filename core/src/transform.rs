//! Log-log transformation of the amplitude spectrum
//!
//! Maps (k, A_k) pairs into (log10 k, log10 A_k) space for the power-law
//! fit. Points with k = 0 or a non-positive amplitude have no logarithm and
//! are dropped, so the regression input is always finite.

use serde::{Deserialize, Serialize};

use crate::fourier::FourierCoefficient;

/// One point of the log-log spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogLogPoint {
    /// log10 of the frequency index k
    pub x: f64,
    /// log10 of the amplitude A_k
    pub y: f64,
}

/// Transform coefficients into log-log points, dropping unloggable entries.
pub fn to_log_log(coefficients: &[FourierCoefficient]) -> Vec<LogLogPoint> {
    coefficients
        .iter()
        .filter(|c| c.k > 0 && c.amplitude > 0.0)
        .map(|c| LogLogPoint {
            x: (c.k as f64).log10(),
            y: c.amplitude.log10(),
        })
        .collect()
}
