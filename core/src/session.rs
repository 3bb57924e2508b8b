//! Analysis session assembly
//!
//! Runs the whole pipeline eagerly in one call: expenditure series →
//! amplitude spectrum → log-log points → power-law regression. The session
//! value is immutable; when any input changes the caller computes a fresh
//! session and replaces the old one wholesale. Cheap at realistic N (tens
//! to low hundreds of days), so no incremental update path exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::Result;
use crate::fourier::{self, FourierCoefficient};
use crate::metabolic::{self, BiometricProfile, DayRecord, ExerciseSeries};
use crate::statistics::{self, RegressionResult};
use crate::transform::{self, LogLogPoint};

/// Tunable knobs for one pipeline run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Highest frequency index to extract (clamped to the series length)
    pub max_k: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { max_k: 5 }
    }
}

/// Immutable result of one complete pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSession {
    pub id: Uuid,
    pub computed_at: DateTime<Utc>,
    /// Inputs the session was computed from
    pub profile: BiometricProfile,
    /// Basal metabolic rate, constant across the session's days
    pub bmr: f64,
    /// Per-day expenditure breakdown, day 1 first
    pub days: Vec<DayRecord>,
    /// Coefficient triples for k = 1..=effective max_k
    pub spectrum: Vec<FourierCoefficient>,
    /// Log-log points surviving the positivity guard
    pub points: Vec<LogLogPoint>,
    /// Power-law fit; `None` when fewer than two points survive the guard
    pub regression: Option<RegressionResult>,
}

impl AnalysisSession {
    /// Run the full pipeline over a profile and exercise series.
    ///
    /// Any stage failure propagates before a session value exists, so a
    /// caller never observes a partially-filled result.
    pub fn compute(
        profile: BiometricProfile,
        series: &ExerciseSeries,
        options: AnalysisOptions,
    ) -> Result<AnalysisSession> {
        let bmr = profile.bmr();
        let expenditure = metabolic::daily_expenditure(&profile, series);
        debug!(days = expenditure.len(), bmr, "computed expenditure series");

        let max_k = options.max_k.min(series.len());
        let spectrum = fourier::spectrum(expenditure.as_slice(), max_k)?;
        debug!(max_k, coefficients = spectrum.len(), "extracted spectrum");

        let points = transform::to_log_log(&spectrum);
        debug!(
            kept = points.len(),
            dropped = spectrum.len() - points.len(),
            "log-log transform"
        );

        let regression = if points.len() >= 2 {
            let fit = statistics::regression(&points)?;
            debug!(slope = fit.slope, correlation = fit.correlation, "fitted power law");
            Some(fit)
        } else {
            debug!(points = points.len(), "too few points for regression");
            None
        };

        Ok(AnalysisSession {
            id: Uuid::new_v4(),
            computed_at: Utc::now(),
            profile,
            bmr,
            days: metabolic::day_records(&profile, series),
            spectrum,
            points,
            regression,
        })
    }
}
