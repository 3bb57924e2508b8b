//! Error types for the metabolic criticality analyzer

use thiserror::Error;

/// Failures raised by the computation pipeline.
///
/// Every failure is synchronous and local to the call that raised it; the
/// same inputs always reproduce the same error, so nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Sex value outside the two recognized categories.
    #[error("invalid category: {0:?} (expected \"male\" or \"female\")")]
    InvalidCategory(String),

    /// Zero-length data series where at least one sample is required.
    #[error("series is empty")]
    EmptySeries,

    /// Zero-length value sequence where at least one value is required.
    #[error("input is empty")]
    EmptyInput,

    /// Paired sequences of mismatched length, or too few points.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Zero denominator or zero variance; no line or correlation exists.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
