//! Metabolic Criticality Core Library
//!
//! Computes per-day metabolic energy expenditure (Harris-Benedict BMR ×
//! activity factor) from biometric data and daily exercise minutes, extracts
//! discrete Fourier coefficients from the expenditure series, and fits a
//! log-log power-law trend via ordinary least squares.
//!
//! Everything is a pure, synchronous function of caller-supplied data; the
//! presentation layer, file export, and input parsing live outside this
//! crate.

pub mod errors;
pub mod fourier;
pub mod metabolic;
pub mod session;
pub mod statistics;
pub mod transform;

// Re-export commonly used items
pub use errors::{AnalysisError, Result};
pub use fourier::{FourierCoefficient, FourierTerm};
pub use metabolic::{BiometricProfile, DailyExpenditure, DayRecord, ExerciseSeries, Sex};
pub use session::{AnalysisOptions, AnalysisSession};
pub use statistics::{PairedStats, RegressionResult};
pub use transform::LogLogPoint;
