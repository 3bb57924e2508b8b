//! Metabolic formula calculations
//!
//! Computes basal metabolic rate (Harris-Benedict), per-day activity
//! factors, and gross daily energy expenditure from biometric profile data
//! and daily exercise minutes.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Value Objects**: Inputs and outputs are immutable once constructed
//! 3. **Type Safety**: Closed enums instead of string dispatch

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{AnalysisError, Result};

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for the Harris-Benedict branch
///
/// Exactly two categories are recognized; constructing from any other raw
/// value fails, so downstream code never re-validates strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(AnalysisError::InvalidCategory(s.to_string())),
        }
    }
}

/// Biometric data needed for the metabolic formulas
///
/// The caller supplies validated positive values; input parsing and range
/// checks belong to the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Biological sex for the formula branch
    pub sex: Sex,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
}

impl BiometricProfile {
    /// Basal metabolic rate for this profile (kcal/day).
    pub fn bmr(&self) -> f64 {
        bmr(self.weight_kg, self.height_cm, self.age_years, self.sex)
    }
}

// ============================================================================
// Series Types
// ============================================================================

/// Daily exercise minutes, one sample per day
///
/// Index 0 corresponds to day 1. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSeries(Vec<f64>);

impl ExerciseSeries {
    /// Build a series from validated per-day minute values.
    ///
    /// Fails with [`AnalysisError::EmptySeries`] when no days are given.
    pub fn new(minutes: Vec<f64>) -> Result<Self> {
        if minutes.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        Ok(Self(minutes))
    }

    /// Number of days in the series.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-day minute values, day 1 first.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Gross daily expenditure (GB) values derived from a profile and series
///
/// Always the same length as the exercise series it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyExpenditure(Vec<f64>);

impl DailyExpenditure {
    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-day GB values in kcal, day 1 first.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

/// One row of the per-day expenditure breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day number, starting at 1
    pub day: usize,
    /// Exercise minutes recorded for the day
    pub minutes: f64,
    /// Basal metabolic rate (constant across days for one profile)
    pub bmr: f64,
    /// Activity factor for the day
    pub activity_factor: f64,
    /// Gross expenditure for the day in kcal
    pub expenditure: f64,
}

// ============================================================================
// Metabolic Formulas
// ============================================================================

/// Calculate basal metabolic rate using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.333 × age(y)
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.333 * age_years as f64,
    }
}

/// Calculate the physical activity factor for one day
///
/// AF = 1.2 + 0.01 × minutes. No upper bound; negative minutes are a caller
/// contract violation (validation lives in the presentation layer).
pub fn activity_factor(exercise_minutes: f64) -> f64 {
    1.2 + 0.01 * exercise_minutes
}

/// Calculate gross daily expenditure
///
/// GB = BMR × AF
pub fn gross_expenditure(bmr: f64, af: f64) -> f64 {
    bmr * af
}

/// Derive the gross expenditure series for a profile over an exercise series.
///
/// BMR is constant across days; only the activity factor varies.
pub fn daily_expenditure(profile: &BiometricProfile, series: &ExerciseSeries) -> DailyExpenditure {
    let bmr = profile.bmr();
    let values = series
        .as_slice()
        .iter()
        .map(|&minutes| gross_expenditure(bmr, activity_factor(minutes)))
        .collect();
    DailyExpenditure(values)
}

/// Build the per-day breakdown table (day, minutes, BMR, AF, GB).
pub fn day_records(profile: &BiometricProfile, series: &ExerciseSeries) -> Vec<DayRecord> {
    let bmr = profile.bmr();
    series
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &minutes)| {
            let af = activity_factor(minutes);
            DayRecord {
                day: i + 1,
                minutes,
                bmr,
                activity_factor: af,
                expenditure: gross_expenditure(bmr, af),
            }
        })
        .collect()
}
