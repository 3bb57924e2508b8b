//! Metabolic Criticality WASM Module
//!
//! WebAssembly bindings over the core calculations so a browser frontend
//! can run the pipeline locally. Invalid input maps to 0.0 or an empty
//! vector rather than throwing across the FFI boundary; the frontend is
//! responsible for validating before it calls in.

use wasm_bindgen::prelude::*;

use metabolic_criticality_core::metabolic::{self, Sex};
use metabolic_criticality_core::{fourier, statistics, transform};

fn parse_sex(is_male: bool) -> Sex {
    if is_male {
        Sex::Male
    } else {
        Sex::Female
    }
}

/// Calculate basal metabolic rate (Harris-Benedict, kcal/day)
#[wasm_bindgen]
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> f64 {
    metabolic::bmr(weight_kg, height_cm, age_years, parse_sex(is_male))
}

/// Calculate the activity factor for one day's exercise minutes
#[wasm_bindgen]
pub fn activity_factor(exercise_minutes: f64) -> f64 {
    metabolic::activity_factor(exercise_minutes)
}

/// Calculate the gross daily expenditure series from biometrics and minutes
#[wasm_bindgen]
pub fn daily_expenditure(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    minutes: &[f64],
) -> Vec<f64> {
    let bmr = metabolic::bmr(weight_kg, height_cm, age_years, parse_sex(is_male));
    minutes
        .iter()
        .map(|&m| metabolic::gross_expenditure(bmr, metabolic::activity_factor(m)))
        .collect()
}

/// Calculate amplitudes A_k for k = 1..=max_k over a series
#[wasm_bindgen]
pub fn amplitude_spectrum(series: &[f64], max_k: usize) -> Vec<f64> {
    match fourier::spectrum(series, max_k) {
        Ok(spectrum) => spectrum.iter().map(|c| c.amplitude).collect(),
        Err(_) => vec![],
    }
}

/// Fit the log-log power-law slope over a series' amplitude spectrum
///
/// Returns 0.0 when the series is empty or too few points survive the
/// log-transform guard.
#[wasm_bindgen]
pub fn power_law_slope(series: &[f64], max_k: usize) -> f64 {
    let spectrum = match fourier::spectrum(series, max_k.min(series.len())) {
        Ok(s) => s,
        Err(_) => return 0.0,
    };
    let points = transform::to_log_log(&spectrum);
    match statistics::regression(&points) {
        Ok(fit) => fit.slope,
        Err(_) => 0.0,
    }
}
