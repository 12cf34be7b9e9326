//! Residual signals and level measurement.
//!
//! The residual is what a shaper added to (or took from) the reference:
//! `reference[i] - shaped[i]`. Its RMS is a single-number summary of how
//! hard a shaper is working at a given drive.

use clipscope_core::{Waveform, linear_to_db};

use crate::error::AnalysisError;

/// Pointwise `reference - shaped`.
///
/// Fails with [`AnalysisError::LengthMismatch`] when the lengths differ;
/// nothing is ever truncated or padded.
pub fn residual(shaped: &[f32], reference: &[f32]) -> Result<Waveform, AnalysisError> {
    if shaped.len() != reference.len() {
        return Err(AnalysisError::LengthMismatch {
            shaped: shaped.len(),
            reference: reference.len(),
        });
    }

    let samples = reference
        .iter()
        .zip(shaped)
        .map(|(r, s)| r - s)
        .collect();
    Ok(Waveform::from_samples(samples)?)
}

/// Compute RMS (Root Mean Square) level of a signal
///
/// Returns RMS value in linear scale (not dB). An empty signal is 0.
/// Expects finite samples, as held by every [`Waveform`]; a NaN sample
/// makes the result NaN.
pub fn rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = signal.iter().map(|&x| (x as f64) * (x as f64)).sum();
    (sum_sq / signal.len() as f64).sqrt() as f32
}

/// Compute RMS level in dB (-200 dB for silence)
pub fn rms_db(signal: &[f32]) -> f32 {
    linear_to_db(rms(signal))
}

/// Compute peak level (maximum absolute value), 0 for an empty signal
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().fold(0.0f32, |acc, x| acc.max(x.abs()))
}
