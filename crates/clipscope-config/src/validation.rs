//! Range and consistency checks for [`AnalysisConfig`](crate::AnalysisConfig).
//!
//! The generator and analyzers accept any numbers; these checks keep a
//! configuration inside the ranges the analysis is meaningful for.

use thiserror::Error;

/// Accepted drive range (inclusive).
pub const DRIVE_RANGE: (f32, f32) = (0.5, 6.0);

/// Accepted knee range (inclusive). A knee of 1 is clamped by the shapers.
pub const KNEE_RANGE: (f32, f32) = (0.0, 1.0);

/// Accepted analysis window length (inclusive).
pub const SAMPLE_COUNT_RANGE: (usize, usize) = (1, 1 << 20);

/// Accepted harmonic count (inclusive).
pub const HARMONICS_RANGE: (usize, usize) = (1, 1024);

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The analysis window is empty.
    #[error("sample_count must be positive")]
    EmptyWindow,

    /// A numeric parameter is outside its range (or NaN).
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: &'static str,
        /// The rejected value.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// The tone's cycle count does not land on the analyzer's fundamental bin.
    #[error("cycles ({cycles}) must equal fundamental_bin ({fundamental_bin}) or harmonics alias")]
    MisalignedBin {
        /// Sine periods in the window.
        cycles: u32,
        /// DFT bin the analyzer treats as the fundamental.
        fundamental_bin: usize,
    },

    /// No harmonics requested.
    #[error("harmonics must be at least 1")]
    NoHarmonics,

    /// Shaper key not in the catalog.
    #[error("unknown shaper: {0}")]
    UnknownShaper(String),

    /// Shaper listed more than once.
    #[error("shaper listed twice: {0}")]
    DuplicateShaper(String),

    /// Empty shaper selection.
    #[error("no shapers selected")]
    EmptySelection,
}

/// Check that a count lies within `range`.
pub(crate) fn check_count(
    param: &'static str,
    value: usize,
    (min, max): (usize, usize),
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param,
            value: value as f32,
            min: min as f32,
            max: max as f32,
        })
    }
}

/// Check that `value` lies within `range`, rejecting NaN.
pub(crate) fn check_range(
    param: &'static str,
    value: f32,
    (min, max): (f32, f32),
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param,
            value,
            min,
            max,
        })
    }
}
