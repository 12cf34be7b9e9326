//! Error types for the analyzers.

use clipscope_core::CoreError;
use thiserror::Error;

/// Errors that can occur while analyzing waveforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The two signals of a residual have different lengths.
    #[error("length mismatch: shaped has {shaped} samples, reference has {reference}")]
    LengthMismatch {
        /// Length of the shaped signal.
        shaped: usize,
        /// Length of the reference signal.
        reference: usize,
    },

    /// Generating or wrapping a waveform failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
