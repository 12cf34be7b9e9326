//! Error types for waveform construction and shaper lookup.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Errors produced by the signal side of clipscope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No shaper is registered under this key.
    #[error("unknown shaper: {0}")]
    UnknownShaper(String),

    /// A sample was NaN or infinite.
    #[error("non-finite sample {value} at index {index}")]
    NonFiniteSample {
        /// Position of the offending sample.
        index: usize,
        /// The offending value.
        value: f32,
    },
}
