//! Clipscope Analysis - harmonic content of shaped waveforms
//!
//! - [`harmonics`] - Direct DFT at integer multiples of a fundamental bin, dB conversion, THD
//! - [`residual`] - Reference-minus-shaped residual, RMS and peak levels
//! - [`report`] - Per-shaper pipeline: generate, residual, spectrum
//!
//! ## Example
//!
//! ```rust
//! use clipscope_analysis::{HarmonicAnalyzer, residual, rms};
//! use clipscope_core::{ShaperKind, SignalConfig, generate, reference};
//!
//! let config = SignalConfig::default().with_drive(3.0);
//! let shaped = generate(ShaperKind::Hard, &config).unwrap();
//! let dry = reference(&config).unwrap();
//!
//! let spectrum = HarmonicAnalyzer::default().analyze(&shaped);
//! assert!(spectrum[3].is_significant());
//! assert!(!spectrum[2].is_significant());
//!
//! let distortion = residual(&shaped, &dry).unwrap();
//! assert!(rms(&distortion) > 0.0);
//! ```

pub mod error;
pub mod harmonics;
pub mod report;
pub mod residual;

pub use error::AnalysisError;
pub use harmonics::{
    DEFAULT_FUNDAMENTAL_BIN, DEFAULT_NUM_HARMONICS, HarmonicAnalyzer, MAGNITUDE_THRESHOLD,
    NEGLIGIBLE_DB, SpectrumEntry, dft_bin, magnitude_to_db, spectrum, thd_db, thd_ratio,
};
pub use report::{ShaperReport, analyze_shaper, analyze_shapers};
pub use residual::{peak, residual, rms, rms_db};
