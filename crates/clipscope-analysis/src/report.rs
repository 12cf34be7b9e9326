//! Per-shaper analysis pipeline.
//!
//! Each shaper's pipeline (generate → residual → spectrum) is independent of
//! the others; [`analyze_shapers`] runs them in the caller's order over one
//! shared reference.

use clipscope_core::{ShaperKind, SignalConfig, Waveform, generate, reference};

use crate::error::AnalysisError;
use crate::harmonics::{HarmonicAnalyzer, SpectrumEntry, thd_ratio};
use crate::residual::{peak, residual, rms};

/// Everything derived from one shaper at one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaperReport {
    /// The shaper analyzed.
    pub kind: ShaperKind,
    /// Shaped waveform.
    pub shaped: Waveform,
    /// `reference - shaped`.
    pub residual: Waveform,
    /// RMS of the residual.
    pub residual_rms: f32,
    /// Largest absolute residual sample.
    pub residual_peak: f32,
    /// Harmonics of the shaped waveform, ascending from DC.
    pub spectrum: Vec<SpectrumEntry>,
    /// Total harmonic distortion ratio.
    pub thd: f32,
}

impl ShaperReport {
    /// Harmonics above the negligible threshold.
    pub fn significant_harmonics(&self) -> impl Iterator<Item = &SpectrumEntry> {
        self.spectrum.iter().filter(|e| e.is_significant())
    }
}

fn analyze_against(
    kind: ShaperKind,
    dry: &Waveform,
    signal: &SignalConfig,
    analyzer: &HarmonicAnalyzer,
) -> Result<ShaperReport, AnalysisError> {
    let shaped = generate(kind, signal)?;
    let residual = residual(&shaped, dry)?;
    let spectrum = analyzer.analyze(&shaped);

    Ok(ShaperReport {
        kind,
        residual_rms: rms(&residual),
        residual_peak: peak(&residual),
        thd: thd_ratio(&spectrum),
        shaped,
        residual,
        spectrum,
    })
}

/// Run the full pipeline for one shaper.
pub fn analyze_shaper(
    kind: ShaperKind,
    signal: &SignalConfig,
    analyzer: &HarmonicAnalyzer,
) -> Result<ShaperReport, AnalysisError> {
    let dry = reference(signal)?;
    analyze_against(kind, &dry, signal, analyzer)
}

/// Run the pipeline for each shaper, keeping the given order.
pub fn analyze_shapers<I>(
    kinds: I,
    signal: &SignalConfig,
    analyzer: &HarmonicAnalyzer,
) -> Result<Vec<ShaperReport>, AnalysisError>
where
    I: IntoIterator<Item = ShaperKind>,
{
    let dry = reference(signal)?;
    kinds
        .into_iter()
        .map(|kind| analyze_against(kind, &dry, signal, analyzer))
        .collect()
}
