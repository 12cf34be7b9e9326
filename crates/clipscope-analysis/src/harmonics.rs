//! Harmonic spectrum via direct DFT.
//!
//! Only the bins at `fundamental_bin * h` are evaluated, so a handful of
//! harmonics costs `O(harmonics * n)` with no FFT plan, window or leakage
//! correction. This only works when the signal's fundamental lands exactly
//! on `fundamental_bin`, i.e. the window holds exactly that many periods.
//!
//! # Magnitude and dB
//!
//! ```text
//! X[k]      = Σ x[t] · (cos(2πkt/n) - i·sin(2πkt/n))
//! magnitude = 2·|X[k]| / n
//! db        = 20·log10(magnitude)   if magnitude > 1e-4
//!           = 0                     otherwise (negligible, not 0 dBFS)
//! ```

use core::f64::consts::TAU;

use clipscope_core::linear_to_db;
use rustfft::num_complex::Complex;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Default DFT bin of the fundamental (matches the default 6 cycles).
pub const DEFAULT_FUNDAMENTAL_BIN: usize = 6;
/// Default number of harmonics above DC.
pub const DEFAULT_NUM_HARMONICS: usize = 16;
/// Magnitudes at or below this are reported as negligible.
pub const MAGNITUDE_THRESHOLD: f32 = 1e-4;
/// dB value reported for negligible magnitudes.
pub const NEGLIGIBLE_DB: f32 = 0.0;

/// Convert a harmonic magnitude to dBFS, or [`NEGLIGIBLE_DB`] at or below
/// [`MAGNITUDE_THRESHOLD`]. NaN counts as negligible.
#[inline]
pub fn magnitude_to_db(magnitude: f32) -> f32 {
    if magnitude > MAGNITUDE_THRESHOLD {
        linear_to_db(magnitude)
    } else {
        NEGLIGIBLE_DB
    }
}

/// One analyzed harmonic.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumEntry {
    /// Harmonic index (0 = DC, 1 = fundamental).
    pub harmonic: usize,
    /// Peak amplitude, finite and non-negative.
    pub magnitude: f32,
    /// dBFS, or [`NEGLIGIBLE_DB`] when the magnitude is negligible.
    pub db: f32,
}

impl SpectrumEntry {
    /// Build an entry; a non-finite magnitude is recorded as 0.
    pub fn new(harmonic: usize, magnitude: f32) -> Self {
        let magnitude = if magnitude.is_finite() {
            magnitude.max(0.0)
        } else {
            0.0
        };
        Self {
            harmonic,
            magnitude,
            db: magnitude_to_db(magnitude),
        }
    }

    /// Whether the magnitude clears [`MAGNITUDE_THRESHOLD`].
    #[inline]
    pub fn is_significant(&self) -> bool {
        self.magnitude > MAGNITUDE_THRESHOLD
    }
}

/// Single DFT coefficient `X[k]` of `signal`.
///
/// Accumulates in `f64` and reduces `k·t` modulo `n` before forming the
/// angle, so large bins don't lose phase precision. Empty input gives zero.
pub fn dft_bin(signal: &[f32], k: usize) -> Complex<f64> {
    let n = signal.len();
    if n == 0 {
        return Complex::new(0.0, 0.0);
    }
    let k = k % n;
    let step = TAU / n as f64;

    signal
        .iter()
        .enumerate()
        .fold(Complex::new(0.0, 0.0), |mut acc, (t, &x)| {
            let phase = step * ((k * t) % n) as f64;
            let x = x as f64;
            acc.re += x * phase.cos();
            acc.im -= x * phase.sin();
            acc
        })
}

/// Harmonic analyzer for bin-aligned test tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonicAnalyzer {
    fundamental_bin: usize,
    num_harmonics: usize,
}

impl Default for HarmonicAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_FUNDAMENTAL_BIN, DEFAULT_NUM_HARMONICS)
    }
}

impl HarmonicAnalyzer {
    /// Create an analyzer.
    ///
    /// # Arguments
    /// * `fundamental_bin` - DFT bin of the fundamental (at least 1)
    /// * `num_harmonics` - Highest harmonic to evaluate
    pub fn new(fundamental_bin: usize, num_harmonics: usize) -> Self {
        Self {
            fundamental_bin: fundamental_bin.max(1),
            num_harmonics,
        }
    }

    /// Set the fundamental bin (at least 1).
    pub fn with_fundamental_bin(mut self, bin: usize) -> Self {
        self.fundamental_bin = bin.max(1);
        self
    }

    /// Set the highest harmonic to evaluate.
    pub fn with_num_harmonics(mut self, num_harmonics: usize) -> Self {
        self.num_harmonics = num_harmonics;
        self
    }

    /// DFT bin of the fundamental.
    pub fn fundamental_bin(&self) -> usize {
        self.fundamental_bin
    }

    /// Highest harmonic evaluated.
    pub fn num_harmonics(&self) -> usize {
        self.num_harmonics
    }

    /// Highest harmonic whose bin stays below Nyquist for an `n`-sample
    /// window, capped at `num_harmonics`. `None` when no bin fits.
    pub fn highest_harmonic(&self, n: usize) -> Option<usize> {
        if n == 0 {
            return None;
        }
        // 2·bin·h < n  <=>  h <= (n - 1) / (2·bin)
        let nyquist_limit = (n - 1) / self.fundamental_bin.saturating_mul(2);
        Some(self.num_harmonics.min(nyquist_limit))
    }

    /// Analyze harmonics `0..=num_harmonics` of `signal`.
    ///
    /// Entries are ascending by harmonic. The list stops before the first
    /// bin at or above Nyquist (`k ≥ n/2`), so it may be shorter than
    /// `num_harmonics + 1`. An empty signal gives an empty list.
    ///
    /// `signal` is expected to be finite, as every
    /// [`Waveform`](clipscope_core::Waveform) is. A NaN sample poisons every
    /// bin and each entry comes back negligible.
    pub fn analyze(&self, signal: &[f32]) -> Vec<SpectrumEntry> {
        let Some(highest) = self.highest_harmonic(signal.len()) else {
            return Vec::new();
        };
        let n = signal.len() as f64;

        (0..=highest)
            .map(|h| {
                // bounded by n / 2, cannot overflow
                let k = self.fundamental_bin * h;
                let magnitude = 2.0 * dft_bin(signal, k).norm() / n;
                SpectrumEntry::new(h, magnitude as f32)
            })
            .collect()
    }
}

/// Spectrum at the default fundamental bin.
pub fn spectrum(signal: &[f32], num_harmonics: usize) -> Vec<SpectrumEntry> {
    HarmonicAnalyzer::default()
        .with_num_harmonics(num_harmonics)
        .analyze(signal)
}

/// Total harmonic distortion as a ratio, `sqrt(Σ_{h≥2} m_h²) / m_1`.
///
/// Returns 0 when the fundamental is missing or negligible.
pub fn thd_ratio(entries: &[SpectrumEntry]) -> f32 {
    let Some(fundamental) = entries
        .iter()
        .find(|e| e.harmonic == 1)
        .filter(|e| e.is_significant())
    else {
        return 0.0;
    };

    let harmonic_power: f32 = entries
        .iter()
        .filter(|e| e.harmonic >= 2)
        .map(|e| e.magnitude * e.magnitude)
        .sum();

    harmonic_power.sqrt() / fundamental.magnitude
}

/// THD in dB (floored at -200 dB for a distortion-free signal).
pub fn thd_db(entries: &[SpectrumEntry]) -> f32 {
    linear_to_db(thd_ratio(entries))
}
