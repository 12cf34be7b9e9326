//! Sampled sine generation and the immutable [`Waveform`] container.
//!
//! The analysis window holds `cycles` periods of a sine in `sample_count`
//! samples. Keeping `cycles` an integer equal to the analyzer's fundamental
//! bin puts the fundamental and all its harmonics exactly on DFT bins, so no
//! window function is needed.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::f64::consts::TAU;
use core::ops::Deref;

use libm::sin;

use crate::error::CoreError;
use crate::shaper::ShaperKind;

/// Default number of samples in the analysis window.
pub const DEFAULT_SAMPLE_COUNT: usize = 1024;
/// Default number of sine periods in the window.
pub const DEFAULT_CYCLES: f32 = 6.0;
/// Default input gain before shaping (1.0 = unity).
pub const DEFAULT_DRIVE: f32 = 1.0;
/// Default knee (0.0 = bare curve).
pub const DEFAULT_KNEE: f32 = 0.0;

/// Parameters for one generated waveform.
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `sample_count` | 1024 |
/// | `cycles` | 6.0 |
/// | `drive` | 1.0 |
/// | `knee` | 0.0 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalConfig {
    /// Number of samples in the window.
    pub sample_count: usize,
    /// Sine periods across the window.
    pub cycles: f32,
    /// Gain applied to the sine before shaping.
    pub drive: f32,
    /// Knee passed to the shaper, see [`apply_knee`](crate::apply_knee).
    pub knee: f32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            cycles: DEFAULT_CYCLES,
            drive: DEFAULT_DRIVE,
            knee: DEFAULT_KNEE,
        }
    }
}

impl SignalConfig {
    /// Set the window length.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the number of sine periods.
    pub fn with_cycles(mut self, cycles: f32) -> Self {
        self.cycles = cycles;
        self
    }

    /// Set the drive.
    pub fn with_drive(mut self, drive: f32) -> Self {
        self.drive = drive;
        self
    }

    /// Set the knee.
    pub fn with_knee(mut self, knee: f32) -> Self {
        self.knee = knee;
        self
    }

    /// Unshaped sine value at sample `index`.
    #[inline]
    fn sine_at(&self, index: usize) -> f32 {
        let t = index as f64 / self.sample_count as f64;
        sin(TAU * self.cycles as f64 * t) as f32
    }
}

/// An immutable window of finite samples.
///
/// Construction rejects NaN and infinity, so anything holding a `Waveform`
/// can feed it to the analyzers without re-checking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waveform {
    samples: Vec<f32>,
}

impl Waveform {
    /// Wrap `samples`, failing on the first non-finite value.
    pub fn from_samples(samples: Vec<f32>) -> Result<Self, CoreError> {
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(index, value, "rejecting non-finite sample");
            return Err(CoreError::NonFiniteSample { index, value });
        }
        Ok(Self { samples })
    }

    /// A zero-length waveform.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow the samples.
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Take the samples back.
    pub fn into_vec(self) -> Vec<f32> {
        self.samples
    }
}

impl Deref for Waveform {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

impl AsRef<[f32]> for Waveform {
    fn as_ref(&self) -> &[f32] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a Waveform {
    type Item = &'a f32;
    type IntoIter = core::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Drive a sine through an arbitrary shaping function.
///
/// Sample `i` is `shape(sin(2π·cycles·i/n) * drive, knee)`. A zero
/// `sample_count` gives an empty waveform.
///
/// ```rust
/// use clipscope_core::{SignalConfig, generate_with};
///
/// let config = SignalConfig::default().with_sample_count(64).with_cycles(1.0);
/// let halved = generate_with(|x, _knee| 0.5 * x, &config).unwrap();
/// assert!(halved.iter().all(|s| s.abs() <= 0.5));
/// ```
pub fn generate_with<F>(shape: F, config: &SignalConfig) -> Result<Waveform, CoreError>
where
    F: Fn(f32, f32) -> f32,
{
    let samples = (0..config.sample_count)
        .map(|i| shape(config.sine_at(i) * config.drive, config.knee))
        .collect();
    Waveform::from_samples(samples)
}

/// Generate the waveform of a catalog shaper.
pub fn generate(kind: ShaperKind, config: &SignalConfig) -> Result<Waveform, CoreError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        shaper = kind.key(),
        samples = config.sample_count,
        drive = config.drive,
        knee = config.knee,
        "generating waveform"
    );
    generate_with(|x, knee| kind.shape(x, knee), config)
}

/// The unshaped reference: the driven sine, `sin(2π·cycles·i/n) * drive`.
pub fn reference(config: &SignalConfig) -> Result<Waveform, CoreError> {
    generate_with(|x, _| x, config)
}
