//! Waveshaping transfer functions and knee blending.
//!
//! Every curve here is odd-symmetric with `f(0) == 0`, so a symmetric input
//! only ever gains odd harmonics.
//!
//! | Curve | Formula | Ceiling | Character |
//! |-------|---------|---------|-----------|
//! | [`hard_clip`] | `clamp(x, -1, 1)` | ±1 | Harsh, long odd-harmonic tail |
//! | [`tanh_soft_clip`] | `tanh(x)` | ±1 | Smooth, tube-like |
//! | [`cubic_soft_clip`] | `x - x³/3` | ±2/3 | Smooth, reaches its ceiling at `|x| = 1` |
//! | [`atan_soft_clip`] | `(2/π)·atan((π/2)·x)` | ±1 | Unit slope at origin, slow approach |
//! | [`foldback`] | triangle fold at ±1 | ±1 | Non-monotonic, metallic |
//!
//! # Knee
//!
//! [`apply_knee`] wraps any curve `g` with a linear region of half-width `t`:
//!
//! ```text
//! st = sign(x) * t
//! k  = 1 - t
//! knee(x, t) = x                          if |x| < t
//!            = st + k * g((x - st) / k)   otherwise
//! ```
//!
//! The knee is clamped into `[0, MAX_KNEE]` first. At `t = 1` the rescale
//! factor `k` would be zero; clamping keeps the curve finite and makes a knee
//! of 1 behave like the `t → 1` limit.

use core::f32::consts::{FRAC_2_PI, FRAC_PI_2};

use libm::{atanf, floorf, tanhf};

use crate::math::sign;

/// Largest knee accepted by [`apply_knee`]; larger values are clamped to it.
pub const MAX_KNEE: f32 = 0.999;

/// Clamp a knee value into `[0, MAX_KNEE]`. NaN passes through unchanged.
#[inline]
pub fn clamp_knee(knee: f32) -> f32 {
    knee.clamp(0.0, MAX_KNEE)
}

/// Hard clip to ±1.
#[inline]
pub fn hard_clip(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}

/// Hyperbolic tangent saturation.
#[inline]
pub fn tanh_soft_clip(x: f32) -> f32 {
    tanhf(x)
}

/// Cubic soft clip, `x - x³/3` inside ±1, saturating at ±2/3 beyond.
///
/// The curve and its first derivative are continuous at `|x| = 1`.
#[inline]
pub fn cubic_soft_clip(x: f32) -> f32 {
    if x >= 1.0 {
        2.0 / 3.0
    } else if x <= -1.0 {
        -2.0 / 3.0
    } else {
        x - x * x * x / 3.0
    }
}

/// Arctangent soft clip normalized to unit slope at the origin and ±1 asymptotes.
#[inline]
pub fn atan_soft_clip(x: f32) -> f32 {
    FRAC_2_PI * atanf(FRAC_PI_2 * x)
}

/// Foldback at ±1.
///
/// Identity on `[-1, 1]`; beyond that the signal reflects off the
/// threshold as a triangle wave of period 4. Closed form, so arbitrarily
/// large inputs cost the same as small ones.
#[inline]
pub fn foldback(x: f32) -> f32 {
    const PERIOD: f32 = 4.0;
    if x.abs() <= 1.0 {
        return x;
    }
    let shifted = x + 1.0;
    let wrapped = shifted - PERIOD * floorf(shifted / PERIOD);
    1.0 - (wrapped - 2.0).abs()
}

/// Blend `curve` with a linear region of half-width `knee`.
///
/// Inside the region the input passes through untouched. Outside it the
/// curve is applied to the overshoot, rescaled by `1 - knee`, so the result
/// is continuous at `|x| = knee`. A knee of 0 returns `curve(x)` exactly.
///
/// ```rust
/// use clipscope_core::{apply_knee, hard_clip};
///
/// assert_eq!(apply_knee(hard_clip, 0.3, 0.5), 0.3);
/// assert_eq!(apply_knee(hard_clip, 2.0, 0.0), 1.0);
/// assert_eq!(apply_knee(hard_clip, 2.0, 0.5), 1.0);
/// ```
#[inline]
pub fn apply_knee<F>(curve: F, x: f32, knee: f32) -> f32
where
    F: Fn(f32) -> f32,
{
    let t = clamp_knee(knee);
    if x.abs() < t {
        return x;
    }
    let st = sign(x) * t;
    let k = 1.0 - t;
    st + k * curve((x - st) / k)
}

/// The fixed set of waveshapers, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaperKind {
    /// Identity, no shaping.
    Clean,
    /// Hard clip at ±1.
    Hard,
    /// `tanh` saturation.
    SoftTanh,
    /// Cubic polynomial soft clip.
    SoftCubic,
    /// Arctangent soft clip.
    SoftAtan,
    /// Triangle foldback at ±1.
    Foldback,
}

impl ShaperKind {
    /// Every shaper, in registration order.
    pub const ALL: [ShaperKind; 6] = [
        ShaperKind::Clean,
        ShaperKind::Hard,
        ShaperKind::SoftTanh,
        ShaperKind::SoftCubic,
        ShaperKind::SoftAtan,
        ShaperKind::Foldback,
    ];

    /// Stable identifier used in configs and on the command line.
    pub const fn key(&self) -> &'static str {
        match self {
            ShaperKind::Clean => "clean",
            ShaperKind::Hard => "hard",
            ShaperKind::SoftTanh => "softTanh",
            ShaperKind::SoftCubic => "softCubic",
            ShaperKind::SoftAtan => "softAtan",
            ShaperKind::Foldback => "foldback",
        }
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShaperKind::Clean => "Clean",
            ShaperKind::Hard => "Hard Clip",
            ShaperKind::SoftTanh => "Tanh",
            ShaperKind::SoftCubic => "Cubic",
            ShaperKind::SoftAtan => "Arctangent",
            ShaperKind::Foldback => "Foldback",
        }
    }

    /// One-line description of the curve.
    pub const fn description(&self) -> &'static str {
        match self {
            ShaperKind::Clean => "No shaping; the reference sine passes through unchanged",
            ShaperKind::Hard => "Clamps the signal to ±1, flat tops with a long odd-harmonic tail",
            ShaperKind::SoftTanh => "Hyperbolic tangent saturation approaching ±1 smoothly",
            ShaperKind::SoftCubic => "x - x³/3 polynomial, reaching its ±2/3 ceiling at |x| = 1",
            ShaperKind::SoftAtan => "Arctangent curve with unit slope at zero and ±1 asymptotes",
            ShaperKind::Foldback => "Reflects the signal back off ±1 instead of clipping it",
        }
    }

    /// Look up a shaper by key, ignoring ASCII case.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key))
    }

    /// Whether the bare curve is non-decreasing everywhere.
    pub const fn is_monotonic(&self) -> bool {
        !matches!(self, ShaperKind::Foldback)
    }

    /// The bare transfer curve, without knee.
    #[inline]
    pub fn transfer(&self, x: f32) -> f32 {
        match self {
            ShaperKind::Clean => x,
            ShaperKind::Hard => hard_clip(x),
            ShaperKind::SoftTanh => tanh_soft_clip(x),
            ShaperKind::SoftCubic => cubic_soft_clip(x),
            ShaperKind::SoftAtan => atan_soft_clip(x),
            ShaperKind::Foldback => foldback(x),
        }
    }

    /// The knee-blended curve `f(x, knee)`.
    ///
    /// The identity is its own knee blend, so `Clean` skips the rescale and
    /// stays bit-exact with its input.
    #[inline]
    pub fn shape(&self, x: f32, knee: f32) -> f32 {
        match self {
            ShaperKind::Clean => x,
            _ => apply_knee(|v| self.transfer(v), x, knee),
        }
    }
}

impl core::fmt::Display for ShaperKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}
