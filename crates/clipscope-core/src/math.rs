//! Small math helpers shared by the shapers and the analyzers.

use libm::log10f;

/// Sign of `x` with `sign(0) == 0`.
///
/// Unlike [`f32::signum`], zero maps to zero, so the knee offset
/// `sign(x) * t` vanishes at the origin. NaN maps to NaN.
///
/// ```rust
/// use clipscope_core::sign;
///
/// assert_eq!(sign(-3.0), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(0.25), 1.0);
/// ```
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x.is_nan() {
        f32::NAN
    } else {
        0.0
    }
}

/// Convert a linear amplitude to decibels, `20 * log10(linear)`.
///
/// Input is floored at `1e-10` (-200 dB) so silence never yields `-inf`.
///
/// ```rust
/// use clipscope_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 1e-6);
/// assert!((linear_to_db(0.5) - (-6.0206)).abs() < 1e-3);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    20.0 * log10f(linear.max(1e-10))
}
