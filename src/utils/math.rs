//! # Game Mathematics
//!
//! Scalar interpolation and periodic shaping functions used to build
//! animation paths.

use std::f32::consts::PI;

/// Linearly interpolates between `a` and `b`.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// use serpentine::utils::lerp;
///
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// ```
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One full sine oscillation over `t` in `[0, 1]`.
///
/// Zero at both ends, positive on the first half and negative on the second.
pub fn full_wave(t: f32) -> f32 {
    (t * PI * 2.0).sin()
}

/// Half a sine oscillation over `t` in `[0, 1]`: a single bump that peaks at
/// `t = 0.5`.
pub fn half_wave(t: f32) -> f32 {
    (t * PI).sin()
}

/// Maps step `k` of `count` to a fraction in `[0, 1]`.
///
/// A zero `count` yields 0 so a degenerate path collapses onto its start.
pub fn fraction(k: usize, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        k as f32 / count as f32
    }
}
