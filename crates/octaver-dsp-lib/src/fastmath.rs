// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fast approximate math primitives for the per-band audio path.
//!
//! These trade accuracy for speed: the inverse square root uses the
//! bit-level magic-constant method with one refined Newton step, and the
//! trig functions use a range-reduced parabolic approximation. All are
//! branch-free apart from range reduction and are safe to call once per
//! band per sample.
//!
//! The approximations are exactly that: `fast_sqrt(4.0)` is close to but
//! not equal to 2.0. Callers that need exact results should use the std
//! functions instead.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Approximate `1 / sqrt(x)` using the bit-trick initial guess refined by
/// a single fused Newton step.
///
/// Relative error stays below about 0.1% for positive normal inputs.
/// The caller must guarantee `x >= 0.0` and finite; `x == 0.0` yields a
/// large finite value (not infinity, not NaN), so products with a zero
/// numerator remain zero.
///
/// # Arguments
/// * `x` - Non-negative finite input
///
/// # Returns
/// Approximation of `x^(-1/2)`
#[inline]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let y = f32::from_bits(0x5F1F_FFF9_u32.wrapping_sub(x.to_bits() >> 1));
    y * (0.703_952_25 * (2.389_244_6 - x * y * y))
}

/// Approximate `sqrt(x)` as `x * fast_inv_sqrt(x)`.
///
/// Inherits the error bound of [`fast_inv_sqrt`]. `fast_sqrt(0.0)` is
/// exactly 0.0.
///
/// # Arguments
/// * `x` - Non-negative finite input
///
/// # Returns
/// Approximation of `sqrt(x)`
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    fast_inv_sqrt(x) * x
}

/// Wrap an angle into `[-pi, pi]`.
#[inline]
fn wrap_phase(theta: f32) -> f32 {
    theta - TAU * (theta * (1.0 / TAU)).round()
}

/// Approximate `sin(theta)` for angles up to a few thousand radians in
/// magnitude.
///
/// Parabolic approximation after range reduction, refined once. Odd
/// symmetric, continuous across the wrap boundary, absolute error below
/// about 1.2e-3 in the supported range. The range reduction works in
/// f32, which keeps roughly one ulp of the input magnitude as phase
/// error, so accuracy decays for very large angles; callers that
/// accumulate phase must wrap it periodically instead of letting it
/// grow.
///
/// # Arguments
/// * `theta` - Angle in radians
///
/// # Returns
/// Approximation of `sin(theta)` in `[-1, 1]`
#[inline]
pub fn fast_sin(theta: f32) -> f32 {
    let x = wrap_phase(theta);

    // Parabola matching sin at 0, +-pi/2, +-pi
    const B: f32 = 4.0 / PI;
    const C: f32 = -4.0 / (PI * PI);
    let y = B * x + C * x * x.abs();

    // One refinement pass pulls the maximum error down by an order
    // of magnitude
    const P: f32 = 0.225;
    P * (y * y.abs() - y) + y
}

/// Approximate `cos(theta)` over the same angle range as [`fast_sin`].
///
/// Implemented as `fast_sin(theta + pi/2)`; even symmetric with the same
/// error bound and range limit as [`fast_sin`].
///
/// # Arguments
/// * `theta` - Angle in radians
///
/// # Returns
/// Approximation of `cos(theta)` in `[-1, 1]`
#[inline]
pub fn fast_cos(theta: f32) -> f32 {
    fast_sin(theta + FRAC_PI_2)
}
