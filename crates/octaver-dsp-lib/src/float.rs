// SPDX-License-Identifier: LGPL-3.0-or-later

//! Floating-point sanitization.
//!
//! Recursive filters can produce denormals as they ring out, and a
//! coefficient bug can produce NaN or infinity. Output buffers are
//! scrubbed so that none of these ever reach the audio hardware.

use multiversion::multiversion;

/// Sanitize a single float value: flush denormals, NaN, and infinity to zero.
#[inline]
pub fn sanitize(x: f32) -> f32 {
    if x.is_finite() && x.abs() >= f32::MIN_POSITIVE {
        x
    } else {
        0.0
    }
}

/// Sanitize a buffer of floats in place.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sanitize_buf(buf: &mut [f32]) {
    for sample in buf.iter_mut() {
        *sample = sanitize(*sample);
    }
}
