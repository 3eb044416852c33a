// SPDX-License-Identifier: LGPL-3.0-or-later

//! Signal mixing operations.
//!
//! Two-source weighted mixing over `f32` sample buffers, used to blend
//! the dry input with the processed wet signal.

use multiversion::multiversion;

/// Copy-mix two sources into `dst`: `dst[i] = src1[i]*k1 + src2[i]*k2`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn mix_copy2(dst: &mut [f32], src1: &[f32], src2: &[f32], k1: f32, k2: f32) {
    for ((d, s1), s2) in dst.iter_mut().zip(src1.iter()).zip(src2.iter()) {
        *d = *s1 * k1 + *s2 * k2;
    }
}
