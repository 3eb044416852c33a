// SPDX-License-Identifier: LGPL-3.0-or-later

//! Quasi-logarithmic band frequency layout.
//!
//! Band centers follow an exponential curve with a constant offset,
//! giving near-linear spacing for the lowest bands and near-constant
//! relative spacing higher up. Bandwidths are derived from the spacing
//! of neighboring centers, so band Q rises with the index: roughly 6.7
//! at band 0, 31 at band 40, and 43 at band 79 for the default layout.

/// Base scale of the center-frequency curve (Hz).
const FREQ_BASE: f32 = 480.0;

/// Exponential growth per band step, in octaves.
const FREQ_GROWTH: f32 = 0.027;

/// Constant offset subtracted from the curve (Hz).
const FREQ_OFFSET: f32 = 420.0;

/// Center frequency of a band in Hz.
///
/// The index may be negative; [`bandwidth`] evaluates the curve one
/// step outside the configured range at the edges. With the default
/// constants band 0 sits at 60 Hz and band 79 at about 1685 Hz.
#[inline]
pub fn center_freq(band: i32) -> f32 {
    FREQ_BASE * (FREQ_GROWTH * band as f32).exp2() - FREQ_OFFSET
}

/// Bandwidth of a band in Hz.
///
/// Twice the harmonic mean of the spacings to the two neighboring
/// centers, so adjacent pass bands overlap.
#[inline]
pub fn bandwidth(band: i32) -> f32 {
    let f0 = center_freq(band - 1);
    let f1 = center_freq(band);
    let f2 = center_freq(band + 1);
    let a = f2 - f1;
    let b = f1 - f0;
    2.0 * (a * b) / (a + b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BAND_COUNT;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_center_freq_spot_values() {
        assert_approx_eq!(f32, center_freq(0), 60.0, epsilon = 1e-3);
        assert_approx_eq!(f32, center_freq(1), 69.0678, epsilon = 1e-3);
        assert_approx_eq!(f32, center_freq(40), 594.7373, epsilon = 1e-2);
        assert_approx_eq!(f32, center_freq(79), 1685.4176, epsilon = 1e-2);
    }

    #[test]
    fn test_center_freq_strictly_increasing() {
        for n in -1..BAND_COUNT as i32 {
            assert!(
                center_freq(n) < center_freq(n + 1),
                "band {n} not below band {}",
                n + 1
            );
        }
    }

    #[test]
    fn test_bandwidth_positive() {
        for n in 0..BAND_COUNT as i32 {
            assert!(bandwidth(n) > 0.0, "band {n} has non-positive bandwidth");
        }
    }

    #[test]
    fn test_bandwidth_spot_values() {
        assert_approx_eq!(f32, bandwidth(0), 8.9829, epsilon = 1e-3);
        assert_approx_eq!(f32, bandwidth(40), 18.9902, epsilon = 1e-2);
        assert_approx_eq!(f32, bandwidth(79), 39.4018, epsilon = 1e-2);
    }

    #[test]
    fn test_band_q_rises_with_index() {
        let q = |n: i32| center_freq(n) / bandwidth(n);
        assert_approx_eq!(f32, q(0), 6.68, epsilon = 0.05);
        assert_approx_eq!(f32, q(40), 31.32, epsilon = 0.1);
        assert_approx_eq!(f32, q(79), 42.78, epsilon = 0.1);
        for n in 1..BAND_COUNT as i32 {
            assert!(q(n) > q(n - 1), "Q not increasing at band {n}");
        }
    }

    #[test]
    fn test_bandwidth_tracks_neighbor_spacing() {
        // Each pass band spans about one neighbor gap, so the bank
        // tiles the range without holes.
        for n in 0..BAND_COUNT as i32 {
            let up = center_freq(n + 1) - center_freq(n);
            let down = center_freq(n) - center_freq(n - 1);
            let bw = bandwidth(n);
            assert!(bw >= up.min(down) * 0.999, "band {n} too narrow");
            assert!(bw <= up.max(down) * 1.001, "band {n} too wide");
            assert!(bw > bandwidth(n - 1) || n == 0, "bandwidth shrank at band {n}");
        }
    }
}
