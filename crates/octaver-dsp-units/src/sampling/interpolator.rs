// SPDX-License-Identifier: LGPL-3.0-or-later

//! 1:4 interpolator built from two cascaded polyphase half-band stages.
//!
//! Each stage holds one history ring and two sub-kernels ("a"/"b"), one
//! per interpolation phase, so a single push yields two outputs without
//! filtering explicit zero-stuffed samples. One band-rate sample in
//! produces four raw-rate samples out, in time order. The kernels carry
//! a 2x passband gain to compensate the implicit zero insertion.

use crate::consts::RESAMPLE_FACTOR;
use crate::util::history::HistoryRing;

/// Two-stage 1:4 polyphase half-band interpolator.
#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    buffer1: HistoryRing<16>,
    buffer2: HistoryRing<16>,
}

impl Interpolator {
    /// Create an interpolator with silent history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpolate one band-rate sample to a chunk of raw-rate samples.
    #[inline]
    pub fn process(&mut self, sample: f32) -> [f32; RESAMPLE_FACTOR] {
        let mut output = [0.0; RESAMPLE_FACTOR];

        self.buffer1.push(sample);

        let s1 = self.stage1a();
        self.buffer2.push(s1);
        output[0] = self.stage2a();
        output[1] = self.stage2b();

        let s1 = self.stage1b();
        self.buffer2.push(s1);
        output[2] = self.stage2a();
        output[3] = self.stage2b();

        output
    }

    /// Reset all filter history to silence.
    pub fn clear(&mut self) {
        self.buffer1.clear();
        self.buffer2.clear();
    }

    // Stage 1 kernels
    // 24000 Hz sample rate
    // 0-3600 Hz pass band (3 dB ripple)
    // 6000-12000 Hz stop band (-80 dB)
    // Gain=2 in pass band

    #[inline]
    fn stage1a(&self) -> f32 {
        -0.0016891753 * (self.buffer1.get(2) + self.buffer1.get(15))
            - 0.015774478 * (self.buffer1.get(3) + self.buffer1.get(14))
            + 0.01473902 * (self.buffer1.get(4) + self.buffer1.get(13))
            + 0.086912733 * (self.buffer1.get(5) + self.buffer1.get(12))
            - 0.06596089 * (self.buffer1.get(6) + self.buffer1.get(11))
            - 0.030808422 * (self.buffer1.get(7) + self.buffer1.get(10))
            + 0.56784355 * (self.buffer1.get(8) + self.buffer1.get(9))
    }

    #[inline]
    fn stage1b(&self) -> f32 {
        -0.007650264 * (self.buffer1.get(2) + self.buffer1.get(14))
            - 0.013417133 * (self.buffer1.get(3) + self.buffer1.get(13))
            + 0.062337472 * (self.buffer1.get(4) + self.buffer1.get(12))
            + 0.040285747 * (self.buffer1.get(5) + self.buffer1.get(11))
            - 0.13062327 * (self.buffer1.get(6) + self.buffer1.get(10))
            + 0.25076256 * (self.buffer1.get(7) + self.buffer1.get(9))
            + 0.7072161 * self.buffer1.get(8)
    }

    // Stage 2 kernels
    // 48000 Hz sample rate
    // 0-3600 Hz pass band (3 dB ripple)
    // 12000-24000 Hz stop band (-79 dB)
    // Gain=2 in pass band

    #[inline]
    fn stage2a(&self) -> f32 {
        -0.00192709889 * (self.buffer2.get(7) + self.buffer2.get(15))
            - 0.018056143 * (self.buffer2.get(8) + self.buffer2.get(14))
            + 0.033555816 * (self.buffer2.get(9) + self.buffer2.get(13))
            + 0.30026806 * (self.buffer2.get(10) + self.buffer2.get(12))
            + 0.5012732 * self.buffer2.get(11)
    }

    #[inline]
    fn stage2b(&self) -> f32 {
        -0.00870446 * (self.buffer2.get(7) + self.buffer2.get(14))
            - 0.01360238 * (self.buffer2.get(8) + self.buffer2.get(13))
            + 0.14374558 * (self.buffer2.get(9) + self.buffer2.get(12))
            + 0.44309192 * (self.buffer2.get(10) + self.buffer2.get(11))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BAND_RATE;
    use float_cmp::assert_approx_eq;
    use std::f32::consts::TAU;

    #[test]
    fn test_silence_in_silence_out() {
        let mut interp = Interpolator::new();
        for _ in 0..100 {
            assert_eq!(interp.process(0.0), [0.0; 4]);
        }
    }

    #[test]
    fn test_dc_gain() {
        // The two polyphase branches settle to slightly different DC
        // values inside the 3 dB ripple band.
        let mut interp = Interpolator::new();
        let mut out = [0.0; 4];
        for _ in 0..400 {
            out = interp.process(1.0);
        }
        for s in out {
            assert_approx_eq!(f32, s, 1.2538, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_passband_sine_gain() {
        let freq = 440.0;
        let mut interp = Interpolator::new();
        let mut out = Vec::new();
        for i in 0..24000 {
            let s = (TAU * freq * i as f32 / BAND_RATE).sin();
            out.extend_from_slice(&interp.process(s));
        }
        let settled = &out[out.len() / 2..];
        let peak = settled.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
        assert_approx_eq!(f32, peak, 1.222, epsilon = 0.02);
    }

    #[test]
    fn test_impulse_spreads_in_time_order() {
        let mut interp = Interpolator::new();
        let mut out = Vec::new();
        out.extend_from_slice(&interp.process(1.0));
        for _ in 0..16 {
            out.extend_from_slice(&interp.process(0.0));
        }
        // Energy must come out centered on the cascade group delay.
        let peak_idx = out
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_idx, 56);
        assert!(out[peak_idx] > 0.5);
        // Symmetric FIR cascade: response mirrors around the peak.
        assert_approx_eq!(f32, out[peak_idx - 1], out[peak_idx + 1], epsilon = 1e-4);
        assert_approx_eq!(f32, out[peak_idx - 4], out[peak_idx + 4], epsilon = 1e-4);
    }

    #[test]
    fn test_clear_resets_history() {
        let mut interp = Interpolator::new();
        for _ in 0..32 {
            interp.process(1.0);
        }
        interp.clear();
        assert_eq!(interp.process(0.0), [0.0; 4]);
    }
}
