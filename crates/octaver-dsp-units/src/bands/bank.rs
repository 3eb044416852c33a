// SPDX-License-Identifier: LGPL-3.0-or-later

//! Bank of band shifters spanning the instrument range.
//!
//! Every band sees the same band-rate sample; their harmonic outputs
//! are summed per component and weighted by shared mix gains. The bank
//! is sized once at construction and never reallocates afterwards.

use crate::bands::layout::{bandwidth, center_freq};
use crate::bands::shifter::{BandShifter, HarmonicStrategy};

/// Fixed array of band shifters with weighted harmonic summation.
#[derive(Debug, Clone)]
pub struct BandBank {
    shifters: Vec<BandShifter>,
}

impl BandBank {
    /// Build `bands` shifters from the band layout.
    ///
    /// # Arguments
    /// * `bands` - Number of bands, indexed 0 upwards in the layout
    /// * `sample_rate` - Band-rate sample rate in Hz
    /// * `strategy` - Harmonic strategy shared by all bands
    pub fn new(bands: usize, sample_rate: f32, strategy: HarmonicStrategy) -> Self {
        let shifters = (0..bands as i32)
            .map(|n| BandShifter::new(center_freq(n), sample_rate, bandwidth(n), strategy))
            .collect();
        Self { shifters }
    }

    /// Number of bands in the bank.
    pub fn len(&self) -> usize {
        self.shifters.len()
    }

    /// Whether the bank holds no bands.
    pub fn is_empty(&self) -> bool {
        self.shifters.is_empty()
    }

    /// Advance every band by one sample and return the gain-weighted
    /// sum of the three harmonic components.
    ///
    /// The gains are shared across bands, so they factor out of the
    /// per-band sums and are applied once at the end.
    #[inline]
    pub fn process(&mut self, sample: f32, g_up1: f32, g_down1: f32, g_down2: f32) -> f32 {
        let mut up1 = 0.0;
        let mut down1 = 0.0;
        let mut down2 = 0.0;
        for shifter in &mut self.shifters {
            shifter.update(sample);
            up1 += shifter.up1();
            down1 += shifter.down1();
            down2 += shifter.down2();
        }
        up1 * g_up1 + down1 * g_down1 + down2 * g_down2
    }

    /// Reset every band to silence, keeping coefficients and strategy.
    pub fn clear(&mut self) {
        for shifter in &mut self.shifters {
            shifter.clear();
        }
    }
}
