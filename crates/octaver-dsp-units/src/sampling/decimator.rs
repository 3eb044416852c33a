// SPDX-License-Identifier: LGPL-3.0-or-later

//! 4:1 decimator built from two cascaded half-band stages.
//!
//! Stage 1 runs at the full rate and keeps every other output, stage 2
//! runs at half rate and keeps every other output again, so four raw
//! samples in produce one decimated sample out. Both kernels are
//! odd-symmetric half-band designs; only the non-zero taps are summed.

use crate::consts::RESAMPLE_FACTOR;
use crate::util::history::HistoryRing;

/// Two-stage 4:1 half-band decimator.
///
/// Feed it a chunk of [`RESAMPLE_FACTOR`] consecutive raw samples and
/// it returns one sample at a quarter of the input rate. State lives in
/// two fixed-capacity history rings; processing never allocates.
#[derive(Debug, Clone, Default)]
pub struct Decimator {
    buffer1: HistoryRing<8>,
    buffer2: HistoryRing<16>,
}

impl Decimator {
    /// Create a decimator with silent history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimate one chunk of raw samples to a single output sample.
    ///
    /// # Panics
    /// Panics if `chunk.len() != RESAMPLE_FACTOR`.
    #[inline]
    pub fn process(&mut self, chunk: &[f32]) -> f32 {
        assert!(chunk.len() == RESAMPLE_FACTOR, "chunk must hold 4 samples");

        self.buffer1.push(chunk[0]);
        self.buffer1.push(chunk[1]);
        let s1 = self.stage1();
        self.buffer2.push(s1);

        self.buffer1.push(chunk[2]);
        self.buffer1.push(chunk[3]);
        let s1 = self.stage1();
        self.buffer2.push(s1);

        self.stage2()
    }

    /// Reset all filter history to silence.
    pub fn clear(&mut self) {
        self.buffer1.clear();
        self.buffer2.clear();
    }

    // Half-band kernel
    // 48000 Hz sample rate
    // 0-2000 Hz pass band
    #[inline]
    fn stage1(&self) -> f32 {
        -0.03290583 * (self.buffer1.get(1) + self.buffer1.get(7))
            + 0.28285046 * (self.buffer1.get(3) + self.buffer1.get(5))
            + 0.5 * self.buffer1.get(4)
    }

    // Half-band kernel
    // 24000 Hz sample rate
    // 0-2000 Hz pass band
    #[inline]
    fn stage2(&self) -> f32 {
        0.00829857 * (self.buffer2.get(5) + self.buffer2.get(15))
            - 0.05514833 * (self.buffer2.get(7) + self.buffer2.get(13))
            + 0.29690729 * (self.buffer2.get(9) + self.buffer2.get(11))
            + 0.5 * self.buffer2.get(10)
    }
}
