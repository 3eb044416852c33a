// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fixed-capacity sample history with bitmask indexing.
//!
//! The resampler kernels read a handful of recent samples by age. The
//! history is an inline power-of-two array indexed through a bitmask,
//! so pushing and reading never allocate or branch on the position.
//!
//! # Examples
//! ```
//! use octaver_dsp_units::util::history::HistoryRing;
//!
//! let mut h: HistoryRing<8> = HistoryRing::new();
//! h.push(1.0);
//! h.push(2.0);
//! assert_eq!(h.get(0), 2.0); // most recent
//! assert_eq!(h.get(1), 1.0); // one sample back
//! ```

/// Fixed-capacity circular sample history.
///
/// `N` must be a power of two. The newest sample has age 0; `get(age)`
/// reads `age` samples into the past, up to `N - 1`. Older samples are
/// overwritten as new ones are pushed.
#[derive(Debug, Clone)]
pub struct HistoryRing<const N: usize> {
    data: [f32; N],
    pos: usize,
}

impl<const N: usize> Default for HistoryRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HistoryRing<N> {
    /// Create a new zero-filled history.
    ///
    /// # Panics
    /// Panics if `N` is not a power of two.
    pub fn new() -> Self {
        assert!(N.is_power_of_two(), "history capacity must be a power of two");
        Self {
            data: [0.0; N],
            pos: 0,
        }
    }

    /// Push a new sample, aging all stored samples by one.
    #[inline]
    pub fn push(&mut self, sample: f32) {
        self.pos = self.pos.wrapping_sub(1) & (N - 1);
        self.data[self.pos] = sample;
    }

    /// Read the sample pushed `age` pushes ago (0 = most recent).
    ///
    /// Ages at or beyond `N` wrap around the capacity.
    #[inline]
    pub fn get(&self, age: usize) -> f32 {
        self.data[(self.pos + age) & (N - 1)]
    }

    /// Reset all history to zero.
    pub fn clear(&mut self) {
        self.data = [0.0; N];
        self.pos = 0;
    }
}
