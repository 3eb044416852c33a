// SPDX-License-Identifier: LGPL-3.0-or-later

//! Top-level octave shifting engine.
//!
//! Chains the full signal path: decimate the input 4:1, run each
//! decimated sample through the band bank, interpolate the weighted
//! harmonic sum back to the I/O rate, and blend it with the dry
//! input. The wet chain also runs while bypassed, which keeps the
//! filter state warm so re-enabling the effect produces no transient.

use octaver_dsp_lib::copy::{copy, fill_zero};
use octaver_dsp_lib::float::sanitize_buf;
use octaver_dsp_lib::mix::mix_copy2;

use crate::bands::bank::BandBank;
use crate::bands::shifter::HarmonicStrategy;
use crate::consts::{BAND_COUNT, RESAMPLE_FACTOR, SAMPLE_RATE};
use crate::ctl::state::MixSnapshot;
use crate::sampling::{Decimator, Interpolator};

/// Group delay of the wet path in samples at the I/O rate.
///
/// All four resampler stages are linear-phase half-band filters; their
/// combined delay places the peak of the wet impulse response 77
/// samples after the impulse.
const WET_PATH_DELAY: usize = 77;

/// Complete octave shifter for one audio channel.
///
/// Owns the decimator, the 80-band analytic filter bank, and the
/// interpolator. Audio is processed in blocks whose length is a
/// multiple of the resample factor; the per-block mix gains arrive as
/// a [`MixSnapshot`].
///
/// # Examples
/// ```
/// use octaver_dsp_units::bands::shifter::HarmonicStrategy;
/// use octaver_dsp_units::consts::SAMPLE_RATE;
/// use octaver_dsp_units::ctl::state::MixSnapshot;
/// use octaver_dsp_units::engine::OctaverEngine;
///
/// let mut engine = OctaverEngine::new(SAMPLE_RATE, HarmonicStrategy::default());
/// let input = [0.0f32; 64];
/// let mut main = [0.0f32; 64];
/// let mut aux = [0.0f32; 64];
///
/// let mix = MixSnapshot { enabled: true, dry: 1.0, ..MixSnapshot::default() };
/// engine.process(&mut main, &mut aux, &input, &mix);
/// ```
#[derive(Debug, Clone)]
pub struct OctaverEngine {
    decimator: Decimator,
    bank: BandBank,
    interpolator: Interpolator,
}

impl OctaverEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// * `sample_rate` - I/O sample rate in Hz
    /// * `strategy` - Down-shift phase strategy for all bands
    ///
    /// # Panics
    /// Panics if `sample_rate` differs from the rate the resampler
    /// kernels are designed for.
    pub fn new(sample_rate: f32, strategy: HarmonicStrategy) -> Self {
        assert!(
            sample_rate == SAMPLE_RATE,
            "resampler kernels are designed for 48 kHz"
        );
        Self {
            decimator: Decimator::new(),
            bank: BandBank::new(BAND_COUNT, sample_rate / RESAMPLE_FACTOR as f32, strategy),
            interpolator: Interpolator::new(),
        }
    }

    /// Get the wet-path latency in samples at the I/O rate.
    pub fn latency(&self) -> usize {
        WET_PATH_DELAY
    }

    /// Process one block of audio.
    ///
    /// `out_main` receives the dry/wet mix, or a verbatim copy of the
    /// input when the snapshot is bypassed. `out_aux` is always
    /// written as silence. The wet chain runs in both cases.
    ///
    /// # Arguments
    /// * `out_main` - Main output buffer
    /// * `out_aux` - Auxiliary output buffer, written as silence
    /// * `input` - Input buffer
    /// * `mix` - Gains and bypass flag for this block
    ///
    /// # Panics
    /// Panics if the buffer lengths differ or the block length is not
    /// a multiple of the resample factor.
    pub fn process(
        &mut self,
        out_main: &mut [f32],
        out_aux: &mut [f32],
        input: &[f32],
        mix: &MixSnapshot,
    ) {
        assert_eq!(out_main.len(), input.len(), "main output length mismatch");
        assert_eq!(out_aux.len(), input.len(), "aux output length mismatch");
        assert!(
            input.len() % RESAMPLE_FACTOR == 0,
            "block length must be a multiple of the resample factor"
        );

        for (out_chunk, in_chunk) in out_main
            .chunks_exact_mut(RESAMPLE_FACTOR)
            .zip(input.chunks_exact(RESAMPLE_FACTOR))
        {
            let decimated = self.decimator.process(in_chunk);
            let wet = self
                .bank
                .process(decimated, mix.up1, mix.down1, mix.down2);
            let wet_chunk = self.interpolator.process(wet);
            mix_copy2(out_chunk, in_chunk, &wet_chunk, mix.dry, 1.0);
        }

        if mix.enabled {
            sanitize_buf(out_main);
        } else {
            copy(out_main, input);
        }
        fill_zero(out_aux);
    }

    /// Clear all filter state, resetting the engine to silence.
    pub fn clear(&mut self) {
        self.decimator.clear();
        self.bank.clear();
        self.interpolator.clear();
    }
}
