// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fixed design-rate constants of the octaver signal path.
//!
//! The resampler kernels and the band layout are designed for one
//! specific sample rate; these constants pin the rates the rest of the
//! crate derives from it.

/// Sample rate the half-band kernels were designed for (Hz).
pub const SAMPLE_RATE: f32 = 48000.0;

/// Rate ratio between the I/O stream and the band-processing stream.
///
/// The decimator consumes this many raw samples per output sample and
/// the interpolator produces this many raw samples per input sample,
/// so one decimated sample always maps to exactly one output chunk.
pub const RESAMPLE_FACTOR: usize = 4;

/// Sample rate seen by the band shifters (Hz).
pub const BAND_RATE: f32 = SAMPLE_RATE / RESAMPLE_FACTOR as f32;

/// Number of analysis bands in the default bank.
pub const BAND_COUNT: usize = 80;
