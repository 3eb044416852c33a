// SPDX-License-Identifier: LGPL-3.0-or-later

//! Complex band-pass analytic filter with octave-shifted outputs.
//!
//! Each band runs a second-order complex recursive filter whose output
//! approximates the analytic signal for that band: the real part is
//! the band-limited input, the imaginary part its 90-degree-shifted
//! twin. The prototype is the low-pass biquad from Robert
//! Bristow-Johnson's "Audio EQ Cookbook", frequency-shifted to the
//! band center by rotating its taps with complex exponentials, as
//! described in A. J. Noga, "Complex Band-Pass Filters for Analytic
//! Signal Generation and Their Application".
//!
//! Octave shifting is phase algebra on the analytic signal, following
//! E. Thuillier, "Real-Time Polyphonic Octave Doubling for the
//! Guitar": `out = in * (in / |in|)^(g - 1)`. Squaring the unit
//! phasor (g = 2) doubles the frequency; taking its square root
//! (g = 1/2) halves it, which is two-valued and needs a branch pinned
//! per sample. [`HarmonicStrategy`] selects how that branch is pinned.

use num_complex::{Complex32, Complex64};
use octaver_dsp_lib::fastmath::{fast_cos, fast_inv_sqrt, fast_sin, fast_sqrt};
use std::f32::consts::{PI, TAU};

/// Squared magnitude below which the band is treated as silent and all
/// harmonic outputs are parked at zero. The approximate inverse square
/// root must not see values this small.
const MAG_EPSILON: f32 = 1e-20;

/// Strategy for deriving the down-shifted harmonics.
///
/// Both strategies produce the same octave-up output and, at a band's
/// center frequency, equivalent down-shifted output. They differ in
/// how the two-valued half-angle branch is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarmonicStrategy {
    /// Pin the branch with explicit sign flags, flipped whenever the
    /// analytic signal wraps its phase. Extra per-band state and a
    /// branch per sample, but no trig evaluation.
    #[default]
    SignTracked,
    /// Rotate the analytic signal by a constant per-band rate each
    /// sample, accumulated in a phase register wrapped at the period
    /// boundary. No branch state, one fast sine/cosine pair per
    /// harmonic per sample.
    RotatingPhase,
}

/// Per-strategy mutable state.
#[derive(Debug, Clone)]
enum HarmonicState {
    SignTracked {
        /// Complex octave-down signal from the previous sample, kept
        /// to detect its own phase wraps.
        down1: Complex32,
        down1_sign: f32,
        down2_sign: f32,
    },
    RotatingPhase {
        phase1: f32,
        phase2: f32,
        rate1: f32,
        rate2: f32,
    },
}

/// Single-band complex band-pass filter with octave-shifted outputs.
///
/// [`update`](Self::update) advances the filter by one sample and is
/// the only method that mutates state; the output accessors are pure
/// and may be called any number of times between updates.
#[derive(Debug, Clone)]
pub struct BandShifter {
    // Filter coefficients, fixed at construction.
    d0: f32,
    d1: Complex32,
    d2: Complex32,
    c1: Complex32,
    c2: Complex32,

    // Recursive filter state.
    s1: Complex32,
    s2: Complex32,
    y: Complex32,

    // Harmonic outputs, refreshed by update().
    up1: f32,
    down1: f32,
    down2: f32,

    harmonics: HarmonicState,
}

fn narrow(z: Complex64) -> Complex32 {
    Complex32::new(z.re as f32, z.im as f32)
}

impl BandShifter {
    /// Design the filter for one band.
    ///
    /// # Arguments
    /// * `center` - Band center frequency in Hz
    /// * `sample_rate` - Sample rate the band runs at, in Hz
    /// * `bw` - Band width in Hz
    /// * `strategy` - How the down-shifted harmonics are derived
    pub fn new(center: f32, sample_rate: f32, bw: f32, strategy: HarmonicStrategy) -> Self {
        // Coefficients are derived in f64 and narrowed once stored.
        let w0 = std::f64::consts::PI * bw as f64 / sample_rate as f64;
        let cos_w0 = w0.cos();
        let sin_w0 = w0.sin();
        let a0 = 1.0 + std::f64::consts::SQRT_2 * sin_w0 / 2.0;
        let g = (1.0 - cos_w0) / (2.0 * a0);

        let w1 = std::f64::consts::TAU * center as f64 / sample_rate as f64;
        let e1 = Complex64::from_polar(1.0, w1);
        let e2 = Complex64::from_polar(1.0, 2.0 * w1);

        let harmonics = match strategy {
            HarmonicStrategy::SignTracked => HarmonicState::SignTracked {
                down1: Complex32::new(0.0, 0.0),
                down1_sign: 1.0,
                down2_sign: 1.0,
            },
            HarmonicStrategy::RotatingPhase => HarmonicState::RotatingPhase {
                phase1: 0.0,
                phase2: 0.0,
                rate1: (-0.5 * w1) as f32,
                rate2: (-0.75 * w1) as f32,
            },
        };

        Self {
            d0: g as f32,
            d1: narrow(e1 * 2.0 * g),
            d2: narrow(e2 * g),
            c1: narrow(e1 * (-2.0 * cos_w0) / a0),
            c2: narrow(e2 * (1.0 - std::f64::consts::SQRT_2 * sin_w0 / 2.0) / a0),
            s1: Complex32::new(0.0, 0.0),
            s2: Complex32::new(0.0, 0.0),
            y: Complex32::new(0.0, 0.0),
            up1: 0.0,
            down1: 0.0,
            down2: 0.0,
            harmonics,
        }
    }

    /// Advance the filter by one sample and refresh the harmonic
    /// outputs. Must be called exactly once per band-rate sample.
    pub fn update(&mut self, sample: f32) {
        let prev_y = self.y;
        let y = self.s2 + self.d0 * sample;
        self.s2 = self.s1 + self.d1 * sample - self.c1 * y;
        self.s1 = self.d2 * sample - self.c2 * y;
        self.y = y;

        let a = y.re;
        let b = y.im;
        let mag2 = a * a + b * b;
        if mag2 < MAG_EPSILON {
            self.up1 = 0.0;
            self.down1 = 0.0;
            self.down2 = 0.0;
            match &mut self.harmonics {
                HarmonicState::SignTracked { down1, .. } => {
                    *down1 = Complex32::new(0.0, 0.0);
                }
                HarmonicState::RotatingPhase {
                    phase1,
                    phase2,
                    rate1,
                    rate2,
                } => {
                    *phase1 = wrap_phase(*phase1 + *rate1);
                    *phase2 = wrap_phase(*phase2 + *rate2);
                }
            }
            return;
        }

        let inv_mag = fast_inv_sqrt(mag2);

        // Octave up: real part of y * (y / |y|), i.e. (a^2 - b^2) / |y|.
        self.up1 = (a * a - b * b) * inv_mag;

        match &mut self.harmonics {
            HarmonicState::SignTracked {
                down1,
                down1_sign,
                down2_sign,
            } => {
                // A phase wrap of the analytic signal flips the
                // half-angle branch.
                if a < 0.0 && b.is_sign_negative() != prev_y.im.is_sign_negative() {
                    *down1_sign = -*down1_sign;
                }

                // Half-angle construction: cos(t/2), sin(t/2) from the
                // normalized phasor (cos t, sin t).
                let b_sign = if b < 0.0 { -1.0 } else { 1.0 };
                let x = 0.5 * a * inv_mag;
                let c = fast_sqrt(0.5 + x);
                let d = b_sign * fast_sqrt(0.5 - x);

                let sign = *down1_sign;
                let prev_down1 = *down1;
                *down1 = Complex32::new(a * c + b * d, b * c - a * d) * sign;

                if down1.re < 0.0 && down1.im.is_sign_negative() != prev_down1.im.is_sign_negative()
                {
                    *down2_sign = -*down2_sign;
                }
                self.down1 = down1.re;

                // Second half-angle step, off the octave-down signal.
                let a = down1.re;
                let b = down1.im;
                let b_sign = if b < 0.0 { -1.0 } else { 1.0 };
                let x = 0.5 * a * fast_inv_sqrt(a * a + b * b);
                let c = fast_sqrt(0.5 + x);
                let d = b_sign * fast_sqrt(0.5 - x);
                self.down2 = (a * c + b * d) * *down2_sign;
            }
            HarmonicState::RotatingPhase {
                phase1,
                phase2,
                rate1,
                rate2,
            } => {
                *phase1 = wrap_phase(*phase1 + *rate1);
                *phase2 = wrap_phase(*phase2 + *rate2);
                // Re(y * e^(j*phase)) shifts the band content down by
                // the accumulated rotation rate.
                self.down1 = a * fast_cos(*phase1) - b * fast_sin(*phase1);
                self.down2 = a * fast_cos(*phase2) - b * fast_sin(*phase2);
            }
        }
    }

    /// Octave-up component of the current analytic signal.
    #[inline]
    pub fn up1(&self) -> f32 {
        self.up1
    }

    /// Octave-down component of the current analytic signal.
    #[inline]
    pub fn down1(&self) -> f32 {
        self.down1
    }

    /// Two-octaves-down component of the current analytic signal.
    #[inline]
    pub fn down2(&self) -> f32 {
        self.down2
    }

    /// Reset filter state and harmonic outputs to silence, keeping the
    /// coefficients and strategy.
    pub fn clear(&mut self) {
        self.s1 = Complex32::new(0.0, 0.0);
        self.s2 = Complex32::new(0.0, 0.0);
        self.y = Complex32::new(0.0, 0.0);
        self.up1 = 0.0;
        self.down1 = 0.0;
        self.down2 = 0.0;
        match &mut self.harmonics {
            HarmonicState::SignTracked {
                down1,
                down1_sign,
                down2_sign,
            } => {
                *down1 = Complex32::new(0.0, 0.0);
                *down1_sign = 1.0;
                *down2_sign = 1.0;
            }
            HarmonicState::RotatingPhase { phase1, phase2, .. } => {
                *phase1 = 0.0;
                *phase2 = 0.0;
            }
        }
    }
}

/// Wrap an accumulated phase into `(-pi, pi]`. Rotation rates are at
/// most 3/4 of the top band's angular step, well below one period, so
/// a single correction suffices.
#[inline]
fn wrap_phase(phase: f32) -> f32 {
    if phase > PI {
        phase - TAU
    } else if phase <= -PI {
        phase + TAU
    } else {
        phase
    }
}
