// SPDX-License-Identifier: LGPL-3.0-or-later

//! # octaver-dsp-units
//!
//! Polyphonic octave shifter built from multirate analytic-signal
//! processing.
//!
//! This crate provides the complete signal path of a guitar octaver on
//! top of [`octaver_dsp_lib`]. The input is decimated 4:1, analyzed by
//! an 80-band complex band-pass bank, shifted one octave up and one
//! and two octaves down by phase algebra on each band's analytic
//! signal, then interpolated back to the I/O rate and mixed with the
//! dry input. It includes:
//!
//! - **Engine**: [`engine::OctaverEngine`], the full per-channel chain
//! - **Bands**: Complex band-pass shifters, bank, and frequency layout
//! - **Sampling**: Two-stage half-band decimator and interpolator
//! - **Control**: Mix state, level mapping, footswitch edge detection
//! - **Utilities**: Sample history ring, unit conversions
//!
//! All processing runs at a fixed 48 kHz I/O rate; the band bank runs
//! at 12 kHz.

// Foundational modules
pub mod consts;
pub mod units;
pub mod util;

// Signal path
pub mod bands;
pub mod engine;
pub mod sampling;

// Control side
pub mod ctl;
