// SPDX-License-Identifier: LGPL-3.0-or-later

//! # octaver-dsp-lib
//!
//! Low-level primitives for the octaver signal path.
//!
//! This crate provides the foundational operations used by
//! `octaver-dsp-units` to build the complete octave-shifting engine:
//!
//! - **Fast math**: bit-trick inverse square root and parabolic
//!   sine/cosine approximations, tuned for per-sample use
//! - **Buffer operations**: copy and fill
//! - **Mixing**: two-source weighted mixing
//! - **Float utilities**: denormal/NaN/infinity flushing
//!
//! ## Design
//!
//! Buffer-processing functions use runtime SIMD dispatch via the
//! `multiversion` crate: each annotated function is compiled for
//! AVX2+FMA, AVX, SSE4.1, and NEON targets, with the best variant
//! selected at startup. The fast-math functions stay scalar; their
//! callers are serial recursive filter updates with no lanes to fill.

pub mod copy;
pub mod fastmath;
pub mod float;
pub mod mix;
