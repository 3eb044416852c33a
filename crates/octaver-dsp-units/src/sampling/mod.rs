// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fixed-ratio resampling between the I/O rate and the band rate.

pub mod decimator;
pub mod interpolator;

pub use decimator::Decimator;
pub use interpolator::Interpolator;
