// SPDX-License-Identifier: LGPL-3.0-or-later

//! Analysis band layout, per-band analytic filters, and the band bank.

pub mod bank;
pub mod layout;
pub mod shifter;

pub use bank::BandBank;
pub use shifter::{BandShifter, HarmonicStrategy};
