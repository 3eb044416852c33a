// SPDX-License-Identifier: LGPL-3.0-or-later

//! Utility processing modules.

pub mod history;

pub use history::HistoryRing;
