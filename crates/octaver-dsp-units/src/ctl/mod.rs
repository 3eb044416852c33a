// SPDX-License-Identifier: LGPL-3.0-or-later

//! Control-side state for the octaver.
//!
//! This module provides the user-facing control layer:
//! - `LogMapping`: Logarithmic control-to-level mapping
//! - `EffectState` / `MixSnapshot`: Mix state and its per-block view
//! - `Footswitch`: Rising-edge detection for a momentary switch

pub mod footswitch;
pub mod mapping;
pub mod state;

pub use footswitch::Footswitch;
pub use mapping::LogMapping;
pub use state::{EffectState, MixSnapshot};
