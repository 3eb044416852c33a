// SPDX-License-Identifier: LGPL-3.0-or-later

//! Mix state shared between the control side and the audio path.
//!
//! [`EffectState`] is owned by the control side and mutated by user
//! input at control rate. The audio path never reads it directly;
//! instead it receives a [`MixSnapshot`] captured once per block, so
//! one block always runs under one consistent set of gains.

use crate::ctl::mapping::LogMapping;

/// Immutable per-block view of the mix state.
///
/// All gain fields are linear levels, already mapped from their
/// control ratios. A default snapshot is bypassed and silent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MixSnapshot {
    /// Effect enabled. When false the engine writes the dry input
    /// through unchanged.
    pub enabled: bool,
    /// Dry signal level.
    pub dry: f32,
    /// Octave-up level.
    pub up1: f32,
    /// One-octave-down level.
    pub down1: f32,
    /// Two-octaves-down level.
    pub down2: f32,
}

/// Control-side mix state.
///
/// Stores the raw control ratios and maps them onto linear levels
/// through a shared logarithmic volume curve.
///
/// # Examples
/// ```
/// use octaver_dsp_units::ctl::state::EffectState;
///
/// let mut state = EffectState::new();
/// state.set_dry_ratio(1.0).set_down1_ratio(0.5).set_enabled(true);
///
/// let mix = state.snapshot();
/// assert!(mix.enabled);
/// assert!((mix.dry - 1.0).abs() < 1e-6);
/// assert!(mix.down1 < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct EffectState {
    enabled: bool,
    dry_ratio: f32,
    up1_ratio: f32,
    down1_ratio: f32,
    down2_ratio: f32,
    volume: LogMapping,
}

impl Default for EffectState {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectState {
    /// Decibel span of the volume controls.
    const VOLUME_SPAN_DB: f32 = 20.0;

    /// Create a new state, bypassed with all controls at zero.
    pub fn new() -> Self {
        Self {
            enabled: false,
            dry_ratio: 0.0,
            up1_ratio: 0.0,
            down1_ratio: 0.0,
            down2_ratio: 0.0,
            volume: LogMapping::new(0.0, 1.0, Self::VOLUME_SPAN_DB),
        }
    }

    /// Set the dry control ratio [0..1].
    pub fn set_dry_ratio(&mut self, ratio: f32) -> &mut Self {
        self.dry_ratio = ratio;
        self
    }

    /// Set the octave-up control ratio [0..1].
    pub fn set_up1_ratio(&mut self, ratio: f32) -> &mut Self {
        self.up1_ratio = ratio;
        self
    }

    /// Set the one-octave-down control ratio [0..1].
    pub fn set_down1_ratio(&mut self, ratio: f32) -> &mut Self {
        self.down1_ratio = ratio;
        self
    }

    /// Set the two-octaves-down control ratio [0..1].
    pub fn set_down2_ratio(&mut self, ratio: f32) -> &mut Self {
        self.down2_ratio = ratio;
        self
    }

    /// Enable or bypass the effect.
    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    /// Flip the enabled flag.
    ///
    /// # Returns
    /// The new enabled state
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Check whether the effect is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Dry level after the volume curve.
    pub fn dry_level(&self) -> f32 {
        self.volume.level(self.dry_ratio)
    }

    /// Octave-up level after the volume curve.
    pub fn up1_level(&self) -> f32 {
        self.volume.level(self.up1_ratio)
    }

    /// One-octave-down level after the volume curve.
    pub fn down1_level(&self) -> f32 {
        self.volume.level(self.down1_ratio)
    }

    /// Two-octaves-down level after the volume curve.
    pub fn down2_level(&self) -> f32 {
        self.volume.level(self.down2_ratio)
    }

    /// Capture the current state for one audio block.
    pub fn snapshot(&self) -> MixSnapshot {
        MixSnapshot {
            enabled: self.enabled,
            dry: self.dry_level(),
            up1: self.up1_level(),
            down1: self.down1_level(),
            down2: self.down2_level(),
        }
    }
}
