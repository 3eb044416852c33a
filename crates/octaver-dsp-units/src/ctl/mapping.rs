// SPDX-License-Identifier: LGPL-3.0-or-later

//! Logarithmic control-to-level mapping.
//!
//! Maps a normalized control ratio onto an output level along an
//! exponential curve, so that equal control movements produce equal
//! decibel steps instead of equal linear steps.

use crate::units::db_to_gain;

/// Logarithmic mapping from a control ratio to a level.
///
/// `level(0.0)` returns `min`, `level(1.0)` returns `max`, and the
/// curve in between is exponential with a total span of `span_db`
/// decibels. With the default 20 dB span, the midpoint of the control
/// sits about 12 dB below the maximum.
///
/// # Examples
/// ```
/// use octaver_dsp_units::ctl::mapping::LogMapping;
///
/// let volume = LogMapping::new(0.0, 1.0, 20.0);
/// assert_eq!(volume.level(0.0), 0.0);
/// assert!((volume.level(1.0) - 1.0).abs() < 1e-6);
/// assert!(volume.level(0.5) < 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogMapping {
    min: f32,
    max: f32,
    span_db: f32,
    scale: f32,
}

impl LogMapping {
    /// Create a new mapping.
    ///
    /// # Arguments
    /// * `min` - Level at control ratio 0
    /// * `max` - Level at control ratio 1
    /// * `span_db` - Decibel span of the curve, must be positive
    ///
    /// # Panics
    /// Panics if `span_db` is not positive or `max` is not above `min`.
    pub fn new(min: f32, max: f32, span_db: f32) -> Self {
        assert!(span_db > 0.0, "span must be positive");
        assert!(max > min, "max must be above min");
        Self {
            min,
            max,
            span_db,
            scale: (db_to_gain(span_db) - 1.0).recip(),
        }
    }

    /// Map a control ratio to a level.
    ///
    /// The ratio is clamped to [0..1] before mapping.
    ///
    /// # Arguments
    /// * `ratio` - Normalized control position [0..1]
    ///
    /// # Returns
    /// Level between `min` and `max`
    pub fn level(&self, ratio: f32) -> f32 {
        let r = ratio.clamp(0.0, 1.0);
        self.min + (self.max - self.min) * (db_to_gain(self.span_db * r) - 1.0) * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_endpoints() {
        let mapping = LogMapping::new(0.0, 1.0, 20.0);
        assert_eq!(mapping.level(0.0), 0.0);
        assert_approx_eq!(f32, mapping.level(1.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_endpoints_with_offset_range() {
        let mapping = LogMapping::new(0.25, 2.0, 30.0);
        assert_eq!(mapping.level(0.0), 0.25);
        assert_approx_eq!(f32, mapping.level(1.0), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint_sits_below_linear() {
        let mapping = LogMapping::new(0.0, 1.0, 20.0);
        // (10^0.5 - 1) / (10 - 1)
        assert_approx_eq!(f32, mapping.level(0.5), 0.24025308, epsilon = 1e-6);
    }

    #[test]
    fn test_monotonically_increasing() {
        let mapping = LogMapping::new(0.0, 1.0, 20.0);
        let mut prev = mapping.level(0.0);
        for i in 1..=100 {
            let level = mapping.level(i as f32 / 100.0);
            assert!(level > prev, "level must rise with the control ratio");
            prev = level;
        }
    }

    #[test]
    fn test_out_of_range_ratios_clamp() {
        let mapping = LogMapping::new(0.0, 1.0, 20.0);
        assert_eq!(mapping.level(-0.5), mapping.level(0.0));
        assert_eq!(mapping.level(1.5), mapping.level(1.0));
    }

    #[test]
    #[should_panic(expected = "span must be positive")]
    fn test_zero_span_panics() {
        let _ = LogMapping::new(0.0, 1.0, 0.0);
    }
}
