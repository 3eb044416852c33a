// SPDX-License-Identifier: LGPL-3.0-or-later

//! Momentary footswitch edge detection.
//!
//! Turns the level of a momentary switch into single-shot press
//! events, so holding the switch down does not retrigger.

/// Rising-edge detector for a momentary footswitch.
///
/// Feed the debounced switch level into [`update`](Self::update) on
/// every control tick; it reports true exactly once per press.
///
/// # Examples
/// ```
/// use octaver_dsp_units::ctl::footswitch::Footswitch;
///
/// let mut switch = Footswitch::new();
/// assert!(switch.update(true));   // press fires
/// assert!(!switch.update(true));  // holding does not
/// assert!(!switch.update(false)); // release does not
/// assert!(switch.update(true));   // next press fires again
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Footswitch {
    pressed: bool,
}

impl Footswitch {
    /// Create a new footswitch in the released state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the current switch level.
    ///
    /// # Arguments
    /// * `pressed` - Current debounced switch level
    ///
    /// # Returns
    /// true on the rising edge, false otherwise
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.pressed;
        self.pressed = pressed;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_released() {
        let mut switch = Footswitch::new();
        assert!(!switch.update(false));
    }

    #[test]
    fn test_press_fires_once() {
        let mut switch = Footswitch::new();
        assert!(switch.update(true));
        assert!(!switch.update(true));
        assert!(!switch.update(true));
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut switch = Footswitch::new();
        switch.update(true);
        assert!(!switch.update(false));
        assert!(!switch.update(false));
    }

    #[test]
    fn test_refires_after_release() {
        let mut switch = Footswitch::new();
        assert!(switch.update(true));
        switch.update(false);
        assert!(switch.update(true));
    }
}
