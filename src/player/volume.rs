// src/player/volume.rs
//! Volume level and mute flag.

/// Holds the volume level, the mute flag and the level restored on un-mute.
///
/// `muted` is re-derived from the level on every `set`, while `toggle_mute`
/// keeps its own remembered level. Dragging to exactly zero therefore mutes
/// without touching the remembered level.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeController {
    level: f64,
    muted: bool,
    /// Last nonzero level, restored by un-mute
    remembered: Option<f64>,
    /// Restored when nothing was remembered
    default_restore: f64,
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl VolumeController {
    pub fn new(initial: f64, default_restore: f64) -> Self {
        let mut controller = Self {
            level: 0.0,
            muted: true,
            remembered: None,
            default_restore: clamp_unit(default_restore),
        };
        controller.set(initial);
        controller
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Set the level, clamped to `[0, 1]`.
    pub fn set(&mut self, v: f64) {
        let v = clamp_unit(v);
        if v > 0.0 {
            self.remembered = Some(v);
        }
        self.level = v;
        self.muted = v == 0.0;
    }

    /// Mute (remembering the current level) or restore the remembered level.
    pub fn toggle_mute(&mut self) {
        if self.muted {
            let restore = self
                .remembered
                .filter(|v| *v > 0.0)
                .unwrap_or(self.default_restore);
            self.set(restore);
        } else {
            if self.level > 0.0 {
                self.remembered = Some(self.level);
            }
            self.level = 0.0;
            self.muted = true;
        }
    }

    /// Map a pointer offset along the slider to a level.
    ///
    /// Returns the new level, or `None` when the track has not been measured yet.
    pub fn set_from_pointer(&mut self, x: f64, track_width: u16) -> Option<f64> {
        if track_width == 0 {
            return None;
        }
        let v = clamp_unit(x / f64::from(track_width));
        if v > 0.0 && self.muted {
            self.muted = false;
        }
        self.set(v);
        Some(self.level)
    }

    /// Move the level by `delta`.
    pub fn nudge(&mut self, delta: f64) {
        self.set(self.level + delta);
    }
}

impl Default for VolumeController {
    fn default() -> Self {
        Self::new(0.55, 0.55)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clamps_to_unit_range() {
        let mut v = VolumeController::default();
        for (input, expected) in [(-1.0, 0.0), (0.0, 0.0), (0.3, 0.3), (1.0, 1.0), (7.5, 1.0)] {
            v.set(input);
            assert_eq!(v.level(), expected);
            assert_eq!(v.is_muted(), expected == 0.0);
        }
        v.set(f64::NAN);
        assert_eq!(v.level(), 0.0);
        v.set(f64::INFINITY);
        assert_eq!(v.level(), 1.0);
    }

    #[test]
    fn mute_then_unmute_restores_level() {
        let mut v = VolumeController::default();
        v.toggle_mute();
        assert_eq!(v.level(), 0.0);
        assert!(v.is_muted());
        v.toggle_mute();
        assert_eq!(v.level(), 0.55);
        assert!(!v.is_muted());

        v.set(0.8);
        v.toggle_mute();
        v.toggle_mute();
        assert_eq!(v.level(), 0.8);
    }

    #[test]
    fn unmute_without_memory_uses_default_restore() {
        let mut v = VolumeController::new(0.0, 0.55);
        assert!(v.is_muted());
        v.toggle_mute();
        assert_eq!(v.level(), 0.55);
    }

    #[test]
    fn dragging_to_zero_keeps_last_nonzero_level() {
        let mut v = VolumeController::default();
        v.set(0.4);
        v.set(0.0);
        assert!(v.is_muted());
        v.toggle_mute();
        assert_eq!(v.level(), 0.4);
    }

    #[test]
    fn pointer_maps_offset_over_width() {
        let mut v = VolumeController::default();
        assert_eq!(v.set_from_pointer(100.0, 200), Some(0.5));
        assert_eq!(v.set_from_pointer(-20.0, 200), Some(0.0));
        assert!(v.is_muted());
        assert_eq!(v.set_from_pointer(500.0, 200), Some(1.0));
        assert!(!v.is_muted());
    }

    #[test]
    fn pointer_ignored_before_measurement() {
        let mut v = VolumeController::default();
        assert_eq!(v.set_from_pointer(100.0, 0), None);
        assert_eq!(v.level(), 0.55);
    }

    #[test]
    fn pointer_clears_mute() {
        let mut v = VolumeController::default();
        v.toggle_mute();
        v.set_from_pointer(50.0, 200);
        assert!(!v.is_muted());
        assert_eq!(v.level(), 0.25);
    }
}
