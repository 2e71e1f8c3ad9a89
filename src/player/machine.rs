// src/player/machine.rs
//! Player state machine: pure transitions, no clocks and no timers.

use std::time::Duration;

use tracing::debug;

use super::{
    clock::PlaybackClock,
    gate::{GateOutcome, TransitionGate},
    state::{PlaybackState, PlayerSnapshot},
    volume::VolumeController,
};

/// All state owned by the player widget.
///
/// The driver decides *when* transitions run; this type only decides *what*
/// they do.
#[derive(Debug, Clone)]
pub struct PlayerMachine {
    state: PlaybackState,
    elapsed: Duration,
    clock: PlaybackClock,
    gate: TransitionGate,
    volume: VolumeController,
    /// Measured width of the volume slider in cells
    track_width: u16,
}

impl PlayerMachine {
    pub fn new(clock: PlaybackClock, gate: TransitionGate, volume: VolumeController) -> Self {
        Self {
            state: PlaybackState::Paused,
            elapsed: Duration::ZERO,
            clock,
            gate,
            volume,
            track_width: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn gate(&self) -> &TransitionGate {
        &self.gate
    }

    pub fn volume(&self) -> &VolumeController {
        &self.volume
    }

    pub fn track_width(&self) -> u16 {
        self.track_width
    }

    fn volume_enabled(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Handle a play/pause toggle. A returned target means the gate delay must
    /// be (re)armed.
    pub fn request_toggle(&mut self) -> GateOutcome {
        let from = self.state;
        let outcome = self.gate.request(from);
        if outcome.target().is_some() {
            self.state = PlaybackState::Loading;
        }
        debug!(from = from.label(), ?outcome, "toggle requested");
        outcome
    }

    /// Resolve the gate delay. Returns the state entered, if one was pending.
    pub fn complete_transition(&mut self) -> Option<PlaybackState> {
        if self.state != PlaybackState::Loading {
            self.gate.reset();
            return None;
        }
        let target = self.gate.complete()?;
        self.state = target;
        debug!(to = target.label(), "transition completed");
        Some(target)
    }

    /// Advance the elapsed time by one tick. Does nothing unless Playing.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.elapsed = self.clock.advance(self.elapsed);
        true
    }

    pub fn set_volume(&mut self, v: f64) {
        self.volume.set(v);
    }

    /// Toggle mute. No-op unless Playing.
    pub fn toggle_mute(&mut self) -> bool {
        if !self.volume_enabled() {
            return false;
        }
        self.volume.toggle_mute();
        debug!(
            muted = self.volume.is_muted(),
            level = self.volume.level(),
            "mute toggled"
        );
        true
    }

    /// Set the volume from a pointer offset along the slider.
    ///
    /// Ignored unless Playing, and until the track width is known.
    pub fn set_volume_from_pointer(&mut self, x: f64) -> bool {
        if !self.volume_enabled() {
            return false;
        }
        self.volume.set_from_pointer(x, self.track_width).is_some()
    }

    /// Step the volume by `delta`. No-op unless Playing.
    pub fn nudge_volume(&mut self, delta: f64) -> bool {
        if !self.volume_enabled() {
            return false;
        }
        self.volume.nudge(delta);
        true
    }

    pub fn set_track_width(&mut self, width: u16) {
        if width != self.track_width {
            debug!(width, "volume track measured");
            self.track_width = width;
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            state: self.state,
            pending: self.gate.pending(),
            elapsed: self.elapsed,
            duration: self.clock.duration(),
            progress: self.clock.progress(self.elapsed),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            track_width: self.track_width,
        }
    }
}
