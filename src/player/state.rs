// src/player/state.rs
//! Playback state and the read-only snapshot handed to the renderer.

use std::time::Duration;

/// Mode of the simulated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
    /// Transient state between a toggle and the resulting Paused/Playing.
    Loading,
}

impl PlaybackState {
    /// The state a toggle leads to, or `None` while Loading.
    pub fn toggled(self) -> Option<Self> {
        match self {
            PlaybackState::Paused => Some(PlaybackState::Playing),
            PlaybackState::Playing => Some(PlaybackState::Paused),
            PlaybackState::Loading => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Paused => "paused",
            PlaybackState::Playing => "playing",
            PlaybackState::Loading => "loading",
        }
    }
}

/// Copy of everything the render layer needs, taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub state: PlaybackState,
    /// Target of the pending gate delay, if Loading
    pub pending: Option<PlaybackState>,
    pub elapsed: Duration,
    pub duration: Duration,
    /// `elapsed / duration` in `[0, 1]`
    pub progress: f64,
    pub volume: f64,
    pub muted: bool,
    pub track_width: u16,
}

impl PlayerSnapshot {
    /// Volume input is only accepted while Playing.
    pub fn volume_enabled(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_loading(&self) -> bool {
        self.state == PlaybackState::Loading
    }

    pub fn progress_percent(&self) -> u16 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u16
    }

    pub fn volume_percent(&self) -> u16 {
        (self.volume.clamp(0.0, 1.0) * 100.0).round() as u16
    }
}
