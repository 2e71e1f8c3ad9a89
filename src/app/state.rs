// src/app/state.rs
//! Application state: the player driver plus everything the UI remembers
//! between frames.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui_image::picker::Picker;
use tracing::{debug, info};

use crate::{
    config::{Config, TrackInfo},
    player::{PlaybackState, PlayerDriver, PlayerSnapshot},
    ui::{
        keybindings::{key_to_action, mouse_to_action, PlayerAction},
        layout::{compute_layout, PlayerLayout},
        widgets::{
            render_artwork, render_player_panel, render_volume, ArtworkCache, EqualizerRenderer,
        },
    },
};

/// Main application state.
pub struct App {
    /// Simulated player and its timers
    pub driver: PlayerDriver,
    track: TrackInfo,
    /// Volume change per key press
    volume_step: f64,
    /// Layout of the last drawn frame, used for mouse hit testing
    layout: Option<PlayerLayout>,
    artwork: ArtworkCache,
    equalizer: EqualizerRenderer,
    /// Pointer is over the volume track
    hover: bool,
    /// Instant of the last `advance`
    now: Instant,
    /// Start of the current Playing stretch, for animations
    playing_since: Option<Instant>,
}

impl App {
    /// Create a paused player from configuration.
    pub fn new(config: &Config, picker: Picker, now: Instant) -> Self {
        info!(
            title = %config.track.title,
            duration_secs = config.player.duration_secs,
            "player created"
        );
        Self {
            driver: PlayerDriver::from_settings(&config.player),
            track: config.track.clone(),
            volume_step: config.ui.volume_step,
            layout: None,
            artwork: ArtworkCache::new(picker),
            equalizer: EqualizerRenderer::new(),
            hover: false,
            now,
            playing_since: None,
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.driver.snapshot()
    }

    pub fn layout(&self) -> Option<&PlayerLayout> {
        self.layout.as_ref()
    }

    pub fn is_hovering_volume(&self) -> bool {
        self.hover
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.apply(key_to_action(&key), now)
    }

    /// Handle a mouse event. Ignored until a frame has been drawn.
    pub fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let action = mouse_to_action(&mouse, layout);
        self.apply(action, now);
    }

    fn apply(&mut self, action: PlayerAction, now: Instant) -> bool {
        match action {
            PlayerAction::TogglePlay => self.driver.toggle(now),
            PlayerAction::ToggleMute => {
                self.driver.toggle_mute();
            }
            PlayerAction::VolumeUp => {
                self.driver.nudge_volume(self.volume_step);
            }
            PlayerAction::VolumeDown => {
                self.driver.nudge_volume(-self.volume_step);
            }
            PlayerAction::PointVolume(x) => {
                if self.driver.pointer(x) {
                    debug!(x, volume = self.driver.snapshot().volume, "volume from pointer");
                }
            }
            PlayerAction::Hover(over) => {
                self.hover = over && self.driver.snapshot().volume_enabled();
            }
            PlayerAction::Quit => {
                self.shutdown();
                return true; // Signal to quit
            }
            PlayerAction::None => {}
        }
        self.sync_animation(now);
        false
    }

    /// Fire due timers and move the animation clock to `now`.
    pub fn advance(&mut self, now: Instant) {
        self.driver.advance(now);
        self.now = now;
        self.sync_animation(now);
    }

    fn sync_animation(&mut self, now: Instant) {
        match (self.driver.state(), self.playing_since) {
            (PlaybackState::Playing, None) => self.playing_since = Some(now),
            (PlaybackState::Playing, Some(_)) => {}
            (_, _) => {
                self.playing_since = None;
                self.hover = false;
            }
        }
    }

    /// Seconds into the current Playing stretch.
    fn phase(&self) -> f32 {
        self.playing_since
            .map(|since| self.now.saturating_duration_since(since).as_secs_f32())
            .unwrap_or(0.0)
    }

    /// How long the event loop may wait before something needs attention.
    pub fn next_wakeup(&self, frame: Duration) -> Duration {
        match self.driver.next_deadline() {
            Some(deadline) => frame.min(deadline.saturating_duration_since(self.now)),
            None => frame,
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());
        // Track width is re-measured every frame, so resizes apply at once.
        self.driver.set_track_width(layout.volume_track.width);

        let snapshot = self.driver.snapshot();
        let phase = self.phase();

        render_player_panel(f, &layout, &snapshot, &self.track);
        render_artwork(f, layout.artwork, snapshot.state, phase, &mut self.artwork);
        self.equalizer.render(f, layout.equalizer, snapshot.state, phase);
        render_volume(f, &layout, &snapshot, self.hover);

        self.layout = Some(layout);
    }

    /// Cancel all player timers.
    pub fn shutdown(&mut self) {
        self.driver.shutdown();
        info!("player stopped");
    }
}
