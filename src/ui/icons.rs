// src/ui/icons.rs
//! Nerd-font glyphs for the player controls.

use crate::player::PlaybackState;

pub const SHUFFLE: &str = "\u{f074}";
pub const PREVIOUS: &str = "\u{f048}";
pub const NEXT: &str = "\u{f051}";
pub const REPEAT: &str = "\u{f01e}";
pub const MUSIC: &str = "\u{f001}";
pub const VOLUME_ON: &str = "\u{f028}";
pub const VOLUME_OFF: &str = "\u{f026}";

/// Frames of the spinning disc shown over the artwork while playing.
pub const DISC_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Glyph for the main button: what pressing it would do, or a spinner while Loading.
pub fn play_button(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Paused => "\u{f04b}",  // play
        PlaybackState::Playing => "\u{f04c}", // pause
        PlaybackState::Loading => "\u{f110}", // spinner
    }
}

pub fn volume(muted: bool) -> &'static str {
    if muted { VOLUME_OFF } else { VOLUME_ON }
}
