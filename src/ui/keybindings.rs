// src/ui/keybindings.rs
//! Keyboard and mouse input mapped to player actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::layout::{Hotspot, PlayerLayout};

/// Actions derived from input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    TogglePlay,
    ToggleMute,
    VolumeUp,
    VolumeDown,
    /// Pointer pressed or dragged at this offset along the volume track
    PointVolume(f64),
    /// Pointer moved; whether it is over the volume track
    Hover(bool),
    Quit,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: &KeyEvent) -> PlayerAction {
    if key.kind == KeyEventKind::Release {
        return PlayerAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return PlayerAction::Quit;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => PlayerAction::TogglePlay,
        KeyCode::Char('m') => PlayerAction::ToggleMute,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => PlayerAction::VolumeUp,
        KeyCode::Left | KeyCode::Char('-') => PlayerAction::VolumeDown,
        KeyCode::Char('q') | KeyCode::Esc => PlayerAction::Quit,
        _ => PlayerAction::None,
    }
}

/// Convert a mouse event to an action, hit testing against the last layout.
pub fn mouse_to_action(mouse: &MouseEvent, layout: &PlayerLayout) -> PlayerAction {
    let hit = layout.hit(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Some(Hotspot::Play) => PlayerAction::TogglePlay,
            Some(Hotspot::Mute) => PlayerAction::ToggleMute,
            Some(Hotspot::VolumeTrack) => {
                PlayerAction::PointVolume(layout.volume_offset(mouse.column))
            }
            _ => PlayerAction::None,
        },
        // Drags keep steering past either end of the track while on its row.
        MouseEventKind::Drag(MouseButton::Left) if mouse.row == layout.volume_track.y => {
            PlayerAction::PointVolume(layout.volume_offset(mouse.column))
        }
        MouseEventKind::Moved => PlayerAction::Hover(hit == Some(Hotspot::VolumeTrack)),
        _ => PlayerAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::compute_layout;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn keys_map_to_actions() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_to_action(&key(KeyCode::Char(' '))), PlayerAction::TogglePlay);
        assert_eq!(key_to_action(&key(KeyCode::Char('m'))), PlayerAction::ToggleMute);
        assert_eq!(key_to_action(&key(KeyCode::Right)), PlayerAction::VolumeUp);
        assert_eq!(key_to_action(&key(KeyCode::Char('-'))), PlayerAction::VolumeDown);
        assert_eq!(key_to_action(&key(KeyCode::Esc)), PlayerAction::Quit);
        assert_eq!(
            key_to_action(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            PlayerAction::Quit
        );
        assert_eq!(key_to_action(&key(KeyCode::Char('x'))), PlayerAction::None);
    }

    #[test]
    fn clicks_hit_controls() {
        let layout = compute_layout(Rect::new(0, 0, 64, 17));
        let play = layout.play_button();
        assert_eq!(
            mouse_to_action(
                &mouse(MouseEventKind::Down(MouseButton::Left), play.x, play.y),
                &layout
            ),
            PlayerAction::TogglePlay
        );
        assert_eq!(
            mouse_to_action(
                &mouse(MouseEventKind::Down(MouseButton::Left), layout.mute.x, layout.mute.y),
                &layout
            ),
            PlayerAction::ToggleMute
        );

        let track = layout.volume_track;
        assert_eq!(
            mouse_to_action(
                &mouse(MouseEventKind::Down(MouseButton::Left), track.x + 4, track.y),
                &layout
            ),
            PlayerAction::PointVolume(5.0)
        );
    }

    #[test]
    fn drag_past_the_track_start_reaches_zero() {
        let layout = compute_layout(Rect::new(0, 0, 64, 17));
        let track = layout.volume_track;
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 0, track.y);
        match mouse_to_action(&drag, &layout) {
            PlayerAction::PointVolume(x) => assert!(x <= 0.0),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn motion_reports_hover() {
        let layout = compute_layout(Rect::new(0, 0, 64, 17));
        let track = layout.volume_track;
        assert_eq!(
            mouse_to_action(&mouse(MouseEventKind::Moved, track.x, track.y), &layout),
            PlayerAction::Hover(true)
        );
        assert_eq!(
            mouse_to_action(&mouse(MouseEventKind::Moved, 0, 0), &layout),
            PlayerAction::Hover(false)
        );
    }
}
