// src/ui/layout.rs
//! Layout computation for the player card.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};

/// Widest the card gets, in cells.
pub const CARD_MAX_WIDTH: u16 = 64;
/// Card height including its border.
pub const CARD_HEIGHT: u16 = 17;
/// Artwork width; two cells per row keeps it roughly square.
const ARTWORK_WIDTH: u16 = 16;
const ARTWORK_HEIGHT: u16 = 8;
const CONTROL_WIDTH: u16 = 3;

/// Clickable regions of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotspot {
    Shuffle,
    Previous,
    Play,
    Next,
    Repeat,
    Mute,
    VolumeTrack,
}

/// Computed layout areas for rendering and hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLayout {
    /// Whole card including its border
    pub card: Rect,
    pub artwork: Rect,
    pub title: Rect,
    pub artist: Rect,
    pub equalizer: Rect,
    pub progress: Rect,
    /// Row holding the elapsed and total labels
    pub times: Rect,
    /// Shuffle, previous, play, next, repeat
    pub controls: [Rect; 5],
    pub mute: Rect,
    pub volume_track: Rect,
    pub volume_label: Rect,
}

impl PlayerLayout {
    pub fn play_button(&self) -> Rect {
        self.controls[2]
    }

    /// Which hotspot, if any, covers the cell at `column`, `row`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hotspot> {
        let pos = Position::new(column, row);
        const ORDER: [Hotspot; 5] = [
            Hotspot::Shuffle,
            Hotspot::Previous,
            Hotspot::Play,
            Hotspot::Next,
            Hotspot::Repeat,
        ];
        if let Some(i) = self.controls.iter().position(|r| r.contains(pos)) {
            return Some(ORDER[i]);
        }
        if self.mute.contains(pos) {
            Some(Hotspot::Mute)
        } else if self.volume_track.contains(pos) {
            Some(Hotspot::VolumeTrack)
        } else {
            None
        }
    }

    /// Pointer offset along the volume track for a mouse column.
    ///
    /// The cell under the pointer counts as covered, so the last cell maps to
    /// the full track width. Columns left of the track give zero or less.
    pub fn volume_offset(&self, column: u16) -> f64 {
        f64::from(column) - f64::from(self.volume_track.x) + 1.0
    }
}

/// Center the card in `area` and split it into its parts.
pub fn compute_layout(area: Rect) -> PlayerLayout {
    let width = area.width.min(CARD_MAX_WIDTH);
    let height = area.height.min(CARD_HEIGHT);
    let card = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    // Border plus one column of padding on each side
    let inner = Rect::new(
        card.x.saturating_add(2),
        card.y.saturating_add(1),
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ARTWORK_HEIGHT), // artwork + meta
            Constraint::Length(1),
            Constraint::Length(1), // progress
            Constraint::Length(1), // times
            Constraint::Length(1),
            Constraint::Length(1), // controls
            Constraint::Length(1),
            Constraint::Length(1), // volume
            Constraint::Min(0),
        ])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ARTWORK_WIDTH),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(rows[0]);

    let meta = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(top[2]);

    let controls = Layout::horizontal([Constraint::Length(CONTROL_WIDTH); 5])
        .flex(Flex::Center)
        .spacing(4)
        .split(rows[5]);

    let volume = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CONTROL_WIDTH),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(5),
        ])
        .split(rows[7]);

    PlayerLayout {
        card,
        artwork: top[0],
        title: meta[0],
        artist: meta[1],
        equalizer: meta[3],
        progress: rows[2],
        times: rows[3],
        controls: [controls[0], controls[1], controls[2], controls[3], controls[4]],
        mute: volume[0],
        volume_track: volume[2],
        volume_label: volume[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_centered_and_capped() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.card, Rect::new(18, 6, 64, 17));

        let small = compute_layout(Rect::new(0, 0, 40, 17));
        assert_eq!(small.card, Rect::new(0, 0, 40, 17));
    }

    #[test]
    fn volume_track_fills_the_row() {
        let layout = compute_layout(Rect::new(0, 0, 64, 17));
        // 64 - 4 padding - 3 mute - 1 gap - 5 label
        assert_eq!(layout.volume_track.width, 51);
        assert_eq!(layout.volume_track.y, layout.mute.y);
        assert_eq!(layout.artwork.width, 16);
        assert_eq!(layout.equalizer.height, 5);
    }

    #[test]
    fn hit_testing_finds_controls() {
        let layout = compute_layout(Rect::new(0, 0, 64, 17));
        let play = layout.play_button();
        assert_eq!(layout.hit(play.x + 1, play.y), Some(Hotspot::Play));
        assert_eq!(layout.hit(layout.mute.x, layout.mute.y), Some(Hotspot::Mute));
        let track = layout.volume_track;
        assert_eq!(layout.hit(track.x + 10, track.y), Some(Hotspot::VolumeTrack));
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn volume_offset_covers_the_last_cell() {
        let layout = compute_layout(Rect::new(0, 0, 64, 17));
        let track = layout.volume_track;
        assert_eq!(layout.volume_offset(track.x), 1.0);
        assert_eq!(layout.volume_offset(track.x + track.width - 1), f64::from(track.width));
        assert!(layout.volume_offset(track.x.saturating_sub(3)) <= 0.0);
    }
}
