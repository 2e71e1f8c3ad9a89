// src/ui/widgets/volume.rs
//! Mute button and volume slider.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::player_panel::track_line;
use crate::{
    player::PlayerSnapshot,
    ui::{icons, layout::PlayerLayout, palette},
};

/// Render the volume row. `hovered` highlights the fill while the pointer is over the track.
pub fn render_volume(
    f: &mut Frame<'_>,
    layout: &PlayerLayout,
    snapshot: &PlayerSnapshot,
    hovered: bool,
) {
    let enabled = snapshot.volume_enabled();
    let mut base = Style::default().fg(palette::TEXT_FAINT);
    if !enabled {
        base = base.add_modifier(Modifier::DIM);
    }

    f.render_widget(
        Paragraph::new(icons::volume(snapshot.muted))
            .style(base)
            .alignment(Alignment::Center),
        layout.mute,
    );

    let fill = if hovered && enabled { palette::ACCENT } else { palette::TEXT_DIM };
    f.render_widget(
        Paragraph::new(track_line(
            snapshot.volume,
            layout.volume_track.width,
            base.fg(fill),
            base.fg(palette::TRACK),
        )),
        layout.volume_track,
    );

    f.render_widget(
        Paragraph::new(format!("{}%", snapshot.volume_percent()))
            .style(base)
            .alignment(Alignment::Right),
        layout.volume_label,
    );
}
