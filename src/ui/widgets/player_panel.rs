// src/ui/widgets/player_panel.rs
//! Player card: border, track labels, progress and playback controls.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::{
    config::TrackInfo,
    player::{format_time, PlaybackState, PlayerSnapshot},
    ui::{icons, layout::PlayerLayout, palette},
};

/// Characters of the progress and volume tracks.
pub const TRACK_FILLED: char = '━';
pub const TRACK_EMPTY: char = '─';

/// A horizontal track filled to `ratio`, `width` cells long.
pub fn track_line(ratio: f64, width: u16, filled: Style, empty: Style) -> Line<'static> {
    let width = usize::from(width);
    let cells = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    Line::from(vec![
        Span::styled(TRACK_FILLED.to_string().repeat(cells), filled),
        Span::styled(TRACK_EMPTY.to_string().repeat(width - cells), empty),
    ])
}

/// Render the card chrome, labels, progress bar and control row.
pub fn render_player_panel(
    f: &mut Frame<'_>,
    layout: &PlayerLayout,
    snapshot: &PlayerSnapshot,
    track: &TrackInfo,
) {
    let border = if snapshot.state == PlaybackState::Playing {
        palette::ACCENT
    } else {
        palette::TEXT_FAINT
    };
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(palette::CARD)),
        layout.card,
    );

    f.render_widget(
        Paragraph::new(track.title.as_str())
            .style(Style::default().fg(palette::TEXT).add_modifier(Modifier::BOLD)),
        layout.title,
    );
    f.render_widget(
        Paragraph::new(track.artist.as_str()).style(Style::default().fg(palette::TEXT_DIM)),
        layout.artist,
    );

    render_progress(f, layout, snapshot);
    render_controls(f, layout, snapshot.state);
}

fn render_progress(f: &mut Frame<'_>, layout: &PlayerLayout, snapshot: &PlayerSnapshot) {
    let fill = if snapshot.state == PlaybackState::Playing {
        palette::ACCENT
    } else {
        palette::TEXT_DIM
    };
    f.render_widget(
        Paragraph::new(track_line(
            snapshot.progress,
            layout.progress.width,
            Style::default().fg(fill),
            Style::default().fg(palette::TRACK),
        )),
        layout.progress,
    );

    f.render_widget(
        Paragraph::new(format_time(snapshot.elapsed)).style(Style::default().fg(palette::TEXT_DIM)),
        layout.times,
    );
    f.render_widget(
        Paragraph::new(format_time(snapshot.duration))
            .style(Style::default().fg(palette::TEXT_FAINT))
            .alignment(Alignment::Right),
        layout.times,
    );
}

fn render_controls(f: &mut Frame<'_>, layout: &PlayerLayout, state: PlaybackState) {
    let loading = state == PlaybackState::Loading;
    let side = if loading {
        Style::default().fg(palette::TEXT_FAINT)
    } else {
        Style::default().fg(palette::TEXT_DIM)
    };
    let play = Style::default()
        .fg(Color::White)
        .bg(if loading { palette::TEXT_FAINT } else { palette::ACCENT })
        .add_modifier(Modifier::BOLD);

    let glyphs = [
        (icons::SHUFFLE, side),
        (icons::PREVIOUS, side),
        (icons::play_button(state), play),
        (icons::NEXT, side),
        (icons::REPEAT, side),
    ];
    for ((glyph, style), area) in glyphs.into_iter().zip(layout.controls) {
        f.render_widget(
            Paragraph::new(glyph).style(style).alignment(Alignment::Center),
            area,
        );
    }
}
