// src/ui/widgets/artwork.rs
//! Album artwork: a generated gradient drawn through ratatui-image.

use image::{DynamicImage, Rgb, RgbImage};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use ratatui_image::{picker::Picker, protocol::Protocol, Image, Resize};

use crate::{
    player::PlaybackState,
    ui::{icons, palette},
};

/// Seconds per full turn of the disc glyph while playing.
const SPIN_PERIOD: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Bright,
    Deep,
}

impl Tone {
    fn for_state(state: PlaybackState) -> Self {
        if state == PlaybackState::Loading { Tone::Deep } else { Tone::Bright }
    }
}

/// Size factor of the artwork per state.
pub fn scale_for(state: PlaybackState) -> f32 {
    match state {
        PlaybackState::Paused => 0.95,
        PlaybackState::Loading => 0.9,
        PlaybackState::Playing => 1.0,
    }
}

/// `area` shrunk by the state's scale, kept centered.
pub fn scaled_area(area: Rect, state: PlaybackState) -> Rect {
    let s = scale_for(state);
    let width = ((f32::from(area.width) * s).round() as u16).min(area.width);
    let height = ((f32::from(area.height) * s).round() as u16).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Diagonal two-stop gradient of the given pixel size.
pub fn gradient(width: u32, height: u32, from: [u8; 3], to: [u8; 3]) -> DynamicImage {
    let span = (width + height).saturating_sub(2).max(1) as f32;
    let img = RgbImage::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / span;
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb([mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])])
    });
    DynamicImage::ImageRgb8(img)
}

/// Keeps the encoded artwork between frames; it only changes with the tone
/// or the target area.
pub struct ArtworkCache {
    picker: Picker,
    key: Option<(Tone, Rect)>,
    protocol: Option<Protocol>,
}

impl ArtworkCache {
    pub fn new(picker: Picker) -> Self {
        Self {
            picker,
            key: None,
            protocol: None,
        }
    }

    fn protocol(&mut self, tone: Tone, area: Rect) -> Option<&Protocol> {
        if self.key != Some((tone, area)) {
            let (from, to) = match tone {
                Tone::Bright => palette::ART_PLAYING,
                Tone::Deep => palette::ART_LOADING,
            };
            // Terminal cells are about twice as tall as wide
            let img = gradient(u32::from(area.width) * 10, u32::from(area.height) * 20, from, to);
            let size = Rect::new(0, 0, area.width, area.height);
            self.protocol = self.picker.new_protocol(img, size, Resize::Fit(None)).ok();
            self.key = Some((tone, area));
        }
        self.protocol.as_ref()
    }
}

/// Render the artwork panel.
pub fn render_artwork(
    f: &mut Frame<'_>,
    area: Rect,
    state: PlaybackState,
    phase: f32,
    cache: &mut ArtworkCache,
) {
    let art = scaled_area(area, state);
    if art.width == 0 || art.height == 0 {
        return;
    }

    if let Some(proto) = cache.protocol(Tone::for_state(state), art) {
        f.render_widget(Image::new(proto), art);
    }

    let (glyph, style) = match state {
        PlaybackState::Playing => {
            let turns = (phase / SPIN_PERIOD).fract();
            let frame = (turns * icons::DISC_FRAMES.len() as f32) as usize;
            (
                icons::DISC_FRAMES[frame % icons::DISC_FRAMES.len()],
                Style::default().fg(palette::CARD),
            )
        }
        PlaybackState::Paused => (icons::MUSIC, Style::default().fg(palette::CARD)),
        PlaybackState::Loading => (
            icons::MUSIC,
            Style::default().fg(palette::CARD).add_modifier(Modifier::DIM),
        ),
    };
    let center = Rect::new(art.x, art.y + art.height / 2, art.width, 1);
    f.render_widget(
        Paragraph::new(glyph).style(style).alignment(Alignment::Center),
        center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_shrinks_when_not_playing() {
        let area = Rect::new(0, 0, 16, 8);
        assert_eq!(scaled_area(area, PlaybackState::Playing), area);
        assert_eq!(scaled_area(area, PlaybackState::Paused), Rect::new(0, 0, 15, 8));
        assert_eq!(scaled_area(area, PlaybackState::Loading), Rect::new(1, 0, 14, 7));
    }

    #[test]
    fn gradient_runs_corner_to_corner() {
        let img = gradient(10, 10, [0, 0, 0], [200, 100, 50]).to_rgb8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(9, 9).0, [200, 100, 50]);
        assert_eq!(img.get_pixel(9, 0), img.get_pixel(0, 9));
    }
}
