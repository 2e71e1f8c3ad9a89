// src/ui/widgets/equalizer.rs
//! Decorative equalizer bars.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::{player::PlaybackState, ui::palette};

/// Heights are expressed against this reference height.
const FULL: f32 = 32.0;
const PAUSED_HEIGHT: f32 = 6.0;
const LOADING_HEIGHT: f32 = 16.0;
/// Per-bar (min, max) while playing.
const RANGES: [(f32, f32); 5] = [(10.0, 32.0), (8.0, 24.0), (6.0, 18.0), (10.0, 28.0), (8.0, 22.0)];
/// Seconds for one rise (or one fall) of a bar.
const HALF_PERIOD: f32 = 0.5;
/// Start offset between neighbouring bars, in seconds.
const STAGGER: f32 = 0.1;

pub const BAR_COUNT: usize = RANGES.len();

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Height of bar `index` as a fraction of the full height.
///
/// `phase` is seconds since playback started; it only matters while Playing,
/// where each bar swings between its min and max and back.
pub fn bar_fraction(state: PlaybackState, index: usize, phase: f32) -> f32 {
    let height = match state {
        PlaybackState::Paused => PAUSED_HEIGHT,
        PlaybackState::Loading => LOADING_HEIGHT,
        PlaybackState::Playing => {
            let (min, max) = RANGES[index % BAR_COUNT];
            let local = phase - STAGGER * index as f32;
            if local <= 0.0 {
                min
            } else {
                let swings = local / HALF_PERIOD;
                let frac = swings.fract();
                // Odd swings run back down
                let t = if (swings as u32) % 2 == 0 { frac } else { 1.0 - frac };
                min + (max - min) * ease_in_out(t)
            }
        }
    };
    (height / FULL).clamp(0.0, 1.0)
}

/// Renderer for the equalizer bars.
pub struct EqualizerRenderer {
    /// Bar width in characters
    bar_width: usize,
    /// Gap between bars
    bar_gap: usize,
    /// Partial blocks, one per eighth of a cell
    chars: [char; 8],
}

impl EqualizerRenderer {
    pub fn new() -> Self {
        Self {
            bar_width: 2,
            bar_gap: 1,
            chars: ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'],
        }
    }

    /// Render the bars bottom-aligned in `area`.
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, state: PlaybackState, phase: f32) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let fractions: Vec<f32> = (0..BAR_COUNT).map(|i| bar_fraction(state, i, phase)).collect();
        let content = self.build(&fractions, area.width as usize, area.height as usize);

        let mut style = Style::default().fg(palette::ACCENT_DEEP);
        if state == PlaybackState::Loading {
            style = style.add_modifier(Modifier::DIM);
        }
        f.render_widget(Paragraph::new(content).style(style), area);
    }

    /// Build the bars as one multi-line string, `height` rows of at most `width` chars.
    fn build(&self, fractions: &[f32], width: usize, height: usize) -> String {
        let mut rows = Vec::with_capacity(height);
        for row in 0..height {
            let mut line = String::with_capacity(width);
            for (i, &fraction) in fractions.iter().enumerate() {
                if i > 0 {
                    line.extend(std::iter::repeat_n(' ', self.bar_gap));
                }
                let ch = self.char_for_row(fraction, row, height);
                line.extend(std::iter::repeat_n(ch, self.bar_width));
            }
            rows.push(line.chars().take(width).collect::<String>());
        }
        rows.join("\n")
    }

    /// Character at `row` (0 = top) of a bar filled to `fraction`.
    fn char_for_row(&self, fraction: f32, row: usize, height: usize) -> char {
        let eighths = (fraction * height as f32 * 8.0).round() as usize;
        let row_from_bottom = height - row - 1;
        let full_rows = eighths / 8;

        if row_from_bottom < full_rows {
            '█'
        } else if row_from_bottom == full_rows && eighths % 8 > 0 {
            self.chars[eighths % 8 - 1]
        } else if row_from_bottom == 0 {
            // Bars never vanish completely
            self.chars[0]
        } else {
            ' '
        }
    }
}

impl Default for EqualizerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_heights_follow_state() {
        for i in 0..BAR_COUNT {
            assert_eq!(bar_fraction(PlaybackState::Paused, i, 3.0), 6.0 / 32.0);
            assert_eq!(bar_fraction(PlaybackState::Loading, i, 3.0), 0.5);
        }
    }

    #[test]
    fn playing_bars_swing_between_their_range() {
        // Bar 0 starts at its min, peaks after one half period and returns.
        assert_eq!(bar_fraction(PlaybackState::Playing, 0, 0.0), 10.0 / 32.0);
        assert!((bar_fraction(PlaybackState::Playing, 0, 0.499) - 1.0).abs() < 0.01);
        assert!((bar_fraction(PlaybackState::Playing, 0, 0.999) - 10.0 / 32.0).abs() < 0.01);

        for i in 0..BAR_COUNT {
            let (min, max) = RANGES[i];
            for step in 0..200 {
                let f = bar_fraction(PlaybackState::Playing, i, step as f32 * 0.013);
                assert!(f >= min / FULL - 1e-6 && f <= max / FULL + 1e-6);
            }
        }
    }

    #[test]
    fn bars_are_staggered() {
        // Bar 2 has not started at 0.15s.
        assert_eq!(bar_fraction(PlaybackState::Playing, 2, 0.15), 6.0 / 32.0);
        assert!(bar_fraction(PlaybackState::Playing, 1, 0.15) > 8.0 / 32.0);
    }

    #[test]
    fn build_fills_from_the_bottom() {
        let r = EqualizerRenderer::new();
        let out = r.build(&[1.0, 0.5, 0.0], 8, 2);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows, vec!["██      ", "██ ██ ▁▁"]);
    }
}
