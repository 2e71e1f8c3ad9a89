// src/ui/palette.rs
//! Fixed colors of the player card.

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(168, 85, 247);
pub const ACCENT_DEEP: Color = Color::Rgb(126, 34, 206);
pub const TEXT: Color = Color::Rgb(240, 240, 242);
pub const TEXT_DIM: Color = Color::Rgb(140, 140, 144);
pub const TEXT_FAINT: Color = Color::Rgb(90, 90, 94);
pub const TRACK: Color = Color::Rgb(40, 40, 44);
pub const CARD: Color = Color::Rgb(12, 12, 14);

/// Gradient stops of the artwork, as RGB triples for image generation.
pub const ART_PLAYING: ([u8; 3], [u8; 3]) = ([168, 85, 247], [255, 45, 150]);
pub const ART_LOADING: ([u8; 3], [u8; 3]) = ([168, 85, 247], [88, 28, 135]);
