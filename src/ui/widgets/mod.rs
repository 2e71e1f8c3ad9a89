// src/ui/widgets/mod.rs
//! Widgets making up the player card.

pub mod artwork;
pub mod equalizer;
pub mod player_panel;
pub mod volume;

// Re-export widget rendering functions
pub use artwork::{render_artwork, ArtworkCache};
pub use equalizer::EqualizerRenderer;
pub use player_panel::render_player_panel;
pub use volume::render_volume;
