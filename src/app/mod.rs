// src/app/mod.rs
//! Application module - the player driver plus per-frame UI state.

pub mod state;

pub use state::App;
