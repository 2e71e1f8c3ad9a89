// src/lib.rs
//! Pipit - a simulated music player card for the terminal.
//!
//! Nothing is decoded or played: timers drive a small state machine
//! (play/pause through a loading delay, a looping progress clock, volume and
//! mute) and the UI draws it with ratatui.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod ui;
