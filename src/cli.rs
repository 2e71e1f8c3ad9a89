// src/cli.rs
//! Command-line flags. Every flag overrides the matching config file value.

use std::path::PathBuf;

use clap::Parser;

use crate::{config::Config, player::LoadingToggle};

#[derive(Debug, Parser)]
#[command(name = "pipit", version, about = "A simulated music player card for the terminal")]
pub struct Cli {
    /// JSON config file (defaults to <config dir>/pipit/config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Track length in seconds
    #[arg(long)]
    pub duration: Option<u64>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub artist: Option<String>,

    /// What a play/pause toggle does while a transition is pending
    #[arg(long, value_enum)]
    pub loading_toggle: Option<LoadingToggle>,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `pipit::player=trace`
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Write the flags that were given over `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(secs) = self.duration {
            config.player.duration_secs = secs;
        }
        if let Some(title) = &self.title {
            config.track.title = title.clone();
        }
        if let Some(artist) = &self.artist {
            config.track.artist = artist.clone();
        }
        if let Some(policy) = self.loading_toggle {
            config.player.loading_toggle = policy;
        }
        if let Some(dir) = &self.log_dir {
            config.log.dir = Some(dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.log.level = Some(level.clone());
        }
    }
}
