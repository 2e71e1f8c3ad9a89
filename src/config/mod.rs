// src/config/mod.rs
//! Configuration: player timings, track labels, UI and logging settings.
//!
//! Loaded as JSON, either from an explicit path or from
//! `<config_dir>/pipit/config.json` when that file exists. Every field has a
//! default, so a partial file is fine.

mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::player::LoadingToggle;

pub use error::ConfigError;

/// Name of the per-user config directory and log file prefix.
pub const APP_NAME: &str = "pipit";

/// Timings and volume defaults for the simulated player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Track length (default 3:45)
    pub duration_secs: u64,
    /// Clock tick interval and step
    pub tick_ms: u64,
    /// Loading delay between a toggle and the resulting state
    pub transition_ms: u64,
    pub initial_volume: f64,
    /// Level restored by un-mute when nothing was remembered
    pub default_restore_volume: f64,
    pub loading_toggle: LoadingToggle,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            duration_secs: 3 * 60 + 45,
            tick_ms: 250,
            transition_ms: 500,
            initial_volume: 0.55,
            default_restore_volume: 0.55,
            loading_toggle: LoadingToggle::Ignore,
        }
    }
}

/// Labels shown next to the artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
}

impl Default for TrackInfo {
    fn default() -> Self {
        Self {
            title: "Awesome Song Title".to_string(),
            artist: "Amazing Artist".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Redraw interval for animations
    pub frame_ms: u64,
    /// Volume change per key press
    pub volume_step: f64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frame_ms: 50,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log directory; falls back to the platform data dir
    pub dir: Option<PathBuf>,
    /// Filter directive, e.g. `info` or `pipit::player=debug`
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerSettings,
    pub track: TrackInfo,
    pub ui: UiSettings,
    pub log: LogSettings,
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_NAME).join("config.json"))
    }

    /// Load from `path`, which must exist, or from the default location when
    /// present, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Reject values the player cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        if p.duration_secs == 0 {
            return Err(ConfigError::Invalid("player.duration_secs must be > 0".into()));
        }
        if p.tick_ms == 0 {
            return Err(ConfigError::Invalid("player.tick_ms must be > 0".into()));
        }
        for (name, v) in [
            ("player.initial_volume", p.initial_volume),
            ("player.default_restore_volume", p.default_restore_volume),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ConfigError::Invalid(format!("{name} must be within [0, 1], got {v}")));
            }
        }
        if self.ui.frame_ms == 0 {
            return Err(ConfigError::Invalid("ui.frame_ms must be > 0".into()));
        }
        if !(self.ui.volume_step > 0.0 && self.ui.volume_step <= 1.0) {
            return Err(ConfigError::Invalid("ui.volume_step must be within (0, 1]".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget() {
        let c = Config::default();
        assert_eq!(c.player.duration_secs, 225);
        assert_eq!(c.player.tick_ms, 250);
        assert_eq!(c.player.transition_ms, 500);
        assert_eq!(c.player.default_restore_volume, 0.55);
        assert_eq!(c.player.loading_toggle, LoadingToggle::Ignore);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: Config = serde_json::from_str(
            r#"{
                "player": { "duration_secs": 90, "loading_toggle": "retarget" },
                "track": { "title": "Intro" }
            }"#,
        )
        .unwrap();
        assert_eq!(c.player.duration_secs, 90);
        assert_eq!(c.player.tick_ms, 250);
        assert_eq!(c.player.loading_toggle, LoadingToggle::Retarget);
        assert_eq!(c.track.title, "Intro");
        assert_eq!(c.track.artist, "Amazing Artist");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut c = Config::default();
        c.player.tick_ms = 0;
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));

        let mut c = Config::default();
        c.player.initial_volume = 1.5;
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));

        let mut c = Config::default();
        c.ui.volume_step = 0.0;
        assert!(c.validate().is_err());
    }
}
