// src/logging.rs
//! File logging. The terminal belongs to the UI, so nothing is written to
//! stdout or stderr.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogSettings, APP_NAME};

const DEFAULT_LEVEL: &str = "info";

/// Where log files go: the configured dir, else `<data_local_dir>/pipit/logs`.
pub fn log_dir(settings: &LogSettings) -> Option<PathBuf> {
    settings
        .dir
        .clone()
        .or_else(|| dirs::data_local_dir().map(|d| d.join(APP_NAME).join("logs")))
}

fn filter(settings: &LogSettings) -> Result<EnvFilter> {
    match settings.level.as_deref() {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))),
    }
}

/// Install the global subscriber writing to a daily rolling file.
///
/// Returns `None` when no log directory can be determined. The guard must be
/// kept alive until exit or buffered lines are lost.
pub fn init(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir(settings) else {
        return Ok(None);
    };
    fs::create_dir_all(&dir).with_context(|| format!("creating log dir {}", dir.display()))?;

    let appender = rolling::daily(&dir, format!("{APP_NAME}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter(settings)?)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("installing log subscriber")?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let settings = LogSettings {
            dir: Some(PathBuf::from("/tmp/pipit-logs")),
            level: None,
        };
        assert_eq!(log_dir(&settings), Some(PathBuf::from("/tmp/pipit-logs")));
    }

    #[test]
    fn bad_level_is_rejected() {
        let settings = LogSettings {
            dir: None,
            level: Some("pipit=loudest".to_string()),
        };
        assert!(filter(&settings).is_err());

        let settings = LogSettings {
            dir: None,
            level: Some("pipit::player=debug".to_string()),
        };
        assert!(filter(&settings).is_ok());
    }
}
