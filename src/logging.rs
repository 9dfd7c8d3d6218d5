//! Logger setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so log
//! records go to a file instead of stderr. Without a log path nothing is installed
//! and the `log` macros in the core compile down to a level check.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::GameConfig;

/// Install `env_logger` writing to `config.log_path`, filtered by `RUST_LOG` (default `info`).
///
/// Returns whether a logger was installed.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        let cfg = GameConfig::default();
        assert!(!init(&cfg).unwrap());
    }
}
