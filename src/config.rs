//! Session configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use crate::types::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_MS, MAX_BOARD_EXTENT, MAX_SHAPE_EXTENT,
};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    /// Gravity period.
    pub tick_ms: u32,
    pub seed: u32,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            tick_ms: DEFAULT_TICK_MS,
            seed: 1,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKFALL_COLS`, `BLOCKFALL_ROWS`: board size (default 15 x 30)
    /// - `BLOCKFALL_TICK_MS`: gravity period (default 500)
    /// - `BLOCKFALL_SEED`: piece sequence seed (default: from the clock)
    /// - `BLOCKFALL_LOG_PATH`: log file (default: none)
    ///
    /// Values that do not parse fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = parse_var(&lookup, "BLOCKFALL_SEED").unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            cols: parse_var(&lookup, "BLOCKFALL_COLS").unwrap_or(DEFAULT_COLS),
            rows: parse_var(&lookup, "BLOCKFALL_ROWS").unwrap_or(DEFAULT_ROWS),
            tick_ms: parse_var(&lookup, "BLOCKFALL_TICK_MS").unwrap_or(DEFAULT_TICK_MS),
            seed,
            log_path,
        }
    }

    /// Reject boards that cannot hold every shape, boards too large to lay out on a
    /// terminal, and a zero gravity period.
    pub fn validate(&self) -> Result<()> {
        check_extent("BLOCKFALL_COLS", self.cols)?;
        check_extent("BLOCKFALL_ROWS", self.rows)?;
        if self.tick_ms == 0 {
            bail!("BLOCKFALL_TICK_MS must be greater than 0");
        }
        Ok(())
    }
}

fn check_extent(var: &str, value: u16) -> Result<()> {
    if !(MAX_SHAPE_EXTENT..=MAX_BOARD_EXTENT).contains(&value) {
        bail!(
            "{} must be between {} and {}, got {}",
            var,
            MAX_SHAPE_EXTENT,
            MAX_BOARD_EXTENT,
            value
        );
    }
    Ok(())
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = GameConfig::from_lookup(lookup(&[("BLOCKFALL_SEED", "9")]));
        assert_eq!(
            cfg,
            GameConfig {
                seed: 9,
                ..GameConfig::default()
            }
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("BLOCKFALL_COLS", "10"),
            ("BLOCKFALL_ROWS", " 20 "),
            ("BLOCKFALL_TICK_MS", "250"),
            ("BLOCKFALL_SEED", "77"),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.log"),
        ]));
        assert_eq!(cfg.cols, 10);
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.tick_ms, 250);
        assert_eq!(cfg.seed, 77);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("BLOCKFALL_COLS", "wide"),
            ("BLOCKFALL_TICK_MS", "-3"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.cols, DEFAULT_COLS);
        assert_eq!(cfg.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn validate_rejects_narrow_board_and_zero_tick() {
        let narrow = GameConfig {
            cols: 5,
            ..GameConfig::default()
        };
        let err = narrow.validate().unwrap_err().to_string();
        assert!(err.contains("BLOCKFALL_COLS"), "{}", err);

        let frozen = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(frozen.validate().is_err());
    }

    #[test]
    fn validate_rejects_oversized_board() {
        let wide = GameConfig {
            cols: 40_000,
            ..GameConfig::default()
        };
        let err = wide.validate().unwrap_err().to_string();
        assert!(err.contains("BLOCKFALL_COLS"), "{}", err);

        let tall = GameConfig {
            rows: MAX_BOARD_EXTENT + 1,
            ..GameConfig::default()
        };
        let err = tall.validate().unwrap_err().to_string();
        assert!(err.contains("BLOCKFALL_ROWS"), "{}", err);

        let largest = GameConfig {
            cols: MAX_BOARD_EXTENT,
            rows: MAX_BOARD_EXTENT,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());
    }
}
