//! Configuration file loading for the terminal player.
//!
//! Settings come from `chess.toml` in the current directory unless another
//! path is given on the command line. A missing file means defaults.

use chess_core::PlacementError;
use move_engine::{Board, RankOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not a valid piece placement.
    #[error("Invalid start position: {0}")]
    InvalidPosition(#[from] PlacementError),
}

/// Rank order as written in the config file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankOrderSetting {
    #[default]
    Descending,
    Ascending,
}

impl From<RankOrderSetting> for RankOrder {
    fn from(setting: RankOrderSetting) -> Self {
        match setting {
            RankOrderSetting::Descending => RankOrder::Descending,
            RankOrderSetting::Ascending => RankOrder::Ascending,
        }
    }
}

/// Terminal player configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Which rank is printed first. Defaults to rank 8 first.
    #[serde(default)]
    pub rank_order: RankOrderSetting,
    /// Print whose turn it is before each prompt. Defaults to true.
    #[serde(default = "default_show_player")]
    pub show_player: bool,
    /// Piece placement to start from instead of the standard position.
    #[serde(default)]
    pub start_position: Option<String>,
}

fn default_show_player() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            rank_order: RankOrderSetting::default(),
            show_player: default_show_player(),
            start_position: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration file path: `chess.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Picks the configuration the terminal player runs with.
    ///
    /// An `explicit` path is loaded strictly: a file that exists but cannot
    /// be read or parsed is an error. Without one, `fallback` is loaded and
    /// any error is logged and replaced by the defaults. A missing file means
    /// defaults in both cases.
    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load(fallback).unwrap_or_else(|e| {
                tracing::warn!("Ignoring {:?}: {}", fallback, e);
                Self::default()
            })),
        }
    }

    /// Builds the starting board, preferring `override_position` over the
    /// configured start position.
    pub fn starting_board(&self, override_position: Option<&str>) -> Result<Board, ConfigError> {
        match override_position.or(self.start_position.as_deref()) {
            Some(placement) => Ok(Board::from_placement(placement)?),
            None => Ok(Board::initialize()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
rank_order = "ascending"
show_player = false
start_position = "8/8/8/8/3N4/8/8/8"
"#;
        let config: CliConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.rank_order, RankOrderSetting::Ascending);
        assert!(!config.show_player);
        assert_eq!(config.start_position.as_deref(), Some("8/8/8/8/3N4/8/8/8"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.rank_order, RankOrderSetting::Descending);
        assert!(config.show_player);
        assert!(config.start_position.is_none());
    }

    #[test]
    fn test_invalid_rank_order_is_rejected() {
        let result: Result<CliConfig, _> = toml::from_str(r#"rank_order = "sideways""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rank_order = \"ascending\"").unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.rank_order, RankOrderSetting::Ascending);
        assert!(config.show_player);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_player = [not toml").unwrap();
        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_resolve_explicit_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let config = CliConfig::resolve(Some(&absent), &dir.path().join("chess.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_resolve_explicit_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_player = [not toml").unwrap();
        let fallback = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            CliConfig::resolve(Some(file.path()), fallback.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_resolve_explicit_file_wins_over_fallback() {
        let mut explicit = tempfile::NamedTempFile::new().unwrap();
        writeln!(explicit, "show_player = false").unwrap();
        let mut fallback = tempfile::NamedTempFile::new().unwrap();
        writeln!(fallback, "rank_order = \"ascending\"").unwrap();
        let config = CliConfig::resolve(Some(explicit.path()), fallback.path()).unwrap();
        assert!(!config.show_player);
        assert_eq!(config.rank_order, RankOrderSetting::Descending);
    }

    #[test]
    fn test_resolve_broken_fallback_uses_defaults() {
        let mut fallback = tempfile::NamedTempFile::new().unwrap();
        writeln!(fallback, "rank_order = \"sideways\"").unwrap();
        let config = CliConfig::resolve(None, fallback.path()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_resolve_reads_fallback() {
        let mut fallback = tempfile::NamedTempFile::new().unwrap();
        writeln!(fallback, "start_position = \"8/8/8/8/3N4/8/8/8\"").unwrap();
        let config = CliConfig::resolve(None, fallback.path()).unwrap();
        assert_eq!(config.starting_board(None).unwrap().pieces().count(), 1);

        // A position given on the command line beats the one in the file.
        let board = config.starting_board(Some("8/8/8/8/8/8/8/8")).unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_starting_board() {
        let config = CliConfig::default();
        assert_eq!(config.starting_board(None).unwrap(), Board::initialize());

        let config = CliConfig {
            start_position: Some("8/8/8/8/8/8/8/4K3".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(config.starting_board(None).unwrap().pieces().count(), 1);

        // The command line wins over the file.
        let board = config.starting_board(Some("8/8/8/8/8/8/8/8")).unwrap();
        assert_eq!(board, Board::empty());

        assert!(matches!(
            config.starting_board(Some("8/8")),
            Err(ConfigError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_rank_order_conversion() {
        assert_eq!(
            RankOrder::from(RankOrderSetting::Descending),
            RankOrder::Descending
        );
        assert_eq!(
            RankOrder::from(RankOrderSetting::Ascending),
            RankOrder::Ascending
        );
    }
}
