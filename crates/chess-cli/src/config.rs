//! Configuration file loading for the rules tool.
//!
//! Settings come from an optional TOML file (`chess-rules.toml` in the current
//! directory by default). A missing file yields the defaults; command-line
//! flags override whatever the file sets.

use chess_core::PieceKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "chess-rules.toml";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The promotion setting does not name a piece.
    #[error("Invalid promotion letter: {0}")]
    InvalidPromotion(String),
}

/// Tool configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Layout file to load. The standard start is used when unset.
    pub layout: Option<PathBuf>,
    /// Promotion letter used when a replayed move omits one.
    pub promotion: String,
    /// Log level passed to the tracing subscriber.
    pub log_level: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            layout: None,
            promotion: "q".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl ToolConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ToolConfig = toml::from_str(content)?;
        config.promotion_kind()?;
        Ok(config)
    }

    /// Returns the configured default promotion.
    pub fn promotion_kind(&self) -> Result<PieceKind, ConfigError> {
        let mut letters = self.promotion.chars();
        match (letters.next(), letters.next()) {
            (Some(letter), None) => PieceKind::from_letter(letter)
                .filter(|kind| kind.is_promotable())
                .ok_or_else(|| ConfigError::InvalidPromotion(self.promotion.clone())),
            _ => Err(ConfigError::InvalidPromotion(self.promotion.clone())),
        }
    }
}
