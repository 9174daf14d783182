//! Engine configuration.
//!
//! `SetConfig` carries the tunables a presentation layer may want to
//! change: deal sizes, score deltas and the mismatch penalty timing.
//! Every field has a default, so a partial TOML file is enough:
//!
//! ```
//! use set_engine::core::{PenaltyTiming, SetConfig};
//!
//! let config = SetConfig::from_toml_str("penalty_timing = \"deferred\"").unwrap();
//! assert_eq!(config.penalty_timing, PenaltyTiming::Deferred);
//! assert_eq!(config.initial_deal, 12);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::DECK_SIZE;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// When the penalty for a non-matching trio is charged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyTiming {
    /// As soon as the third non-matching card is selected.
    #[default]
    Immediate,
    /// When the mismatched trio is cleared by the next tap.
    Deferred,
}

/// Configuration for a Set game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetConfig {
    /// Cards dealt by `new_game`.
    pub initial_deal: usize,

    /// Cards dealt by `deal_more`.
    pub deal_more_amount: usize,

    /// Points added for a valid trio.
    pub match_reward: u32,

    /// Points removed for an invalid trio (score never drops below zero).
    pub mismatch_penalty: u32,

    /// When the mismatch penalty is applied.
    pub penalty_timing: PenaltyTiming,

    /// Replace a matched trio still on the table before handling the next tap.
    pub auto_replace_matched: bool,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            initial_deal: 12,
            deal_more_amount: 3,
            match_reward: 4,
            mismatch_penalty: 2,
            penalty_timing: PenaltyTiming::Immediate,
            auto_replace_matched: false,
        }
    }
}

impl SetConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SetConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError { source: e })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// - If the file doesn't exist, returns `SetConfig::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(SetConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Validates the configuration.
    ///
    /// Both deal sizes must lie in `1..=81`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("initial_deal", self.initial_deal),
            ("deal_more_amount", self.deal_more_amount),
        ] {
            if value == 0 || value > DECK_SIZE {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be between 1 and {DECK_SIZE}, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SetConfig::default();
        assert_eq!(config.initial_deal, 12);
        assert_eq!(config.deal_more_amount, 3);
        assert_eq!(config.match_reward, 4);
        assert_eq!(config.mismatch_penalty, 2);
        assert_eq!(config.penalty_timing, PenaltyTiming::Immediate);
        assert!(!config.auto_replace_matched);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SetConfig::from_toml_str("").unwrap();
        assert_eq!(config, SetConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = SetConfig::from_toml_str(
            r#"
            initial_deal = 15
            mismatch_penalty = 5
            auto_replace_matched = true
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_deal, 15);
        assert_eq!(config.mismatch_penalty, 5);
        assert!(config.auto_replace_matched);
        assert_eq!(config.deal_more_amount, 3);
    }

    #[test]
    fn test_parse_error() {
        let err = SetConfig::from_toml_str("initial_deal = \"twelve\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_validation_error() {
        let err = SetConfig::from_toml_str("deal_more_amount = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(err.to_string().contains("deal_more_amount"));

        let err = SetConfig::from_toml_str("initial_deal = 82").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = SetConfig::load("/nonexistent/set-engine/config.toml").unwrap();
        assert_eq!(config, SetConfig::default());
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let config = SetConfig {
            penalty_timing: PenaltyTiming::Deferred,
            ..SetConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"deferred\""));
        let back: SetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
