use std::io::{self, Read};
use std::path::Path;

use crate::engine::{
    DEFAULT_INITIAL_POPULATE_COUNT, DEFAULT_SIDE_LEN, DEFAULT_WIN_VALUE, MAX_EXPONENT,
};

/// Engine knobs. Every field may be omitted in TOML and falls back to the
/// classic game: a 4x4 grid, 2048 wins, two starting tiles.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct EngineConfig {
    /// Side length of the square grid.
    #[serde(default = "defaults::side_len")]
    pub side_len: usize,
    /// Exponent that wins the game (11 => 2048).
    #[serde(default = "defaults::win_value")]
    pub win_value: u32,
    /// Tiles placed on reset.
    #[serde(default = "defaults::initial_populate_count")]
    pub initial_populate_count: usize,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            side_len: defaults::side_len(),
            win_value: defaults::win_value(),
            initial_populate_count: defaults::initial_populate_count(),
        }
    }
}

impl EngineConfig {
    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side_len == 0 {
            return Err(ConfigError::Invalid("side_len must be at least 1".into()));
        }
        self.validate_win_value()?;
        if self.initial_populate_count > self.side_len * self.side_len {
            return Err(ConfigError::Invalid(format!(
                "initial_populate_count {} exceeds {} cells",
                self.initial_populate_count,
                self.side_len * self.side_len
            )));
        }
        Ok(())
    }

    /// The part of [`EngineConfig::validate`] that does not depend on grid size.
    pub fn validate_win_value(&self) -> Result<(), ConfigError> {
        if self.win_value == 0 || self.win_value > MAX_EXPONENT {
            return Err(ConfigError::Invalid(format!(
                "win_value must be in 1..={MAX_EXPONENT}, got {}",
                self.win_value
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
    }
}

mod defaults {
    use super::*;

    pub fn side_len() -> usize { DEFAULT_SIDE_LEN }
    pub fn win_value() -> u32 { DEFAULT_WIN_VALUE }
    pub fn initial_populate_count() -> usize { DEFAULT_INITIAL_POPULATE_COUNT }
}
