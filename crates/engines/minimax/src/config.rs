//! Difficulty tiers and engine settings, loadable from TOML.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chess_core::Color;
use serde::{Deserialize, Serialize};

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 8;

/// Errors raised while loading or validating engine settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("max_depth {0} is outside 1..=8")]
    DepthOutOfRange(u8),

    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDuration { field: &'static str, value: f64 },

    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Search depth for this tier around `base`, clamped to the supported range.
    pub fn search_depth(self, base: u8) -> u8 {
        let depth = match self {
            Difficulty::Easy => base.saturating_sub(2).max(1),
            Difficulty::Medium => base.saturating_sub(1).max(2),
            Difficulty::Hard => base,
            Difficulty::Expert => base.saturating_add(1),
        };
        depth.clamp(MIN_DEPTH, MAX_DEPTH)
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}

/// Settings for the machine player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Base depth the difficulty tier is derived from.
    pub max_depth: u8,
    pub time_limit_secs: f64,
    /// Pause before the search starts.
    pub thinking_delay_secs: f64,
    /// Log root-level search progress at info instead of debug.
    pub show_thinking: bool,
    pub machine_color: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            max_depth: 4,
            time_limit_secs: 5.0,
            thinking_delay_secs: 1.0,
            show_thinking: true,
            machine_color: Color::Black,
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.max_depth) {
            return Err(ConfigError::DepthOutOfRange(self.max_depth));
        }
        check_secs("time_limit_secs", self.time_limit_secs)?;
        check_secs("thinking_delay_secs", self.thinking_delay_secs)?;
        Ok(())
    }

    /// Effective search depth for the configured difficulty.
    pub fn search_depth(&self) -> u8 {
        self.difficulty.search_depth(self.max_depth)
    }

    pub fn time_limit(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_limit_secs).unwrap_or(Duration::ZERO)
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.thinking_delay_secs).unwrap_or(Duration::ZERO)
    }
}

fn check_secs(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { field, value })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
