//! Puzzle configuration
//!
//! Reads the puzzle definition (code, slots, symbols, turn budget) plus the
//! presentation and notification settings from TOML, and turns it into a
//! validated [`Puzzle`].

mod embedded;
pub mod loader;

pub use embedded::DEMO;

use crate::core::{IdentError, SlotId, Symbol};
use crate::engine::{Puzzle, PuzzleError};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Error type for locating, reading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no slots or symbols detected (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse puzzle definition: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid identifier: {0}")]
    Identifier(#[from] IdentError),
    #[error("invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),
    #[error("notify.attempts must be at least 1")]
    NoNotifyAttempts,
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw puzzle definition as written in the TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    pub code: Vec<String>,
    pub slots: Vec<String>,
    pub symbols: Vec<String>,
    pub turns: usize,
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub notify: Option<NotifyConfig>,
}

/// Terminal effect settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentationConfig {
    /// Delay per step of the loading bar
    #[serde(default = "default_load_time_ms")]
    pub load_time_ms: u64,
    #[serde(default = "default_effects")]
    pub effects: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            load_time_ms: default_load_time_ms(),
            effects: default_effects(),
        }
    }
}

impl PresentationConfig {
    #[must_use]
    pub const fn load_time(&self) -> Duration {
        Duration::from_millis(self.load_time_ms)
    }
}

/// Success notification settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    pub url: String,
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl NotifyConfig {
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

const fn default_load_time_ms() -> u64 {
    50
}

const fn default_effects() -> bool {
    true
}

const fn default_attempts() -> u32 {
    8
}

const fn default_retry_delay_ms() -> u64 {
    1000
}

impl PuzzleConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML, missing keys or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validate the definition and build the puzzle for a session
    ///
    /// # Errors
    /// Returns `ConfigError` if an identifier is malformed, the puzzle is
    /// inconsistent, or the notification settings are unusable.
    pub fn puzzle(&self) -> Result<Puzzle, ConfigError> {
        if self.notify.as_ref().is_some_and(|notify| notify.attempts == 0) {
            return Err(ConfigError::NoNotifyAttempts);
        }

        let code = self
            .code
            .iter()
            .map(|s| Symbol::new(s.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let slots = self
            .slots
            .iter()
            .map(|s| SlotId::new(s.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let vocabulary = self
            .symbols
            .iter()
            .map(|s| Symbol::new(s.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Puzzle::new(code, slots, vocabulary, self.turns)?)
    }
}
