//! Configuration for SkipKV
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, SkipKvError};

/// Default maximum level of a list when none is configured.
pub const DEFAULT_MAX_HEIGHT: usize = 16;

/// Default field delimiter for snapshot records.
pub const DEFAULT_DELIMITER: char = ':';

/// Main configuration for a SkipList instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // List Configuration
    // -------------------------------------------------------------------------
    /// Maximum level a node may reach (levels are 0..=max_height).
    /// Fixed at construction; a new entry's level is drawn in this range.
    pub max_height: usize,

    /// Seed for the level generator. `None` seeds from OS entropy;
    /// a fixed seed reproduces exact level sequences in tests.
    pub level_seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Snapshot Configuration
    // -------------------------------------------------------------------------
    /// Single-character field delimiter between key and value in snapshot
    /// lines. Keys and values must not contain it (the format is unescaped).
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            level_seed: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration, failing fast on misconfiguration
    /// rather than clamping.
    pub fn validate(&self) -> Result<()> {
        if self.max_height == 0 {
            return Err(SkipKvError::Config(
                "max_height must be at least 1".to_string(),
            ));
        }
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(SkipKvError::Config(
                "delimiter must not be a line terminator".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum node level
    pub fn max_height(mut self, height: usize) -> Self {
        self.config.max_height = height;
        self
    }

    /// Set the level generator seed (for deterministic tests)
    pub fn level_seed(mut self, seed: u64) -> Self {
        self.config.level_seed = Some(seed);
        self
    }

    /// Set the snapshot field delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
