//! Configuration file loading for huddle
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./huddle.toml` or `./.huddle.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/huddle/config.toml`
//! 4. Fallback: `~/.config/huddle/config.toml`
//! 5. Built-in cast (`assets/cast.toml`)

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClassifierConfig, FileClassifierRule, FileConfig,
    FileEarlyStopConfig, FileMeetingConfig, FileOutputConfig, FileOutputFormat,
    FileParticipantConfig, FileSuppressionConfig,
};
pub use loader::{BUILTIN_CAST, ConfigError, ConfigLoader};
