//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Built-in cast, merged under every configuration file
pub const BUILTIN_CAST: &str = include_str!("../../assets/cast.toml");

const PROJECT_FILES: [&str; 2] = ["huddle.toml", ".huddle.toml"];

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./huddle.toml` or `./.huddle.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/huddle/config.toml`
    /// 4. Fallback: `~/.config/huddle/config.toml`
    /// 5. Built-in cast
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut files = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            files.push(global_path);
        }
        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }
        if let Some(path) = config_path {
            files.push(path.clone());
        }

        Self::load_from(&files)
    }

    /// Merge `files` over the built-in cast, later files winning, and
    /// validate the result
    pub fn load_from<P: AsRef<Path>>(files: &[P]) -> Result<FileConfig, ConfigError> {
        let mut figment = Self::builtin();
        for path in files {
            debug!("Merging config file {}", path.as_ref().display());
            figment = figment.merge(Toml::file(path.as_ref()));
        }

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Load only the built-in cast (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        Self::load_from::<PathBuf>(&[])
    }

    fn builtin() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(BUILTIN_CAST))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/huddle/config.toml if set,
    /// otherwise falls back to ~/.config/huddle/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("huddle").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let found = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", found, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND  ] Project:  {}", path.display());
        } else {
            println!("  [       ] Project:  ./huddle.toml or ./.huddle.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND  ] Global:   {}", path.display());
            } else {
                println!("  [       ] Global:   {}", path.display());
            }
        }

        println!("  [FOUND  ] Built-in: cast of five");
    }
}
