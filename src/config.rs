//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/librarium/librarium.toml`
//! 3. Environment variables: `LIBRARIUM_*` prefix
//!
//! Settings cover presentation only. Catalog, graph, and account state are
//! session-scoped and never written to disk.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::cli::error::CliError;

/// Unified configuration for librarium.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Colored terminal output (NO_COLOR still wins when set)
    pub color: bool,
    /// Prompt shown before menu input
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            prompt: "Choose an option:".to_string(),
        }
    }
}

/// Get the XDG config directory for librarium.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "librarium").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("librarium.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, CliError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("color", defaults.color)
            .map_err(config_err)?
            .set_default("prompt", defaults.prompt.clone())
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("LIBRARIUM"));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(format!("serialize: {e}")))
    }
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config(e.to_string())
}
