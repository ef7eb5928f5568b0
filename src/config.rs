//! Configuration management
//!
//! Settings for reaching the AI service and for rendering output.
//! Config is read from `~/.config/tabsplit/config.toml` unless a path is
//! given explicitly. A missing file means defaults; a malformed one is an
//! error. `TABSPLIT_API_BASE` and `TABSPLIT_MODEL` override the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Environment variable overriding `api.base_url`
pub const ENV_API_BASE: &str = "TABSPLIT_API_BASE";

/// Environment variable overriding `api.model`
pub const ENV_MODEL: &str = "TABSPLIT_MODEL";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The API key environment variable is unset or blank
    #[error("no API key: set the {0} environment variable")]
    MissingApiKey(String),
}

/// tabsplit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// AI service settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Output preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

/// AI service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for both extraction and interpretation
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(self.api_key_env.clone()))
    }
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Colorize human output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

const fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from `path`, or from the default location
    ///
    /// Environment overrides are applied after the file is read.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        let mut config = Self::load_file(&path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load config from a file without environment overrides
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TABSPLIT_*` environment overrides
    pub fn apply_env(&mut self) {
        if let Some(base) = non_empty_env(ENV_API_BASE) {
            self.api.base_url = base;
        }
        if let Some(model) = non_empty_env(ENV_MODEL) {
            self.api.model = model;
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
