//! Configuration for lexicache
//!
//! One explicit configuration value, loaded from a JSON file at process
//! start and passed by value into each component's constructor. Nothing in
//! the crate reaches for configuration implicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors; all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// Path that was attempted
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this shape
    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but a required value is missing or invalid
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Generator adapter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// API key for the chat-completion service
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.5
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Top-level lexicache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicacheConfig {
    /// Path of the TSV store file
    pub store_path: PathBuf,

    /// Cache capacity in keys; 0 means unbounded
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Generator adapter settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

fn default_cache_capacity() -> usize {
    512
}

impl LexicacheConfig {
    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate required values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("store_path is required".to_string()));
        }
        Ok(())
    }

    /// A config pointing at the given store, defaults elsewhere
    pub fn with_store_path(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            cache_capacity: default_cache_capacity(),
            generator: GeneratorConfig::default(),
        }
    }
}
