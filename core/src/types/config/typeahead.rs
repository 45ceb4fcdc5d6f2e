use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Widget configuration, optionally persisted as typeahead.toml.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeaheadConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Text shown in the input before the user types anything.
    #[serde(default)]
    pub initial_text: String,
    /// Quiet period after the last keystroke before a query is dispatched.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Inputs shorter than this (in characters) never reach the provider.
    #[serde(default = "default_minimum_query_length")]
    pub minimum_query_length: usize,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Results beyond this count are dropped; the widget shows one page.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Abort lookups that a newer query has superseded.
    #[serde(default)]
    pub abort_superseded: bool,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            initial_text: String::new(),
            debounce_ms: default_debounce_ms(),
            minimum_query_length: default_minimum_query_length(),
            request_timeout_ms: default_request_timeout_ms(),
            max_results: default_max_results(),
            abort_superseded: false,
        }
    }
}

impl TypeaheadConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("typeahead.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.minimum_query_length == 0 {
            errors.push("minimum_query_length must be at least 1".to_string());
        }

        if self.request_timeout_ms == 0 {
            errors.push("request_timeout_ms must be at least 1".to_string());
        }

        if self.max_results == 0 {
            errors.push("max_results must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            placeholder: self.placeholder.clone(),
            initial_text: self.initial_text.clone(),
            debounce_ms: self.debounce_ms,
            minimum_query_length: if self.minimum_query_length == 0 {
                defaults.minimum_query_length
            } else {
                self.minimum_query_length
            },
            request_timeout_ms: if self.request_timeout_ms == 0 {
                defaults.request_timeout_ms
            } else {
                self.request_timeout_ms
            },
            max_results: if self.max_results == 0 {
                defaults.max_results
            } else {
                self.max_results
            },
            abort_superseded: self.abort_superseded,
        }
    }
}

fn default_placeholder() -> String {
    "Search for a stock...".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_minimum_query_length() -> usize {
    2
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_max_results() -> usize {
    50
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
