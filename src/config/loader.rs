//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default chip labels shown on the initial screen.
///
/// Overridable wholesale via the `suggestions` config field.
pub const DEFAULT_SUGGESTIONS: [&str; 8] = [
    "Miso",
    "Parmesan cheese",
    "Soy sauce",
    "Garlic",
    "Ginger",
    "Kale",
    "Kombu",
    "Cherry tomato",
];

/// Default endpoint root when nothing configures one.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8787";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, unreadable path).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A resolved value failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/cousins/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Endpoint root of the flavor-similarity service.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Suggestion chip labels, replacing the built-in list wholesale.
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,

    /// Custom key bindings (future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Endpoint root of the flavor-similarity service.
    pub api_url: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Suggestion chip labels in display order.
    pub suggestions: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_file_path: default_log_path(),
            suggestions: DEFAULT_SUGGESTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ResolvedConfig {
    /// Validates the fully-resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the API URL is empty or
    /// not an http(s) root; everything else is unconstrained.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Validation("api_url is empty".to_string()));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "api_url must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }
        Ok(())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cousins/cousins.log` on Unix-like systems, or
/// the platform-appropriate state path elsewhere.
///
/// If the state directory cannot be determined, falls back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cousins").join("cousins.log")
    } else {
        PathBuf::from("cousins.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Arguments
///
/// * `path` - Path to config file
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/cousins/config.toml` on Unix, the platform
/// equivalent elsewhere. Returns `None` if the config directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cousins").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `COUSINS_CONFIG` environment variable
/// 3. Default path `~/.config/cousins/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Arguments
///
/// * `config_path` - Optional explicit config path (e.g., from CLI `--config`)
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("COUSINS_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise
/// use the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_url: config.api_url.unwrap_or(defaults.api_url),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        suggestions: config.suggestions.unwrap_or(defaults.suggestions),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `COUSINS_API_URL`: Override the endpoint root
///
/// # Arguments
///
/// * `config` - Base resolved config
///
/// # Returns
///
/// Config with environment overrides applied.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(api_url) = std::env::var("COUSINS_API_URL") {
        config.api_url = api_url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `api_url_override` - Optional endpoint root from `--api-url`
/// * `log_file_override` - Optional log path from `--log-file`
///
/// # Returns
///
/// Config with CLI overrides applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_url_override: Option<String>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(api_url) = api_url_override {
        config.api_url = api_url;
    }

    if let Some(log_file) = log_file_override {
        config.log_file_path = log_file;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
