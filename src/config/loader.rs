//! Configuration file loading with precedence handling.

use crate::catalog::ScreenKind;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RESDIR_CONFIG";

/// Environment variable overriding the startup screen.
pub const SCREEN_ENV_VAR: &str = "RESDIR_SCREEN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override holds a value that cannot be used.
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/resdir/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Screen opened on startup ("directory" or "extended").
    #[serde(default)]
    pub screen: Option<ScreenKind>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Show the key binding overlay on startup.
    #[serde(default)]
    pub show_help: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Startup screen.
    pub screen: ScreenKind,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Show help overlay on startup.
    pub show_help: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            screen: ScreenKind::Directory,
            log_file_path: default_log_path(),
            show_help: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/resdir/resdir.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("resdir").join("resdir.log")
    } else {
        PathBuf::from("resdir.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
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
/// Returns `~/.config/resdir/config.toml` on Linux, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("resdir").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RESDIR_CONFIG` environment variable
/// 3. Default path `~/.config/resdir/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        screen: config.screen.unwrap_or(defaults.screen),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        show_help: config.show_help.unwrap_or(defaults.show_help),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RESDIR_SCREEN`: Override startup screen
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnv` when `RESDIR_SCREEN` names no screen.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(screen) = std::env::var(SCREEN_ENV_VAR) {
        config.screen = screen.parse().map_err(|e: crate::catalog::UnknownScreen| {
            ConfigError::InvalidEnv {
                var: SCREEN_ENV_VAR,
                reason: e.to_string(),
            }
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    screen_override: Option<ScreenKind>,
    help_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(screen) = screen_override {
        config.screen = screen;
    }

    if let Some(show_help) = help_override {
        config.show_help = show_help;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
