//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Env var naming an explicit config file.
pub const ENV_CONFIG: &str = "COMVIEW_CONFIG";
/// Env var overriding the API base URL.
pub const ENV_API_URL: &str = "COMVIEW_API_URL";
/// Env var overriding the page size.
pub const ENV_PAGE_SIZE: &str = "COMVIEW_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Key that failed validation.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/comview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the comments API.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the comments API, without trailing `/comments`.
    pub api_url: String,
    /// Rows per page.
    pub page_size: NonZeroU32,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: crate::state::view_state::DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file_path: default_log_path(),
        }
    }
}

/// Explicit command-line overrides. `None` means "flag not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// From `--api-url`.
    pub api_url: Option<String>,
    /// From `--page-size`.
    pub page_size: Option<NonZeroU32>,
    /// From `--timeout`.
    pub timeout_secs: Option<u64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/comview/comview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("comview").join("comview.log")
    } else {
        PathBuf::from("comview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
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
/// Returns `~/.config/comview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("comview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `COMVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/comview/config.toml`
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(format!("{ENV_CONFIG} is empty")));
        }
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
///
/// # Errors
///
/// Returns `InvalidValue` for a zero page size, a zero timeout or a blank
/// API URL.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let api_url = match config.api_url {
        Some(url) => validate_api_url(url)?,
        None => defaults.api_url,
    };

    let page_size = match config.page_size {
        Some(raw) => NonZeroU32::new(raw).ok_or(ConfigError::InvalidValue {
            field: "page_size",
            reason: "must be at least 1".to_string(),
        })?,
        None => defaults.page_size,
    };

    let request_timeout = match config.request_timeout_secs {
        Some(secs) => validate_timeout(secs)?,
        None => defaults.request_timeout,
    };

    Ok(ResolvedConfig {
        api_url,
        page_size,
        request_timeout,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `COMVIEW_API_URL`: Override API base URL (blank values are ignored)
/// - `COMVIEW_PAGE_SIZE`: Override page size (unparseable or 0 is ignored
///   with a warning)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(ENV_API_URL) {
        match validate_api_url(url) {
            Ok(url) => config.api_url = url,
            Err(err) => warn!(var = ENV_API_URL, error = %err, "Ignoring env override"),
        }
    }

    if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
        match raw.trim().parse::<NonZeroU32>() {
            Ok(size) => config.page_size = size,
            Err(err) => warn!(var = ENV_PAGE_SIZE, value = %raw, error = %err, "Ignoring env override"),
        }
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
/// # Errors
///
/// Returns `InvalidValue` for a blank `--api-url` or a zero `--timeout`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(url) = overrides.api_url {
        config.api_url = validate_api_url(url)?;
    }

    if let Some(size) = overrides.page_size {
        config.page_size = size;
    }

    if let Some(secs) = overrides.timeout_secs {
        config.request_timeout = validate_timeout(secs)?;
    }

    Ok(config)
}

fn validate_api_url(url: String) -> Result<String, ConfigError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "api_url",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_timeout(secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: "request_timeout_secs",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
