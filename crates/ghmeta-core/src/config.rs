// SPDX-License-Identifier: Apache-2.0

//! Configuration management for ghmeta.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `GHMETA_`)
//! 2. Config file: `~/.config/ghmeta/config.toml`
//! 3. Built-in defaults
//!
//! The personal access token is never read from here; see [`crate::auth`].
//!
//! # Examples
//!
//! ```bash
//! # Point at a GitHub Enterprise instance
//! GHMETA_GITHUB__BASE_URI=https://ghe.example.com/api/v3 ghmeta
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::GhMetaError;

/// Largest page size the GitHub REST API accepts.
const MAX_PER_PAGE: u8 = 100;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API root, e.g. `https://ghe.example.com/api/v3`. `None` uses api.github.com.
    pub base_uri: Option<String>,
    /// Connect and read timeout in seconds.
    pub api_timeout_seconds: u64,
    /// Items requested per page.
    pub per_page: u8,
    /// Retries for transient failures (0 disables retrying).
    pub max_retries: usize,
    /// `affiliation` filter for the repository listing.
    pub repo_affiliation: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_uri: None,
            api_timeout_seconds: 10,
            per_page: MAX_PER_PAGE,
            max_retries: 3,
            repo_affiliation: "owner".to_string(),
        }
    }
}

impl GitHubConfig {
    /// Page size clamped to what the API accepts (1..=100).
    #[must_use]
    pub fn effective_per_page(&self) -> u8 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

/// Returns the ghmeta configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/ghmeta`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("ghmeta");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("ghmeta")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default location.
///
/// # Errors
///
/// Returns `GhMetaError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, GhMetaError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from `path` and the environment.
///
/// The file is optional. Environment variables use the prefix `GHMETA_` and
/// a double underscore for nested keys (e.g. `GHMETA_GITHUB__PER_PAGE`).
///
/// # Errors
///
/// Returns `GhMetaError::Config` if the file or an override cannot be parsed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, GhMetaError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("GHMETA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
