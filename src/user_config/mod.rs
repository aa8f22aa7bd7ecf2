//! User-level configuration loaded from `~/.flora-admin/config.toml`.
//!
//! The file is optional; every field falls back to its `Default`.

mod loader;

pub use loader::{load_user_config, load_user_config_from};

use crate::reorder::{BusyPolicy, SwapPersistence};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid request_timeout '{value}': {reason}")]
    Timeout { value: String, reason: String },
}

/// Base URL used when neither the config file nor `--api-url` set one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> String {
    "30s".to_string()
}

/// Backend connection settings (`[api]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Humantime duration, e.g. `"30s"` or `"2m"`.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Parse `request_timeout` into a [`Duration`].
    pub fn timeout(&self) -> Result<Duration, UserConfigError> {
        humantime::parse_duration(&self.request_timeout).map_err(|e| UserConfigError::Timeout {
            value: self.request_timeout.clone(),
            reason: e.to_string(),
        })
    }
}

/// Reorder behaviour (`[reorder]` table).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReorderConfig {
    #[serde(default)]
    pub busy_policy: BusyPolicy,
    #[serde(default)]
    pub swap_persistence: SwapPersistence,
}

/// Top-level user configuration, deserialized from `~/.flora-admin/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reorder: ReorderConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    crate::utils::flora_home().map(|h| h.join("config.toml"))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
