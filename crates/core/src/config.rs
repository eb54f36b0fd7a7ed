//! Environment configuration
//!
//! The console needs a single value from its environment: the base URL of the
//! admin API. It is resolved once from a variable source, trimmed, and falls
//! back to a fixed default when the variable is unset or blank.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Variable holding the admin API base URL
pub const API_BASE_URL_VAR: &str = "REACT_APP_API_BASE_URL";

/// Variable holding the build mode (`development` or `production`)
pub const MODE_VAR: &str = "NODE_ENV";

/// Base URL used when [`API_BASE_URL_VAR`] is unset or blank
pub const DEFAULT_API_BASE_URL: &str = "https://9c544eaf310d.ngrok-free.app";

/// Resolved, read-only environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Base URL of the admin API, without trailing whitespace
    pub api_base_url: String,
    pub is_development: bool,
    pub is_production: bool,
}

/// Non-fatal problems found while loading the configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("API base URL {0:?} does not start with http")]
    NonHttpBaseUrl(String),
}

impl EnvironmentConfig {
    /// Resolve the configuration from a variable source.
    ///
    /// `source` maps a variable name to its value, if set. Any warning about
    /// the resolved URL is logged and the value is kept unchanged.
    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = resolve_api_base_url(source(API_BASE_URL_VAR).as_deref());
        if let Some(warning) = check_api_base_url(&api_base_url) {
            warn!(%warning, "API base URL looks invalid");
        }

        let mode = source(MODE_VAR);
        let (is_development, is_production) = match mode.as_deref().map(str::trim) {
            Some("development") => (true, false),
            Some("production") => (false, true),
            Some(_) => (false, false),
            None => (cfg!(debug_assertions), !cfg!(debug_assertions)),
        };

        info!(
            api_base_url = %api_base_url,
            is_development,
            is_production,
            "Environment loaded"
        );

        Self {
            api_base_url,
            is_development,
            is_production,
        }
    }
}

/// Trim the raw variable and fall back to [`DEFAULT_API_BASE_URL`] when it is
/// missing or blank.
pub fn resolve_api_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_API_BASE_URL.to_string(),
    }
}

/// Only the scheme prefix is checked; anything else is left to the HTTP client.
pub fn check_api_base_url(url: &str) -> Option<ConfigWarning> {
    if url.starts_with("http") {
        None
    } else {
        Some(ConfigWarning::NonHttpBaseUrl(url.to_string()))
    }
}
