//! Build-time environment configuration

use hotel_console_core::config::{API_BASE_URL_VAR, MODE_VAR};
use hotel_console_core::EnvironmentConfig;
use once_cell::sync::Lazy;

/// Resolved once on first use. Variables are baked in when the bundle is
/// built, there is no process environment in the browser.
pub static CONFIG: Lazy<EnvironmentConfig> = Lazy::new(|| {
    EnvironmentConfig::from_source(|name| {
        let value = match name {
            API_BASE_URL_VAR => option_env!("REACT_APP_API_BASE_URL"),
            MODE_VAR => option_env!("NODE_ENV"),
            _ => None,
        };
        value.map(str::to_string)
    })
});
