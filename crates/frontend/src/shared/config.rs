//! Runtime configuration of the SPA.
//!
//! The default `config.toml` is embedded into the bundle; a build can replace
//! it wholesale through the `TOURISM_CONFIG` environment variable.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub lists: ListsConfig,
    #[serde(default)]
    pub toasts: ToastsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Absolute base URL; empty means "same host as the page"
    pub base_url: String,
    pub port: u16,
    pub prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 8080,
            prefix: "/api".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListsConfig {
    pub page_size: u32,
    pub public_page_size: u32,
    pub load_all_limit: u32,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            public_page_size: 9,
            load_all_limit: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToastsConfig {
    pub timeout_ms: u32,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self { timeout_ms: 4000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

pub fn parse_config(raw: &str) -> anyhow::Result<AppConfig> {
    toml::from_str(raw).context("invalid configuration")
}

/// Load configuration.
///
/// Search order:
/// 1. `TOURISM_CONFIG` captured at build time
/// 2. Embedded `config.toml`
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Some(raw) = option_env!("TOURISM_CONFIG") {
        match parse_config(raw) {
            Ok(config) => return Ok(config),
            Err(e) => web_sys::console::warn_1(&format!("TOURISM_CONFIG ignored: {:#}", e).into()),
        }
    }
    parse_config(DEFAULT_CONFIG)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        log::error!("Using built-in configuration defaults: {:#}", e);
        AppConfig::default()
    })
});

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.lists.page_size, 20);
        assert_eq!(config.lists.load_all_limit, 1000);
        assert_eq!(config.logging.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://api.example.vn\"\nport = 443\nprefix = \"\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.example.vn");
        assert_eq!(config.lists.public_page_size, 9);
        assert_eq!(config.toasts.timeout_ms, 4000);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[lists]\npage_size = \"many\"").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(logging.log_level(), log::Level::Info);
    }
}
