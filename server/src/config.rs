//! Host settings read from `CONSOLE_*` environment variables.
//!
//! Missing or unparsable values fall back to defaults with a log line; the
//! server never refuses to start over configuration.

use std::{env, fmt::Display, str::FromStr};

use common::config::{
    AppConfig, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DEBOUNCE_MS,
    DEFAULT_TOAST_DURATION_MS,
};
use log::{info, warn};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Served to the browser as `/app-config.json`.
    pub app: AppConfig,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: try_load(&lookup, "CONSOLE_HOST", "127.0.0.1".to_string()),
            port: try_load(&lookup, "CONSOLE_PORT", 8080),
            open_browser: try_load(&lookup, "CONSOLE_OPEN_BROWSER", true),
            app: AppConfig {
                api_base_url: try_load(&lookup, "CONSOLE_API_BASE_URL", DEFAULT_API_BASE_URL.to_string()),
                search_debounce_ms: try_load(&lookup, "CONSOLE_SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS),
                toast_duration_ms: try_load(&lookup, "CONSOLE_TOAST_MS", DEFAULT_TOAST_DURATION_MS),
                page_size: try_load(&lookup, "CONSOLE_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            },
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}; using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.app, AppConfig::default());
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = config_from(&[
            ("CONSOLE_PORT", "9000"),
            ("CONSOLE_API_BASE_URL", "https://api.example.org/v1"),
            ("CONSOLE_PAGE_SIZE", "lots"),
            ("CONSOLE_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(config.url(), "http://127.0.0.1:9000");
        assert_eq!(config.app.api_base_url, "https://api.example.org/v1");
        assert_eq!(config.app.page_size, DEFAULT_PAGE_SIZE);
        assert!(!config.open_browser);
    }
}
