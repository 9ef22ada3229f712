//! Runtime configuration served by the host as `/app-config.json`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 450;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Prefix joined with every endpoint path, e.g. `https://api.example.org/v1`.
    pub api_base_url: String,
    pub search_debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Joins the base URL and `path` with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"apiBaseUrl": "https://api.example.org/"}"#).unwrap();
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(config.endpoint("/campaigns"), "https://api.example.org/campaigns");
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(AppConfig::default().endpoint("audit/logs"), "/api/audit/logs");
    }
}
