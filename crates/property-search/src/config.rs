//! API Configuration
//!
//! Where the REST API lives and how long to wait for it.

use serde::Deserialize;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// Prefix for every request path, without trailing slash
    pub base_url: String,
    /// Per-request timeout in milliseconds (0 disables it)
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("PROPERTY_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Join the base URL with an API path such as `/api/properties`
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Override fields from a runtime JSON object; unknown keys are ignored
    pub fn merged_with(&self, overrides: &serde_json::Value) -> Self {
        let mut merged = self.clone();
        if let Some(url) = overrides.get("baseUrl").and_then(|v| v.as_str()) {
            if !url.trim().is_empty() {
                merged.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        // Numbers coming from JS objects decode as floats
        let timeout = overrides.get("timeoutMs").and_then(|v| {
            v.as_u64()
                .or_else(|| v.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
        });
        if let Some(ms) = timeout {
            merged.timeout_ms = u32::try_from(ms).unwrap_or(u32::MAX);
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::new("http://api.local/");
        assert_eq!(config.url("/api/properties"), "http://api.local/api/properties");
        assert_eq!(config.url("api/properties"), "http://api.local/api/properties");
    }

    #[test]
    fn test_runtime_overrides() {
        let base = ApiConfig::new("http://a");
        let merged = base.merged_with(&json!({ "baseUrl": "https://b/", "timeoutMs": 500 }));
        assert_eq!(merged.base_url, "https://b");
        assert_eq!(merged.timeout_ms, 500);

        let from_js = base.merged_with(&json!({ "timeoutMs": 2500.0 }));
        assert_eq!(from_js.timeout_ms, 2500);

        // Blank URL keeps the default
        let kept = base.merged_with(&json!({ "baseUrl": "  " }));
        assert_eq!(kept.base_url, "http://a");
        assert_eq!(kept.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
