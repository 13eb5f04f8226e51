//! Storefront Configuration
//!
//! Build-time defaults, optionally overridden by a
//! `window.__STOREFRONT_CONFIG__` object set by the hosting page.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

const DEFAULT_API_URL: &str = "http://localhost:3003";
const DEFAULT_PAGE_LIMIT: u32 = 8;
const WINDOW_CONFIG_KEY: &str = "__STOREFRONT_CONFIG__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("failed to read {key}: {message}")]
    Read { key: &'static str, message: String },
    #[error("invalid {key}: {message}")]
    Decode { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalog API and static asset base, without trailing slash
    pub api_base_url: String,
    /// Items per page
    pub page_limit: u32,
}

/// Fields the hosting page may override
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub page_limit: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: normalize_base(option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_URL)),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = normalize_base(&url);
        }
        if let Some(limit) = overrides.page_limit.filter(|l| *l > 0) {
            self.page_limit = limit;
        }
        self
    }

    /// Defaults merged with the window override object, if any
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::default().with_overrides(read_window_overrides()?))
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn read_window_overrides() -> Result<ConfigOverrides, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).map_err(|e| {
        ConfigError::Read {
            key: WINDOW_CONFIG_KEY,
            message: format!("{:?}", e),
        }
    })?;
    if value.is_undefined() || value.is_null() {
        return Ok(ConfigOverrides::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Decode {
        key: WINDOW_CONFIG_KEY,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost:3003".to_string(),
            page_limit: 8,
        }
    }

    #[test]
    fn test_overrides_replace_set_fields() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"apiBaseUrl": "https://shop.example.com/"}"#).unwrap();
        let config = base().with_overrides(overrides);
        assert_eq!(config.api_base_url, "https://shop.example.com");
        assert_eq!(config.page_limit, 8);
    }

    #[test]
    fn test_overrides_ignore_blank_and_zero() {
        let overrides = ConfigOverrides {
            api_base_url: Some("  ".to_string()),
            page_limit: Some(0),
        };
        assert_eq!(base().with_overrides(overrides), base());
    }

    #[test]
    fn test_page_limit_override() {
        let overrides: ConfigOverrides = serde_json::from_str(r#"{"pageLimit": 12}"#).unwrap();
        assert_eq!(base().with_overrides(overrides).page_limit, 12);
    }
}
