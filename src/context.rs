//! Application Context
//!
//! Shared configuration and navigation provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    config: StoredValue<AppConfig>,
}

impl ShopContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Base URL prefixed to catalog requests and uploaded images
    pub fn api_base_url(&self) -> String {
        self.config.with_value(|config| config.api_base_url.clone())
    }

    /// Hand the product detail route to the browser router
    pub fn open_product(&self, id: &str) {
        let path = product_path(id);
        let pushed = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|window| window.history())
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&path)));
        match pushed {
            Ok(()) => log::debug!("navigated to {}", path),
            Err(err) => log::warn!("navigation to {} failed: {:?}", path, err),
        }
    }
}

pub fn use_shop_context() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}

pub fn product_path(id: &str) -> String {
    format!("/products/{}", id)
}
