//! Storefront Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod query;
mod store;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(err) = console_logger::init(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }

    let config = AppConfig::load().unwrap_or_else(|err| {
        log::warn!("using default config: {}", err);
        AppConfig::default()
    });
    log::info!("storefront using catalog at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
