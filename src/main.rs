//! Scout Attendance Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let level = loaded.as_ref().map(AppConfig::log_level).unwrap_or(log::LevelFilter::Info);
    logger::init(level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("falling back to default config: {}", e);
        AppConfig::default()
    });

    mount_to_body(move || view! { <App config=config.clone() /> });
}
