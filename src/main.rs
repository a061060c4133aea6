#![allow(warnings)]
//! CMS Admin Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod menu_items;
mod models;
mod position;
mod positioner;
mod store;
mod tree;

use app::App;
use config::AdminConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    let config = AdminConfig::load();
    log::info!("CMS admin starting, api_base={}", config.api_base);
    mount_to_body(move || view! { <App config=config /> });
}
