#![allow(warnings)]
//! Task Board Frontend Entry Point

mod api;
mod models;
mod config;
mod store;
mod view;
mod controller;
mod notify;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    let _ = console_log::init_with_level(config.log_level());
    if let Some(e) = config_error {
        log::warn!("[APP] {}, using defaults", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
