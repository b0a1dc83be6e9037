//! # labnote-client
//!
//! Browser shell for the lab notebook: Leptos views over the `labnote` core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core crate owns state transitions and the REST client. This crate
//! mounts the page, binds inputs to the shared `AppState` signal, hosts the
//! Quill widgets behind the core's rich-text trait, and runs controllers on
//! the browser's event loop.

pub mod app;
pub mod components;
pub mod services;
pub mod util;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use labnote::config::ClientConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    let level = config.as_ref().map_or(labnote::config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    let _ = console_log::init_with_level(level);
    let config = config.unwrap_or_else(|e| {
        log::error!("{e}; using defaults");
        ClientConfig::default()
    });
    log::info!("labnote client starting against {}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <app::App config=config/> });
}
