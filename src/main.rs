//! FeedLogic Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod models;
mod store;
mod ticker;

use app::App;
use leptos::prelude::*;
use rolling_logger::LevelFilter;

/// Records kept in the in-memory log ring
const LOG_CAPACITY: usize = 256;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
    if let Err(e) = rolling_logger::init(level, LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] {}", e).into());
    }

    mount_to_body(App);
}
