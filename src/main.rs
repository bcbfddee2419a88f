//! Property Service Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
