//! Memorial Board Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod form;
mod geometry;
mod interaction;
mod models;
mod state;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    mount_to_body(App);
}
