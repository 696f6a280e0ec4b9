pub mod animations;
pub mod app;
pub mod careers;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;
pub mod widgets;

use std::str::FromStr;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    let level = shared::config::load_site_config().logging.level;
    _ = console_log::init_with_level(log::Level::from_str(&level).unwrap_or(log::Level::Debug));
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
