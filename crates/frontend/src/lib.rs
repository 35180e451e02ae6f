pub mod app;
pub mod booking;
pub mod reviews;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

// The host loads the wasm module exactly once, so `start` is the single
// initialization point; no page-global "already initialized" flag is needed.
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
