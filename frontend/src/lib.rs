use wasm_bindgen_futures::spawn_local;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting sign-in frontend (wasm)");

    // Warm the auth base URL cache from env.js / config.json.
    spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
