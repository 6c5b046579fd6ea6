//! # client
//!
//! Leptos + WASM browser front-end for the chatroom.
//!
//! Startup asks for a username through a blocking browser prompt, then mounts
//! the [`app::App`] shell, which opens the single WebSocket connection and
//! renders the message log. All protocol decisions live in the `chat` crate;
//! this crate only binds them to the DOM and to `gloo-net`.
//!
//! Browser-only code is gated behind the `csr` feature so the crate still
//! builds and unit-tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    wasm_bindgen_futures::spawn_local(async {
        let mut dialog = util::dialog::BrowserDialog;
        let Ok(username) = chat::acquire_username(&mut dialog).await;
        log::info!("username accepted: {username}");

        app::mount(username);
    });
}
