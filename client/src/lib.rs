//! # client
//!
//! Leptos + WASM frontend for the GIF portal: connect a browser wallet, read
//! the GIF list stored in the program's base account, and append to it.
//!
//! `portal` holds the page logic behind the wallet and chain seams in `net`;
//! `pages` and `components` render `state`; `util::dispatch` connects the
//! two in the hydrate build.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod portal;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
