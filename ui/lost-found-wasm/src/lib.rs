//! Lost & Found WASM Frontend
//!
//! Browser entry point for the Lost & Found pages. Generic page behaviour is
//! bound on every page; the item detail controller runs only where the detail
//! slots exist.

pub mod api;
pub mod dom;
pub mod effects;
pub mod events;
pub mod filters;
pub mod forms;
pub mod item_page;
pub mod logging;
pub mod page;
pub mod preview;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init();

    init().await
}

async fn init() -> Result<(), JsValue> {
    effects::inject_ripple_keyframes()?;
    events::bind_events();

    item_page::run().await?;

    tracing::info!("Lost & Found app initialized");
    Ok(())
}
