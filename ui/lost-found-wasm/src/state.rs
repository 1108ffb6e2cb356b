//! Page state and browser local storage.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).

use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};
use lf_item_core::KeyValueStore;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// State that outlives a single event handler but not the page.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    /// Contact info of the displayed item, kept for ownership verification.
    pub contact_info: Option<String>,
}

thread_local! {
    static STATE: RefCell<PageState> = RefCell::new(PageState::default());
}

pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&PageState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut PageState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn contact_info() -> Option<String> {
    with(|s| s.contact_info.clone())
}

pub fn set_contact_info(info: Option<String>) {
    with_mut(|s| s.contact_info = info);
}

/// Contact info of the item shown on the detail page, if it has one.
#[wasm_bindgen(js_name = itemContactInfo)]
pub fn item_contact_info() -> Option<String> {
    contact_info()
}

// ── localStorage ──

/// `window.localStorage` as a [`KeyValueStore`]. Values are stored raw, not
/// re-encoded, so entries written by other scripts read back unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| anyhow!("localStorage write of {key} failed: {err:?}"))
    }
}

pub fn local_get(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok()?
}
