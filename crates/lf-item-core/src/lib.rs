//! Target-independent logic behind the Lost & Found pages.
//!
//! Browser state (local storage, the DOM, the HTTP API) reaches this crate
//! only through the traits below, so every rule here runs the same in a
//! native test as it does in the WASM build.

pub mod catalog;
pub mod display;
pub mod effects;
pub mod filter;
pub mod forms;
pub mod resolve;
pub mod steps;

use anyhow::Result;
use async_trait::async_trait;
use lf_api_types::{Item, ItemKind};
use std::cell::RefCell;
use std::collections::HashMap;

pub use display::ItemDisplay;
pub use resolve::{DetailQuery, ItemOrigin, ResolvedItem, load_item_details, resolve_item};

/// String key/value storage with local-storage semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Remote lookup of a single item by type and id.
///
/// `Ok(None)` means the source answered but carried no item.
#[async_trait(?Send)]
pub trait ItemDetailSource {
    async fn item_detail(&self, kind: ItemKind, id: &str) -> Result<Option<Item>>;
}

/// Render target of the item detail page.
pub trait ItemView {
    fn show_item(&mut self, display: &ItemDisplay);
    fn show_not_found(&mut self);
}

/// In-process [`KeyValueStore`], for native callers and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
