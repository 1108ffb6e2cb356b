//! Item detail resolution: API, then local storage, then the sample catalog.

use crate::display::ItemDisplay;
use crate::{ItemDetailSource, ItemView, KeyValueStore, catalog};
use anyhow::{Context, Result};
use lf_api_types::{FOUND_ITEMS_KEY, Item, ItemKind, LOST_ITEMS_KEY};
use serde_json::Value;
use tracing::{debug, warn};

/// The `item`, `type` and `id` query parameters of the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailQuery {
    pub name: Option<String>,
    pub kind: Option<ItemKind>,
    pub id: Option<String>,
}

impl DetailQuery {
    /// Blank values count as absent; an unrecognised `type` is dropped.
    pub fn from_params(item: Option<String>, kind: Option<String>, id: Option<String>) -> Self {
        let kind = non_blank(kind).and_then(|raw| match raw.parse::<ItemKind>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                warn!("ignoring detail page type: {err}");
                None
            }
        });

        Self {
            name: non_blank(item),
            kind,
            id: non_blank(id),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrigin {
    Api,
    LocalStorage,
    Catalog,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedItem {
    pub item: Item,
    pub origin: ItemOrigin,
}

/// Ask the remote source. Failures are logged and reported as "not found".
pub async fn resolve_from_api(query: &DetailQuery, source: &dyn ItemDetailSource) -> Option<Item> {
    let (Some(kind), Some(id)) = (query.kind, query.id.as_deref()) else {
        return None;
    };

    match source.item_detail(kind, id).await {
        Ok(Some(item)) => Some(item),
        Ok(None) => {
            debug!("api returned no item for {kind}/{id}");
            None
        }
        Err(err) => {
            warn!("failed to load item {kind}/{id} from api: {err:#}");
            None
        }
    }
}

/// Search stored found items, then lost items: by id first, then by name.
pub fn resolve_from_storage(query: &DetailQuery, store: &dyn KeyValueStore) -> Option<Item> {
    if query.id.is_none() && query.name.is_none() {
        return None;
    }

    let mut all = load_local_items(store, FOUND_ITEMS_KEY);
    all.extend(load_local_items(store, LOST_ITEMS_KEY));

    if let Some(id) = query.id.as_deref() {
        if let Some(item) = all.iter().find(|item| item.has_id(id)) {
            return Some(item.clone());
        }
    }

    let name = query.name.as_deref()?;
    all.into_iter().find(|item| item.has_name(name))
}

pub fn resolve_from_catalog(query: &DetailQuery) -> Option<Item> {
    query.name.as_deref().and_then(catalog::sample_item)
}

/// Run the sources in order and stop at the first hit.
pub async fn resolve_item(
    query: &DetailQuery,
    source: &dyn ItemDetailSource,
    store: &dyn KeyValueStore,
) -> Option<ResolvedItem> {
    if let Some(item) = resolve_from_api(query, source).await {
        return Some(ResolvedItem {
            item,
            origin: ItemOrigin::Api,
        });
    }

    if let Some(item) = resolve_from_storage(query, store) {
        return Some(ResolvedItem {
            item,
            origin: ItemOrigin::LocalStorage,
        });
    }

    resolve_from_catalog(query).map(|item| ResolvedItem {
        item,
        origin: ItemOrigin::Catalog,
    })
}

/// Resolve and render the item named by `query`; renders the not-found
/// view when no source has it.
pub async fn load_item_details(
    query: &DetailQuery,
    source: &dyn ItemDetailSource,
    store: &dyn KeyValueStore,
    view: &mut dyn ItemView,
    image_base: &str,
) -> Option<ItemOrigin> {
    match resolve_item(query, source, store).await {
        Some(resolved) => {
            debug!("item resolved from {:?}", resolved.origin);
            view.show_item(&ItemDisplay::from_item(&resolved.item, image_base));
            Some(resolved.origin)
        }
        None => {
            view.show_not_found();
            None
        }
    }
}

/// Raw records stored under `key`. A missing key is an empty list; content
/// that is not a JSON array is an error.
pub fn load_local_records(store: &dyn KeyValueStore, key: &str) -> Result<Vec<Value>> {
    let Some(raw) = store.get(key) else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).with_context(|| format!("local storage entry {key} is not a list"))
}

/// Items stored under `key`. Unreadable content reads as empty and a record
/// that is not an item object is skipped; the rest of the list still loads.
pub fn load_local_items(store: &dyn KeyValueStore, key: &str) -> Vec<Item> {
    let records = match load_local_records(store, key) {
        Ok(records) => records,
        Err(err) => {
            warn!("ignoring malformed local storage: {err:#}");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Item>(record) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!("skipping record {index} of {key}: {err}");
                None
            }
        })
        .collect()
}

/// Append `item` to the stored list for `kind`. Existing records are written
/// back exactly as read; unreadable content is left alone and reported.
pub fn append_local_item(store: &dyn KeyValueStore, kind: ItemKind, item: Item) -> Result<()> {
    let key = storage_key(kind);
    let mut records = load_local_records(store, key)?;
    records.push(serde_json::to_value(item)?);
    store.set(key, &serde_json::to_string(&records)?)
}

pub fn storage_key(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Found => FOUND_ITEMS_KEY,
        ItemKind::Lost => LOST_ITEMS_KEY,
    }
}
