//! API configuration and the `LostFoundAPI` JavaScript binding.
//!
//! `base_url()` resolves the backend location; `LostFoundAPI` exposes every
//! client operation to page scripts as promise-returning methods.

use crate::dom;
use crate::state::{self, BrowserStore};
use js_sys::{Promise, Uint8Array};
use lf_api_client::{ApiClient, ApiError};
use lf_api_types::{ItemFilters, ItemKind, MatchRequest, ReportItemRequest};
use lf_item_core::resolve::append_local_item;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise};

pub const API_BASE_STORAGE_KEY: &str = "lf_api_base";
pub const API_BASE_META: &str = "lf-api-base";

/// Determine the API base URL.
///
/// Priority: `localStorage["lf_api_base"]` → `<meta name="lf-api-base">` →
/// the client default.
pub fn base_url() -> Option<String> {
    if let Some(v) = state::local_get(API_BASE_STORAGE_KEY) {
        if !v.trim().is_empty() {
            return Some(v);
        }
    }

    dom::query(&format!("meta[name=\"{API_BASE_META}\"]"))
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|v| !v.trim().is_empty())
}

thread_local! {
    static CLIENT: ApiClient = ApiClient::new(base_url());
}

pub fn client() -> ApiClient {
    CLIENT.with(ApiClient::clone)
}

fn to_js<T: Serialize>(result: Result<T, ApiError>) -> Result<JsValue, JsValue> {
    match result {
        Ok(value) => value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(JsValue::from),
        Err(err) => Err(js_sys::Error::new(&err.to_string()).into()),
    }
}

fn from_js<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

/// Promise-based API surface for page scripts, called without an instance:
/// `LostFoundAPI.getItemDetails("lost", "3")`.
#[wasm_bindgen(js_name = LostFoundAPI)]
pub struct LostFoundApi {
    _private: (),
}

#[wasm_bindgen(js_class = LostFoundAPI)]
impl LostFoundApi {
    #[wasm_bindgen(js_name = baseUrl)]
    pub fn base_url() -> String {
        client().base_url().to_owned()
    }

    #[wasm_bindgen(js_name = healthCheck)]
    pub fn health_check() -> Promise {
        let client = client();
        future_to_promise(async move { to_js(client.health_check().await) })
    }

    #[wasm_bindgen(js_name = analyzeImage)]
    pub fn analyze_image(file: web_sys::File) -> Promise {
        let client = client();
        future_to_promise(async move {
            let buffer = JsFuture::from(file.array_buffer()).await?;
            let bytes = Uint8Array::new(&buffer).to_vec();
            to_js(client.analyze_image(&file.name(), bytes, &file.type_()).await)
        })
    }

    #[wasm_bindgen(js_name = reportLostItem)]
    pub fn report_lost_item(data: JsValue) -> Promise {
        report(ItemKind::Lost, data)
    }

    #[wasm_bindgen(js_name = reportFoundItem)]
    pub fn report_found_item(data: JsValue) -> Promise {
        report(ItemKind::Found, data)
    }

    #[wasm_bindgen(js_name = getLostItems)]
    pub fn get_lost_items(filters: JsValue) -> Promise {
        list(ItemKind::Lost, filters)
    }

    #[wasm_bindgen(js_name = getFoundItems)]
    pub fn get_found_items(filters: JsValue) -> Promise {
        list(ItemKind::Found, filters)
    }

    #[wasm_bindgen(js_name = getItemDetails)]
    pub fn get_item_details(item_type: String, item_id: String) -> Promise {
        let client = client();
        future_to_promise(async move {
            let kind = item_type
                .parse::<ItemKind>()
                .map_err(|err| JsValue::from(js_sys::Error::new(&err)))?;
            to_js(client.get_item_detail(kind, &item_id).await)
        })
    }

    #[wasm_bindgen(js_name = matchItems)]
    pub fn match_items(data: JsValue) -> Promise {
        let client = client();
        future_to_promise(async move {
            let req: MatchRequest = from_js(data)?;
            to_js(client.match_items(&req).await)
        })
    }

    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats() -> Promise {
        let client = client();
        future_to_promise(async move { to_js(client.get_stats().await) })
    }
}

/// Reports also land in local storage so the detail page can find them
/// while the API is away.
fn report(kind: ItemKind, data: JsValue) -> Promise {
    let client = client();
    future_to_promise(async move {
        let req: ReportItemRequest = from_js(data)?;
        let result = client.report(kind, &req).await;
        if let Ok(response) = &result {
            if let Err(err) = append_local_item(&BrowserStore, kind, response.item.clone()) {
                warn!("reported item not cached locally: {err:#}");
            }
        }
        to_js(result)
    })
}

fn list(kind: ItemKind, filters: JsValue) -> Promise {
    let client = client();
    future_to_promise(async move {
        let filters: ItemFilters = from_js(filters)?;
        to_js(client.list(kind, &filters).await)
    })
}
