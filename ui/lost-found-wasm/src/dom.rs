//! DOM helpers and the element bindings of the item detail page.
//!
//! Page elements are optional: each page only carries the parts of the
//! markup it needs, so lookups return `Option` and binders skip what is absent.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> Option<HtmlElement> {
    document().body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect_nodes(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect_nodes(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect_nodes(nl: &web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn data_attr(el: &Element, name: &str) -> String {
    el.get_attribute(&format!("data-{name}")).unwrap_or_default()
}

/// Current value of an input, select or textarea; text content otherwise.
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        el.text_content().unwrap_or_default()
    }
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_display(el: &Element, value: &str) {
    set_style(el, "display", value);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

/// Add a listener and leak it for the lifetime of the page.
pub fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!("failed to bind {event} listener: {err:?}");
    }
    cb.forget();
}

pub fn navigate(page: &str) {
    if let Err(err) = window().location().set_href(page) {
        tracing::warn!("navigation to {page} failed: {err:?}");
    }
}

// ── Item detail slots ──

/// Fixed slots of the item detail page.
#[derive(Clone)]
pub struct ItemSlots {
    pub image: HtmlImageElement,
    pub name: Element,
    pub category: Element,
    pub location: Element,
    pub date: Element,
    pub color: Element,
    pub color_dot: Element,
    pub description: Element,
    pub match_badge: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_img {
    ($id:expr) => {
        by_id_typed::<HtmlImageElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing img #{}", $id)))?
    };
}

impl ItemSlots {
    /// `Ok(None)` when the current page is not an item detail page.
    pub fn bind() -> Result<Option<ItemSlots>, JsValue> {
        if by_id("item-name").is_none() {
            return Ok(None);
        }

        Ok(Some(ItemSlots {
            image: get_img!("item-image"),
            name: get_el!("item-name"),
            category: get_el!("item-category"),
            location: get_el!("item-location"),
            date: get_el!("item-date"),
            color: get_el!("item-color"),
            color_dot: get_el!("item-color-dot"),
            description: get_el!("item-description"),
            match_badge: get_el!("match-badge"),
        }))
    }
}
