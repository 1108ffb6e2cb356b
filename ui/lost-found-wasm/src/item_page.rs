//! Item detail page controller.
//!
//! Reads `item`, `type` and `id` from the query string, resolves the item
//! through the API, local storage and the sample catalog, and fills the
//! page slots. With nothing resolved the body is replaced by an error view.

use crate::api;
use crate::dom::{self, ItemSlots};
use crate::state::{self, BrowserStore};
use lf_item_core::{DetailQuery, ItemDisplay, ItemView, load_item_details};
use tracing::info;
use wasm_bindgen::prelude::*;
use web_sys::UrlSearchParams;

pub const SEARCH_PAGE: &str = "search.html";

/// Writes resolved items into the detail page slots.
pub struct DomItemView {
    slots: ItemSlots,
}

impl DomItemView {
    pub fn new(slots: ItemSlots) -> Self {
        Self { slots }
    }
}

impl ItemView for DomItemView {
    fn show_item(&mut self, display: &ItemDisplay) {
        let s = &self.slots;
        s.image.set_src(&display.image);
        s.image.set_alt(&display.name);

        dom::set_text(&s.name, &display.name);
        dom::set_text(&s.category, &display.category);
        dom::set_text(&s.location, &display.location);
        dom::set_text(&s.date, &display.date);
        dom::set_text(&s.color, &display.color);
        dom::set_text(&s.description, &display.description);
        dom::set_text(&s.match_badge, &display.badge_text());
        dom::set_style(&s.color_dot, "background-color", &display.color_hex);

        if display.contact_info.is_some() {
            state::set_contact_info(display.contact_info.clone());
        }
    }

    fn show_not_found(&mut self) {
        if let Err(err) = render_not_found() {
            tracing::error!("failed to render not-found view: {err:?}");
        }
    }
}

/// Replace the whole body with the "Item Not Found" view.
pub fn render_not_found() -> Result<(), JsValue> {
    let Some(body) = dom::body() else {
        return Ok(());
    };

    let container = dom::create_element("div")?;
    container.set_class_name("container py-5 text-center");

    let heading = dom::create_element("h2")?;
    heading.set_class_name("fw-bold mb-3");
    dom::set_text(&heading, "Item Not Found");

    let text = dom::create_element("p")?;
    text.set_class_name("text-muted mb-4");
    dom::set_text(
        &text,
        "The item you are looking for does not exist or the link is invalid.",
    );

    let button = dom::create_element("button")?;
    button.set_class_name("btn btn-primary");
    dom::set_text(&button, "Back to Search");
    dom::listen(&button, "click", |_| dom::navigate(SEARCH_PAGE));

    container.append_child(&heading)?;
    container.append_child(&text)?;
    container.append_child(&button)?;

    body.set_inner_html("");
    body.append_child(&container)?;
    Ok(())
}

/// Parse the detail page query string.
pub fn detail_query() -> Result<DetailQuery, JsValue> {
    let search = dom::window().location().search()?;
    let params = UrlSearchParams::new_with_str(&search)?;
    Ok(DetailQuery::from_params(
        params.get("item"),
        params.get("type"),
        params.get("id"),
    ))
}

/// Run the controller if this page has the detail slots.
pub async fn run() -> Result<(), JsValue> {
    let Some(slots) = ItemSlots::bind()? else {
        return Ok(());
    };

    let query = detail_query()?;
    let client = api::client();
    let mut view = DomItemView::new(slots);

    let origin = load_item_details(&query, &client, &BrowserStore, &mut view, client.base_url()).await;
    info!("item detail page: {query:?} resolved from {origin:?}");
    Ok(())
}
