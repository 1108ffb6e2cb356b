//! Page-level helpers callable from markup: modals, navigation, loading state.

use crate::dom;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = navigateTo)]
pub fn navigate_to(page: &str) {
    dom::navigate(page);
}

fn set_body_overflow(value: &str) {
    if let Some(body) = dom::body() {
        let _ = body.style().set_property("overflow", value);
    }
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(modal_id: &str) {
    if let Some(modal) = dom::by_id(modal_id) {
        dom::set_display(&modal, "block");
        set_body_overflow("hidden");
    }
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(modal_id: &str) {
    if let Some(modal) = dom::by_id(modal_id) {
        dom::set_display(&modal, "none");
        set_body_overflow("auto");
    }
}

/// Replace the contents of `#container_id` with a spinner and a message.
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(container_id: &str, message: Option<String>) -> Result<(), JsValue> {
    let Some(container) = dom::by_id(container_id) else {
        return Ok(());
    };

    let wrapper = dom::create_element("div")?;
    wrapper.set_class_name("flex flex-col items-center justify-center space-y-4 p-8");
    let spinner = dom::create_element("div")?;
    spinner.set_class_name("loading-spinner");
    let text = dom::create_element("p")?;
    text.set_class_name("text-muted-foreground");
    dom::set_text(&text, message.as_deref().unwrap_or("Loading..."));

    wrapper.append_child(&spinner)?;
    wrapper.append_child(&text)?;
    container.set_inner_html("");
    container.append_child(&wrapper)?;
    Ok(())
}

pub fn bind_mobile_menu() {
    let (Some(toggle), Some(menu)) = (dom::by_id("mobile-menu-toggle"), dom::by_id("mobile-menu")) else {
        return;
    };
    dom::listen(&toggle, "click", move |_| dom::toggle_class(&menu, "hidden"));
}
