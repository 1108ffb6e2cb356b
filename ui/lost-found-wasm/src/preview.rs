//! Local image preview and camera capture for file inputs.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, FileReader, HtmlInputElement};

pub const PREVIEW_CLASS: &str = "w-full h-auto max-h-96 object-contain bg-muted rounded-lg";

/// Render the selected file of `input` into `container` as an `<img>`.
pub fn preview_image(input: &HtmlInputElement, container: &Element) -> Result<(), JsValue> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };

    let reader = FileReader::new()?;
    let reader2 = reader.clone();
    let container = container.clone();
    let cb = Closure::once(move |_: web_sys::ProgressEvent| {
        let Some(data_url) = reader2.result().ok().and_then(|r| r.as_string()) else {
            return;
        };
        match dom::create_element("img") {
            Ok(img) => {
                let _ = img.set_attribute("src", &data_url);
                img.set_class_name(PREVIEW_CLASS);
                container.set_inner_html("");
                let _ = container.append_child(&img);
            }
            Err(err) => tracing::warn!("image preview failed: {err:?}"),
        }
    });
    reader.set_onload(Some(cb.as_ref().unchecked_ref()));
    cb.forget();
    reader.read_as_data_url(&file)
}

/// Preview every image input into `#{input-id}-preview`.
pub fn bind_image_inputs() {
    for el in dom::query_all("input[type=\"file\"][accept=\"image/*\"]") {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let target = input.clone();
        dom::listen(&input, "change", move |_| {
            let Some(preview) = dom::by_id(&format!("{}-preview", target.id())) else {
                return;
            };
            if let Err(err) = preview_image(&target, &preview) {
                tracing::warn!("image preview failed: {err:?}");
            }
        });
    }
}

/// Open the rear camera through the file input `input_id`.
#[wasm_bindgen(js_name = openCamera)]
pub fn open_camera(input_id: &str) {
    if let Some(input) = dom::by_id_typed::<HtmlInputElement>(input_id) {
        let _ = input.set_attribute("capture", "environment");
        input.click();
    }
}
