//! Visual effects: button ripples, staggered entrances, lazy image fade-in.

use crate::dom;
use gloo_timers::callback::Timeout;
use lf_item_core::effects::{RIPPLE_DURATION_MS, RippleGeometry, stagger_delay};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, MouseEvent};

const ANIMATED: &str = ".fade-in, .slide-up, .slide-in-left, .slide-in-right, .scale-in, .stagger-item";
const RIPPLE_KEYFRAMES: &str = "@keyframes ripple-animation { to { transform: scale(4); opacity: 0; } }";

fn create_ripple(event: &MouseEvent) -> Result<(), JsValue> {
    let Some(button) = event
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return Ok(());
    };

    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::new(
        (rect.left(), rect.top(), rect.width(), rect.height()),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    let ripple = dom::create_element("span")?;
    ripple.set_attribute("style", &geometry.css())?;
    button.append_child(&ripple)?;

    Timeout::new(RIPPLE_DURATION_MS, move || ripple.remove()).forget();
    Ok(())
}

pub fn bind_ripples() {
    for button in dom::query_all(".btn") {
        dom::listen(&button, "click", |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                if let Err(err) = create_ripple(mouse) {
                    tracing::debug!("ripple skipped: {err:?}");
                }
            }
        });
    }
}

/// Register the ripple keyframes once per page.
pub fn inject_ripple_keyframes() -> Result<(), JsValue> {
    let Some(head) = dom::document().head() else {
        return Ok(());
    };
    let style = dom::create_element("style")?;
    dom::set_text(&style, RIPPLE_KEYFRAMES);
    head.append_child(&style)?;
    Ok(())
}

pub fn stagger_animations() {
    for (index, el) in dom::query_all(ANIMATED).iter().enumerate() {
        dom::set_style(el, "animation-delay", &stagger_delay(index));
    }
}

/// Fade images in the first time they scroll into view.
pub fn lazy_images() -> Result<(), JsValue> {
    let supported = js_sys::Reflect::has(&dom::window(), &JsValue::from_str("IntersectionObserver"))?;
    if !supported {
        return Ok(());
    }

    let cb = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                dom::add_class(&target, "fade-in");
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(cb.as_ref().unchecked_ref())?;
    cb.forget();

    for img in dom::query_all("img") {
        observer.observe(&img);
    }
    Ok(())
}
