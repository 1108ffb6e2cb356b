//! Form validation, simulated submission and multi-step navigation.

use crate::dom;
use gloo_timers::future::TimeoutFuture;
use lf_item_core::forms::check_required;
use lf_item_core::steps::{self, StepTransition};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement};

pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const INVALID_CLASS: &str = "border-destructive";
pub const PROGRESS_BAR: &str = "progress-bar";

/// Mark empty `[required]` fields; true when none are empty.
pub fn validate_form(form: &Element) -> bool {
    let fields = dom::query_all_within(form, "[required]");
    let results = check_required(fields.iter().map(dom::field_value));

    for (field, ok) in fields.iter().zip(&results) {
        if *ok {
            dom::remove_class(field, INVALID_CLASS);
        } else {
            dom::add_class(field, INVALID_CLASS);
        }
    }
    results.iter().all(|ok| *ok)
}

fn on_submit(form: &Element, event: &web_sys::Event) {
    event.prevent_default();
    if !validate_form(form) {
        return;
    }

    if let Some(button) = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
    {
        dom::set_text(&button, "Submitting...");
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(true);
        }
    }

    wasm_bindgen_futures::spawn_local(async {
        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
        let _ = dom::window().alert_with_message("Form submitted successfully!");
    });
}

/// Intercept every form submission on the page.
pub fn bind_forms() {
    for form in dom::query_all("form") {
        let target = form.clone();
        dom::listen(&form, "submit", move |event| on_submit(&target, &event));
    }
}

fn apply_transition(t: StepTransition) {
    if let Some(step) = dom::by_id(&format!("step-{}", t.hide)) {
        dom::set_display(&step, "none");
    }
    if let Some(step) = dom::by_id(&format!("step-{}", t.show)) {
        dom::set_display(&step, "block");
    }
    set_progress(t.progress);
}

fn set_progress(percent: f64) {
    if let Some(bar) = dom::by_id(PROGRESS_BAR) {
        dom::set_style(&bar, "width", &format!("{percent}%"));
    }
}

#[wasm_bindgen(js_name = nextStep)]
pub fn next_step(current: usize, total: usize) {
    if let Some(t) = steps::next_step(current, total) {
        apply_transition(t);
    }
}

#[wasm_bindgen(js_name = prevStep)]
pub fn prev_step(current: usize, total: usize) {
    if let Some(t) = steps::prev_step(current, total) {
        apply_transition(t);
    }
}

#[wasm_bindgen(js_name = updateProgress)]
pub fn update_progress(current: usize, total: usize) {
    set_progress(steps::progress_percent(current, total));
}

/// Animate progress bar width changes.
pub fn smooth_progress_bar() {
    if let Some(bar) = dom::by_id(PROGRESS_BAR) {
        dom::set_style(&bar, "transition", "width 0.6s cubic-bezier(0.4, 0, 0.2, 1)");
    }
}
