//! Event binding shared by every page.
//!
//! Each binder looks up its own elements and skips silently when the current
//! page does not carry them.

use crate::{effects, filters, forms, page, preview};

/// Bind all generic page behaviour. Call once after load.
pub fn bind_events() {
    effects::stagger_animations();
    effects::bind_ripples();

    page::bind_mobile_menu();
    filters::bind_filters();
    forms::bind_forms();
    preview::bind_image_inputs();

    if let Err(err) = effects::lazy_images() {
        tracing::warn!("lazy image loading unavailable: {err:?}");
    }

    forms::smooth_progress_bar();
}
