//! Client-side filtering of the rendered `.item-card` elements.

use crate::dom;
use lf_item_core::filter::{CardAttributes, CardFilter};
use web_sys::Element;

pub const SEARCH_INPUT: &str = "search-input";
pub const CATEGORY_FILTER: &str = "category-filter";
pub const COLOR_FILTER: &str = "color-filter";

fn card_attributes(card: &Element) -> CardAttributes {
    CardAttributes {
        name: dom::data_attr(card, "name"),
        category: dom::data_attr(card, "category"),
        color: dom::data_attr(card, "color"),
        location: dom::data_attr(card, "location"),
    }
}

/// Show exactly the cards that satisfy all three criteria.
pub fn filter_items(search: &str, category: Option<&str>, color: Option<&str>) {
    let filter = CardFilter::new(search, category, color);
    let mut shown = 0usize;
    for card in dom::query_all(".item-card") {
        let visible = filter.matches(&card_attributes(&card));
        dom::set_display(&card, if visible { "block" } else { "none" });
        shown += usize::from(visible);
    }
    tracing::debug!("card filter applied, {shown} visible");
}

fn control_value(id: &str) -> Option<String> {
    dom::by_id(id).map(|el| dom::field_value(&el))
}

fn apply_current() {
    let search = control_value(SEARCH_INPUT).unwrap_or_default();
    let category = control_value(CATEGORY_FILTER);
    let color = control_value(COLOR_FILTER);
    filter_items(&search, category.as_deref(), color.as_deref());
}

/// Re-filter whenever one of the three controls changes.
pub fn bind_filters() {
    if let Some(search) = dom::by_id(SEARCH_INPUT) {
        dom::listen(&search, "input", |_| apply_current());
    }
    for id in [CATEGORY_FILTER, COLOR_FILTER] {
        if let Some(select) = dom::by_id(id) {
            dom::listen(&select, "change", |_| apply_current());
        }
    }
}
