//! Projection of an [`Item`] onto the fixed slots of the detail page.

use crate::catalog;
use chrono::{DateTime, NaiveDateTime};
use lf_api_types::Item;

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300/e5e7eb/6b7280?text=No+Image";
pub const DEFAULT_COLOR_HEX: &str = "#6b7280";
pub const DEFAULT_MATCH: &str = "85%";
pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_ITEM: &str = "Unknown Item";
pub const NO_DESCRIPTION: &str = "No description available.";

/// Every slot filled, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDisplay {
    pub name: String,
    pub image: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub color: String,
    pub color_hex: String,
    pub match_label: String,
    pub description: String,
    pub contact_info: Option<String>,
}

impl ItemDisplay {
    /// Build the display record; relative image paths resolve against `image_base`.
    pub fn from_item(item: &Item, image_base: &str) -> Self {
        let color = present(&item.color);

        let color_hex = present(&item.color_hex)
            .or_else(|| color.and_then(catalog::color_hex))
            .unwrap_or(DEFAULT_COLOR_HEX);

        Self {
            name: present(&item.item_name)
                .or_else(|| present(&item.name))
                .unwrap_or(UNKNOWN_ITEM)
                .to_owned(),
            image: present(&item.image)
                .map(|path| resolve_image_url(path, image_base))
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            category: or_unknown(&item.category),
            location: or_unknown(&item.location),
            date: present(&item.date)
                .map(format_display_date)
                .unwrap_or_else(|| UNKNOWN.to_owned()),
            color: color.unwrap_or(UNKNOWN).to_owned(),
            color_hex: color_hex.to_owned(),
            match_label: match_label(item),
            description: present(&item.description)
                .unwrap_or(NO_DESCRIPTION)
                .to_owned(),
            contact_info: present(&item.contact_info).map(str::to_owned),
        }
    }

    pub fn badge_text(&self) -> String {
        format!("{} Match", self.match_label)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn or_unknown(value: &Option<String>) -> String {
    present(value).unwrap_or(UNKNOWN).to_owned()
}

/// Explicit label first, then the numeric scores, then the default.
fn match_label(item: &Item) -> String {
    if let Some(label) = present(&item.match_label) {
        return label.to_owned();
    }
    item.match_score
        .as_ref()
        .or(item.confidence.as_ref())
        .map(|score| format!("{score}%"))
        .unwrap_or_else(|| DEFAULT_MATCH.to_owned())
}

/// Absolute and `data:` URLs pass through; anything else is an upload path
/// served by the API.
pub fn resolve_image_url(image: &str, base: &str) -> String {
    if image.starts_with("http") || image.starts_with("data:") {
        return image.to_owned();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        image.trim_start_matches('/')
    )
}

/// ISO timestamps render as `Dec 15, 2025`; anything else is shown as given.
pub fn format_display_date(raw: &str) -> String {
    if !raw.contains('T') {
        return raw.to_owned();
    }

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}
