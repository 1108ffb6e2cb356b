//! Static lookup data: colour swatches and the built-in sample items.

use lf_api_types::Item;

const COLOR_HEX: &[(&str, &str)] = &[
    ("Black", "#000000"),
    ("White", "#ffffff"),
    ("Red", "#dc2626"),
    ("Blue", "#2563eb"),
    ("Green", "#16a34a"),
    ("Yellow", "#eab308"),
    ("Orange", "#ea580c"),
    ("Purple", "#9333ea"),
    ("Pink", "#ec4899"),
    ("Gray", "#6b7280"),
    ("Brown", "#92400e"),
    ("Silver", "#9ca3af"),
];

/// Display hex for a colour name. Names are matched exactly.
pub fn color_hex(color: &str) -> Option<&'static str> {
    COLOR_HEX
        .iter()
        .find(|(name, _)| *name == color)
        .map(|(_, hex)| *hex)
}

struct SampleItem {
    name: &'static str,
    image: &'static str,
    category: &'static str,
    location: &'static str,
    date: &'static str,
    color: &'static str,
    color_hex: &'static str,
    match_label: &'static str,
    description: &'static str,
}

const SAMPLE_ITEMS: &[SampleItem] = &[
    SampleItem {
        name: "Black Backpack",
        image: "https://images.unsplash.com/photo-1535982330050-f1c2fb79ff78",
        category: "Bags",
        location: "Library - 2nd Floor",
        date: "Dec 15, 2025",
        color: "Black",
        color_hex: "#000000",
        match_label: "95%",
        description: "A black backpack found near the library on the second floor. It has multiple compartments and appears lightly used.",
    },
    SampleItem {
        name: "iPhone 15 Pro",
        image: "https://images.unsplash.com/photo-1741061963569-9d0ef54d10d2",
        category: "Electronics",
        location: "Cafeteria",
        date: "Dec 16, 2025",
        color: "Blue",
        color_hex: "#2563eb",
        match_label: "88%",
        description: "This iPhone 15 Pro was found at the cafeteria. The device appears to be in good condition and is currently secured.",
    },
    SampleItem {
        name: "Key Set with Brown Leather Tag",
        image: "https://images.unsplash.com/photo-1703355685886-8ef78d28ae9c",
        category: "Keys",
        location: "Parking Lot B",
        date: "Dec 14, 2025",
        color: "Silver",
        color_hex: "#9ca3af",
        match_label: "92%",
        description: "A set of keys attached to a brown leather tag found in Parking Lot B.",
    },
    SampleItem {
        name: "MacBook Pro 16",
        image: "https://images.unsplash.com/photo-1511385348-a52b4a160dc2",
        category: "Electronics",
        location: "Study Room 304",
        date: "Dec 17, 2025",
        color: "Gray",
        color_hex: "#6b7280",
        match_label: "85%",
        description: "A MacBook Pro 16-inch laptop found in Study Room 304. Appears clean and well-maintained.",
    },
    SampleItem {
        name: "Sony WH-1000XM5 Headphones",
        image: "https://images.unsplash.com/photo-1572119244337-bcb4aae995af",
        category: "Electronics",
        location: "Gym Locker Room",
        date: "Dec 13, 2025",
        color: "Black",
        color_hex: "#000000",
        match_label: "90%",
        description: "Sony WH-1000XM5 noise-cancelling headphones found in the gym locker room.",
    },
    SampleItem {
        name: "Red Sports Water Bottle",
        image: "https://images.unsplash.com/photo-1746484592922-b1dd99a7ff13",
        category: "Personal Items",
        location: "Basketball Court",
        date: "Dec 16, 2025",
        color: "Red",
        color_hex: "#dc2626",
        match_label: "78%",
        description: "A red sports water bottle found near the basketball court.",
    },
];

impl SampleItem {
    fn to_item(&self) -> Item {
        Item {
            item_name: Some(self.name.to_owned()),
            image: Some(self.image.to_owned()),
            category: Some(self.category.to_owned()),
            location: Some(self.location.to_owned()),
            date: Some(self.date.to_owned()),
            color: Some(self.color.to_owned()),
            color_hex: Some(self.color_hex.to_owned()),
            match_label: Some(self.match_label.to_owned()),
            description: Some(self.description.to_owned()),
            ..Default::default()
        }
    }
}

/// Look up a sample item by its exact name.
pub fn sample_item(name: &str) -> Option<Item> {
    SAMPLE_ITEMS
        .iter()
        .find(|sample| sample.name == name)
        .map(SampleItem::to_item)
}

pub fn sample_names() -> impl Iterator<Item = &'static str> {
    SAMPLE_ITEMS.iter().map(|sample| sample.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lookup_is_exact() {
        assert_eq!(color_hex("Brown"), Some("#92400e"));
        assert_eq!(color_hex("brown"), None);
        assert_eq!(color_hex("Teal"), None);
    }

    #[test]
    fn sample_item_carries_its_name() {
        let item = sample_item("MacBook Pro 16").expect("catalog entry");
        assert_eq!(item.item_name.as_deref(), Some("MacBook Pro 16"));
        assert_eq!(item.match_label.as_deref(), Some("85%"));
        assert!(sample_item("Blue Umbrella").is_none());
    }

    #[test]
    fn sample_swatches_agree_with_color_table() {
        for name in sample_names() {
            let item = sample_item(name).expect("listed name resolves");
            let color = item.color.as_deref().unwrap_or_default();
            assert_eq!(item.color_hex.as_deref(), color_hex(color), "{name}");
        }
    }
}
