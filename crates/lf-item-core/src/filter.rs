//! Visibility rule for the rendered item cards on the search page.

/// The `data-*` attributes of one `.item-card`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardAttributes {
    pub name: String,
    pub category: String,
    pub color: String,
    pub location: String,
}

/// Search text plus category and colour selections. Empty text, and empty or
/// `all` selections, match every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    search: Option<String>,
    category: Option<String>,
    color: Option<String>,
}

impl CardFilter {
    pub fn new(search: &str, category: Option<&str>, color: Option<&str>) -> Self {
        Self {
            search: (!search.is_empty()).then(|| search.to_lowercase()),
            category: selection(category),
            color: selection(color),
        }
    }

    pub fn matches(&self, card: &CardAttributes) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|needle| {
            card.name.to_lowercase().contains(needle)
                || card.location.to_lowercase().contains(needle)
        });
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| card.category == category);
        let matches_color = self
            .color
            .as_deref()
            .is_none_or(|color| card.color == color);

        matches_search && matches_category && matches_color
    }
}

fn selection(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty() && *v != "all")
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, category: &str, color: &str, location: &str) -> CardAttributes {
        CardAttributes {
            name: name.to_owned(),
            category: category.to_owned(),
            color: color.to_owned(),
            location: location.to_owned(),
        }
    }

    fn cards() -> Vec<CardAttributes> {
        vec![
            card("Black Backpack", "Bags", "Black", "Library - 2nd Floor"),
            card("iPhone 15 Pro", "Electronics", "Blue", "Cafeteria"),
            card("MacBook Pro 16", "Electronics", "Gray", "Study Room 304"),
            card("Sony Headphones", "Electronics", "Black", "Gym Locker Room"),
        ]
    }

    fn visible(filter: &CardFilter) -> Vec<String> {
        cards()
            .into_iter()
            .filter(|c| filter.matches(c))
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn empty_and_all_filters_show_everything() {
        assert_eq!(visible(&CardFilter::new("", None, None)).len(), 4);
        assert_eq!(visible(&CardFilter::new("", Some("all"), Some(""))).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_location() {
        assert_eq!(visible(&CardFilter::new("PRO", None, None)), vec!["iPhone 15 Pro", "MacBook Pro 16"]);
        assert_eq!(visible(&CardFilter::new("locker", None, None)), vec!["Sony Headphones"]);
    }

    #[test]
    fn all_three_predicates_must_hold() {
        let filter = CardFilter::new("o", Some("Electronics"), Some("Black"));
        assert_eq!(visible(&filter), vec!["Sony Headphones"]);

        let filter = CardFilter::new("backpack", Some("Electronics"), None);
        assert!(visible(&filter).is_empty());
    }

    #[test]
    fn category_and_color_are_exact() {
        assert!(visible(&CardFilter::new("", Some("electronics"), None)).is_empty());
        assert_eq!(visible(&CardFilter::new("", None, Some("Gray"))), vec!["MacBook Pro 16"]);
    }
}
