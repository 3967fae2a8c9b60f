/// Category filter entries derived from the product list
use std::cmp::Ordering;
use std::collections::HashSet;

use super::data::Product;

/// One checkbox in the category filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub title: String,
    pub selected: bool,
}

impl CategoryFilter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            selected: false,
        }
    }
}

/// Collect the distinct categories in first-seen order, unselected,
/// then sort them by title
pub fn extract_categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories: Vec<CategoryFilter> = products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| CategoryFilter::new(p.category.as_str()))
        .collect();

    categories.sort_by(|a, b| compare_titles(&a.title, &b.title));
    categories
}

/// Rebuild the entry list with `title` set to `selected`.
///
/// The entry is replaced rather than edited; a title that was not present
/// is added.
pub fn toggle_category(categories: &[CategoryFilter], title: &str, selected: bool) -> Vec<CategoryFilter> {
    let mut updated: Vec<CategoryFilter> = categories
        .iter()
        .filter(|c| c.title != title)
        .cloned()
        .collect();
    updated.push(CategoryFilter {
        title: title.to_string(),
        selected,
    });
    updated.sort_by(|a, b| compare_titles(&a.title, &b.title));
    updated
}

pub fn any_selected(categories: &[CategoryFilter]) -> bool {
    categories.iter().any(|c| c.selected)
}

/// Case-insensitive ordering, with byte order breaking ties so the sort is total
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Rating;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("item {}", id),
            description: String::new(),
            category: category.to_string(),
            price: 10.0,
            image: String::new(),
            rating: Rating { rate: 0.0, count: 0 },
        }
    }

    fn titles(categories: &[CategoryFilter]) -> Vec<&str> {
        categories.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_unique_and_sorted() {
        let products = vec![
            product(1, "men's clothing"),
            product(2, "jewelery"),
            product(3, "electronics"),
            product(4, "men's clothing"),
            product(5, "Women's clothing"),
            product(6, "electronics"),
        ];
        let categories = extract_categories(&products);
        assert_eq!(
            titles(&categories),
            vec!["electronics", "jewelery", "men's clothing", "Women's clothing"]
        );
        assert!(categories.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_empty_list() {
        assert!(extract_categories(&[]).is_empty());
    }

    #[test]
    fn test_toggle_keeps_order() {
        let products = vec![product(1, "b"), product(2, "a"), product(3, "c")];
        let categories = extract_categories(&products);

        let toggled = toggle_category(&categories, "a", true);
        assert_eq!(titles(&toggled), vec!["a", "b", "c"]);
        assert!(toggled[0].selected);
        assert!(any_selected(&toggled));

        let cleared = toggle_category(&toggled, "a", false);
        assert!(!any_selected(&cleared));
    }

    #[test]
    fn test_toggle_unknown_title_is_added() {
        let categories = vec![CategoryFilter::new("b")];
        let toggled = toggle_category(&categories, "a", true);
        assert_eq!(titles(&toggled), vec!["a", "b"]);
    }
}
