/// Visible-set derivation
///
/// Search text, price range and category selection compose into the set of
/// products shown in the grid. Nothing here is cached; the view recomputes
/// it from the current state every time.
use super::categories::CategoryFilter;
use super::data::Product;
use super::price::PriceRange;

/// Lowercased search input. The empty string matches every title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    pub fn new(input: &str) -> Self {
        Self(input.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against a title
    pub fn matches(&self, title: &str) -> bool {
        self.0.is_empty() || title.to_lowercase().contains(&self.0)
    }
}

/// Products the category selection admits before search and price apply.
///
/// With nothing selected this is the whole list. Otherwise products are
/// grouped by selected category, in category order.
pub fn base_set<'a>(products: &'a [Product], categories: &[CategoryFilter]) -> Vec<&'a Product> {
    let selected: Vec<&str> = categories
        .iter()
        .filter(|c| c.selected)
        .map(|c| c.title.as_str())
        .collect();

    if selected.is_empty() {
        return products.iter().collect();
    }

    selected
        .into_iter()
        .flat_map(|title| products.iter().filter(move |p| p.category == title))
        .collect()
}

/// The products to display for the given filter state
pub fn visible_products<'a>(
    products: &'a [Product],
    search: &SearchText,
    price: PriceRange,
    categories: &[CategoryFilter],
) -> Vec<&'a Product> {
    base_set(products, categories)
        .into_iter()
        .filter(|p| search.matches(&p.title) && price.contains(p.price))
        .collect()
}
