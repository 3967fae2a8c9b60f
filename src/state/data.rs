/// Shared data structures for the application state
///
/// These structs represent the catalog records as they arrive from the
/// product endpoint. They are never mutated after decoding.
use serde::{Deserialize, Serialize};

/// A single catalog entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Identifier assigned by the catalog service
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Category name (e.g., "electronics"); used for the category filter
    pub category: String,
    pub price: f64,
    /// URL of the product image
    pub image: String,
    pub rating: Rating,
}

/// Aggregate customer rating
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// Average score
    pub rate: f64,
    /// Number of ratings the score is averaged over
    pub count: u64,
}

impl Product {
    /// Price formatted for display, e.g. `$109.95`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price() {
        let product = Product {
            id: 1,
            title: "Backpack".to_string(),
            description: String::new(),
            category: "men's clothing".to_string(),
            price: 22.3,
            image: String::new(),
            rating: Rating { rate: 4.1, count: 259 },
        };
        assert_eq!(product.display_price(), "$22.30");
    }
}
