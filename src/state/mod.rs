/// State management module
///
/// This module handles all application state, including:
/// - Catalog records (data.rs)
/// - The fetch lifecycle of the catalog (catalog.rs)
/// - Category filter entries (categories.rs)
/// - Price range and slider clamping (price.rs)
/// - Visible-set derivation (filter.rs)

pub mod catalog;
pub mod categories;
pub mod data;
pub mod filter;
pub mod price;
