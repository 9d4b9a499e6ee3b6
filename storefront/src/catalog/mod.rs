//! Product catalog
//!
//! The catalog is read once from a [`CatalogSource`](storefront_client::CatalogSource)
//! and never mutated afterwards. Category labels are derived at construction.

mod loader;

pub use loader::CatalogLoader;

use shared::models::Product;
use std::collections::HashSet;

/// Immutable snapshot of the remote catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog, deriving distinct categories in first-seen order
    pub fn new(products: Vec<Product>) -> Self {
        let categories: Vec<String> = {
            let mut seen = HashSet::new();
            products
                .iter()
                .filter(|p| seen.insert(p.category.as_str()))
                .map(|p| p.category.clone())
                .collect()
        };

        Self { products, categories }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct category labels, first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::product;
    use super::*;

    #[test]
    fn test_categories_first_seen_dedup() {
        let catalog = Catalog::new(vec![
            product(1, "A", "jewelery", 100, 4.0),
            product(2, "B", "electronics", 100, 4.0),
            product(3, "C", "jewelery", 100, 4.0),
            product(4, "D", "men's clothing", 100, 4.0),
            product(5, "E", "electronics", 100, 4.0),
        ]);

        assert_eq!(catalog.categories(), ["jewelery", "electronics", "men's clothing"]);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let catalog = Catalog::new(vec![
            product(1, "A", "Books", 100, 4.0),
            product(2, "B", "books", 100, 4.0),
        ]);
        assert_eq!(catalog.categories(), ["Books", "books"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
