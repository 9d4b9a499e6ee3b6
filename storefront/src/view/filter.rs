//! View filter
//!
//! Computes the visible subset of the catalog from the search text, the
//! selected category and the sort key. The result is a pure function of its
//! inputs and is always recomputed from scratch.

use shared::models::Product;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep catalog order
    #[default]
    Default,
    /// Ascending price
    PriceLow,
    /// Descending price
    PriceHigh,
    /// Descending average rating
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Default, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Rating];

    /// Wire name (`default`, `price-low`, `price-high`, `rating`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    /// Label shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Sort By",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Rating",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Default => Ordering::Equal,
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Rating => b.rating.rate.total_cmp(&a.rating.rate),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown sort key '{}'", s))
    }
}

/// Category restriction
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive label match
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` means no restriction
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Selector value (`"all"` or the raw label)
    pub fn value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(label) => label,
        }
    }

    /// Label shown in the category selector
    pub fn label(&self) -> String {
        match self {
            Self::All => "All Categories".to_string(),
            Self::Only(label) => label.to_uppercase(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => product.category == *label,
        }
    }

    /// Selector options: "all" followed by each category
    pub fn options(categories: &[String]) -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(categories.iter().cloned().map(Self::Only))
            .collect()
    }
}

/// Inputs of the view computation besides the catalog itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl ViewQuery {
    pub fn new(search: impl Into<String>, category: CategoryFilter, sort: SortKey) -> Self {
        Self {
            search: search.into(),
            category,
            sort,
        }
    }
}

/// Indices into `products` of the items that pass `query`, in display order
pub fn select(products: &[Product], query: &ViewQuery) -> Vec<usize> {
    let needle = query.search.to_lowercase();

    let mut indices: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| query.category.matches(p))
        .filter(|(_, p)| needle.is_empty() || p.title_contains(&needle))
        .map(|(i, _)| i)
        .collect();

    if query.sort != SortKey::Default {
        // Stable: ties keep catalog order
        indices.sort_by(|&a, &b| query.sort.compare(&products[a], &products[b]));
    }

    indices
}

/// Borrowing variant of [`select`]
pub fn filter<'a>(products: &'a [Product], query: &ViewQuery) -> Vec<&'a Product> {
    select(products, query).into_iter().map(|i| &products[i]).collect()
}
