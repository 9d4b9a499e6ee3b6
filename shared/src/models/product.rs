//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier as issued by the catalog API
pub type ProductId = i64;

/// Product entity as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price, a JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    /// Category label (free text, compared exactly)
    pub category: String,
    /// Image URI
    pub image: String,
    pub rating: Rating,
}

/// Aggregated customer rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5
    pub rate: f64,
    /// Number of ratings
    pub count: u32,
}

impl Product {
    /// Price rendered as a currency amount, e.g. `$109.95`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price.round_dp(2))
    }

    /// Category label as shown in listings
    pub fn display_category(&self) -> String {
        self.category.to_uppercase()
    }

    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}
