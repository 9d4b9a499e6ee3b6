//! Catalog source abstraction

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::Product;

/// Anything that can produce the full product list in one read
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product, in the order the source returns them
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;
}

#[async_trait]
impl CatalogSource for HttpClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.products().await
    }
}
