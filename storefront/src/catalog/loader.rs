//! Catalog loader

use super::Catalog;
use shared::error::{AppError, AppResult};
use std::sync::Arc;
use std::time::Instant;
use storefront_client::CatalogSource;

/// Reads the full catalog from a source in a single request
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetch the catalog once. No retry; the failure is logged and returned.
    pub async fn load(&self) -> AppResult<Catalog> {
        let started = Instant::now();
        match self.source.fetch_products().await {
            Ok(products) => {
                let catalog = Catalog::new(products);
                tracing::info!(
                    products = catalog.len(),
                    categories = catalog.categories().len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Catalog loaded"
                );
                Ok(catalog)
            }
            Err(e) => {
                let err = AppError::from(e);
                tracing::error!(code = %err.code, error = %err, "Error fetching products");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader").finish_non_exhaustive()
    }
}
