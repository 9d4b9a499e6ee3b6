//! Storefront Client - HTTP client for the product catalog API
//!
//! Provides the network call that loads the catalog, plus the
//! [`CatalogSource`] seam the application loads through.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;

pub use catalog::CatalogSource;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Product, ProductId, Rating};
