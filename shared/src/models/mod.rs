//! Data models
//!
//! Shared between the catalog client and the storefront application.

pub mod product;

// Re-exports
pub use product::*;
