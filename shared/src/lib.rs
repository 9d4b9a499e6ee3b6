//! Shared types for the storefront
//!
//! Wire models for the remote product catalog and the unified error type
//! used by the client and the application crates.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Product, ProductId, Rating};
pub use serde::{Deserialize, Serialize};
