//! Unified error system for the storefront
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`AppError`]: Error with code, message and optional details
//!
//! # Error Code Ranges
//!
//! - 6xxx: Catalog errors
//! - 9xxx: Transport and system errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InvalidCatalog);
//! assert_eq!(err.code.code(), 6002);
//!
//! let err = AppError::network("connection refused").with_detail("url", "http://localhost");
//! assert!(err.details.is_some());
//! ```

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
