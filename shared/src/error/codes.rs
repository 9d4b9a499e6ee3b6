//! Error codes
//!
//! - 6xxx: Catalog errors
//! - 9xxx: Transport and system errors

use serde::Serialize;
use std::fmt;

/// Numeric error code, serialized as u16
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 6xxx: Catalog ====================
    /// Catalog payload is not a product list
    InvalidCatalog = 6002,
    /// Catalog endpoint does not exist
    CatalogNotFound = 6003,

    // ==================== 9xxx: System ====================
    /// Network transport error
    NetworkError = 9002,
    /// Upstream answered with a non-success status
    UpstreamStatus = 9003,
    /// Invalid configuration
    InvalidConfig = 9004,
    /// Request timed out
    Timeout = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCatalog => "Product catalog response is invalid",
            ErrorCode::CatalogNotFound => "Product catalog endpoint not found",

            ErrorCode::NetworkError => "Network error",
            ErrorCode::UpstreamStatus => "Upstream service returned an error",
            ErrorCode::InvalidConfig => "Invalid configuration",
            ErrorCode::Timeout => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
