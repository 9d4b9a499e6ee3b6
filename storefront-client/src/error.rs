//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body is not the expected JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client could not be configured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::Http(e) if e.is_timeout() => AppError::with_message(ErrorCode::Timeout, message),
            ClientError::Http(e) if e.is_decode() => AppError::invalid_catalog(message),
            ClientError::Http(_) => AppError::network(message),
            ClientError::Status { status, .. } => {
                AppError::with_message(ErrorCode::UpstreamStatus, message).with_detail("status", status)
            }
            ClientError::NotFound(_) => AppError::with_message(ErrorCode::CatalogNotFound, message),
            ClientError::Serialization(_) => AppError::invalid_catalog(message),
            ClientError::InvalidConfig(_) => AppError::invalid_config(message),
        }
    }
}
