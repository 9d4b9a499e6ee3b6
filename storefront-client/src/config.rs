//! Client configuration

/// Default catalog API host
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Default catalog path relative to the base URL
pub const DEFAULT_CATALOG_PATH: &str = "products";

/// Client configuration for connecting to the catalog API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://fakestoreapi.com")
    pub base_url: String,

    /// Path of the product list endpoint
    pub catalog_path: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            timeout_ms: 30_000,
        }
    }

    /// Set the catalog endpoint path
    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, millis: u64) -> Self {
        self.timeout_ms = millis;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_catalog() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert_eq!(config.catalog_path, "products");
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("http://127.0.0.1:9000")
            .with_catalog_path("api/v2/items")
            .with_timeout_ms(1500);
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.catalog_path, "api/v2/items");
        assert_eq!(config.timeout_ms, 1500);
    }
}
