use crate::view::{DEFAULT_PAGE_SIZE, Theme};
use std::str::FromStr;
use std::time::Duration;
use storefront_client::ClientConfig;
use storefront_client::config::{DEFAULT_BASE_URL, DEFAULT_CATALOG_PATH};

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_BASE_URL | https://fakestoreapi.com | Catalog API base URL |
/// | CATALOG_PATH | products | Catalog endpoint path |
/// | REQUEST_TIMEOUT_MS | 30000 | HTTP timeout (ms) |
/// | PAGE_SIZE | 6 | Items revealed per page |
/// | LOAD_MORE_DELAY_MS | 500 | Delay before a page is revealed (ms) |
/// | THEME | light | Initial theme |
/// | LOG_LEVEL | info | Default log filter |
/// | LOG_DIR | (unset) | Directory for rotating log files |
///
/// # Example
///
/// ```ignore
/// THEME=dark PAGE_SIZE=10 cargo run -p storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
    pub catalog_path: String,
    pub request_timeout_ms: u64,
    /// Items per page, at least 1
    pub page_size: usize,
    pub load_more_delay_ms: u64,
    pub theme: Theme,
    pub log_level: String,
    /// File logging is off when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_base_url: lookup("CATALOG_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            catalog_path: lookup("CATALOG_PATH").unwrap_or_else(|| DEFAULT_CATALOG_PATH.into()),
            request_timeout_ms: parsed(&lookup, "REQUEST_TIMEOUT_MS").unwrap_or(30_000),
            page_size: parsed(&lookup, "PAGE_SIZE").unwrap_or(DEFAULT_PAGE_SIZE).max(1),
            load_more_delay_ms: parsed(&lookup, "LOAD_MORE_DELAY_MS").unwrap_or(500),
            theme: lookup("THEME")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
        }
    }

    /// HTTP client configuration for the catalog endpoint
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.catalog_base_url)
            .with_catalog_path(&self.catalog_path)
            .with_timeout_ms(self.request_timeout_ms)
    }

    pub fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
