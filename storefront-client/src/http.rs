//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::models::Product;
use std::time::Duration;

/// HTTP client for reading the product catalog
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    catalog_path: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::InvalidConfig(format!("base url '{}': {}", config.base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "unsupported scheme '{}'",
                base_url.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url,
            catalog_path: config.catalog_path.clone(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a path below the base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(status = status.as_u16(), "Catalog request rejected");
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Status {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }

        // Decode separately so a non-JSON body surfaces as a serialization error
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Catalog API ==========

    /// Fetch the full product list
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.get::<Vec<Product>>(&self.catalog_path).await
    }
}
