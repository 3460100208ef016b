use crate::error::{FetchError, FetchResult};
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Thin JSON-over-HTTP client shared by all dataset sources
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// No request timeout is configured; a request runs until it succeeds or
    /// fails on its own.
    pub fn new() -> Self {
        let http = Client::builder()
            .user_agent(concat!("userboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { http }
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Any non-success status is an error, as is a body that is not JSON.
    pub async fn get_json(&self, url: &Url) -> FetchResult<Value> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::transport(url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url.as_str(), status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(url.as_str(), e.to_string()))?;

        tracing::debug!("{} answered {} ({} bytes)", url, status, body.len());

        serde_json::from_slice(&body).map_err(|e| FetchError::decode(url.as_str(), e.to_string()))
    }
}
