use crate::api::{ApiClient, DatasetSource};
use crate::error::FetchResult;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// A dataset served as raw JSON from a single GET endpoint
#[derive(Debug, Clone)]
pub struct JsonEndpoint {
    client: ApiClient,
    url: Url,
}

impl JsonEndpoint {
    pub fn new(client: ApiClient, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl DatasetSource for JsonEndpoint {
    async fn fetch(&self) -> FetchResult<Value> {
        self.client.get_json(&self.url).await
    }
}
