//! HTTP data sources for the dashboard
//!
//! Every dataset the dashboard shows is backed by a [`DatasetSource`]: an
//! async capability that either produces a JSON value or fails. The HTTP
//! implementations share one [`ApiClient`].

pub mod client;
pub mod endpoint;
pub mod users;

pub use client::ApiClient;
pub use endpoint::JsonEndpoint;
pub use users::{users_from_value, UserDirectory, UserProfile};

use crate::error::FetchResult;
use async_trait::async_trait;
use serde_json::Value;

/// A capability that fetches one dataset
#[async_trait]
pub trait DatasetSource: Send + Sync + std::fmt::Debug {
    /// Fetch the dataset payload.
    ///
    /// Failures must be reported as errors, never as a malformed success.
    async fn fetch(&self) -> FetchResult<Value>;
}
