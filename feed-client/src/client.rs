//! HTTP source for the package feed
//!
//! `PackageSource` is the port the renderer fetches through; `HttpPackageSource`
//! is the reqwest adapter bound to one endpoint URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::Config;
use crate::error::FeedError;

/// Something that returns the raw feed body
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Fetch the response body as text
    async fn fetch(&self) -> Result<String, FeedError>;

    /// Where the feed is fetched from (for logging)
    fn endpoint(&self) -> &str;
}

/// HTTP client for the Oraculo package endpoint
#[derive(Clone)]
pub struct HttpPackageSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPackageSource {
    pub fn from_config(config: &Config) -> Result<Self, FeedError> {
        Self::new(&config.api_url, &config.endpoint, config.request_timeout)
    }

    /// Create a source for `endpoint` under `base_url`.
    ///
    /// Without a timeout a hung request never resolves.
    pub fn new(
        base_url: &str,
        endpoint: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: join_url(base_url, endpoint),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PackageSource for HttpPackageSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}
