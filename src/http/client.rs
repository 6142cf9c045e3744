//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Issue exactly one GET per target
//! - Capture status and headers, drop the body unread
//! - Wrap transport failures (bad URL, DNS, refused, TLS) in `FetchError`
//!
//! # Design Decisions
//! - Client defaults for timeouts, redirects and TLS
//! - No retries

use std::future::Future;

use reqwest::Client;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::http::response::ResponseSnapshot;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A request that never produced a response.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct FetchError {
    /// URL that was requested.
    pub url: String,
    #[source]
    source: BoxError,
}

impl FetchError {
    pub fn new(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Performs a single GET request for a URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResponseSnapshot, FetchError>>;
}

/// `Fetch` implementation backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build the client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(ref agent) = config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<ResponseSnapshot, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;

        tracing::debug!(
            url = %url,
            status = %response.status(),
            headers = response.headers().len(),
            "Response received"
        );

        Ok(ResponseSnapshot::new(
            response.status(),
            response.headers().clone(),
        ))
    }
}
