//! HTTP client for the submission API
//!
//! Posts JSON payloads to the ClavisNova API and turns the response into a
//! [`SubmissionOutcome`]. One attempt per call, no retries.

use super::outcome::SubmissionOutcome;
use super::traits::SubmitTransport;
use crate::pipeline::SubmissionPayload;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Default API origin
pub const DEFAULT_API_BASE: &str = "https://clavisnova.onrender.com";

/// Failures below the level of an HTTP response
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS or I/O failure
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with something that is not JSON
    #[error("response from {url} is not valid JSON: {source}")]
    MalformedBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for the submission API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`, with an optional request timeout
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API origin without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`; absolute inputs are returned as-is
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl SubmitTransport for ApiClient {
    async fn submit(
        &self,
        path: &str,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionOutcome, TransportError> {
        let url = self.resolve(path);
        tracing::debug!(%url, kind = %payload.kind(), "posting submission");

        let request_error = |source| TransportError::Request {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let text = response.text().await.map_err(request_error)?;
        tracing::debug!(%url, status = status.as_u16(), "submission response received");

        let body = serde_json::from_str(&text).map_err(|source| TransportError::MalformedBody {
            url: url.clone(),
            source,
        })?;

        Ok(SubmissionOutcome::from_response(status.as_u16(), body))
    }
}
