//! Trait abstraction for the submission transport to enable mocking in tests

use super::client::TransportError;
use super::outcome::SubmissionOutcome;
use crate::pipeline::SubmissionPayload;
use async_trait::async_trait;

/// Anything that can deliver a payload to the API, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// POST `payload` as JSON to `path` and interpret the response
    async fn submit(
        &self,
        path: &str,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionOutcome, TransportError>;
}
