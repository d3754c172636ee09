//! Submission API client module

mod client;
mod outcome;
mod traits;

pub use client::{ApiClient, TransportError, DEFAULT_API_BASE};
pub use outcome::SubmissionOutcome;
pub use traits::SubmitTransport;

#[cfg(test)]
pub use traits::MockSubmitTransport;
