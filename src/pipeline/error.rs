//! Why a submission did not go through

use super::ValidationResult;
use crate::api::TransportError;
use thiserror::Error;

/// Form-level hint next to the inline field errors
pub const VALIDATION_FAILURE_MESSAGE: &str = "Please fix the highlighted fields.";

/// Shown when the API rejects a submission without explaining why
pub const GENERIC_FAILURE_MESSAGE: &str = "Submission failed. Please try again.";
/// Shown for any transport-level failure
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Every way a submit attempt can fail. All of them are handled by the
/// caller of the pipeline and shown on the form.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Some fields failed their checks; nothing was sent
    #[error("{} field(s) failed validation", .0.fields().count())]
    Validation(ValidationResult),
    /// The API answered but did not accept the submission
    #[error("submission rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Business {
        status: u16,
        message: Option<String>,
    },
    /// The request failed or the response was unreadable
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmissionError {
    /// Text shown inline on the form
    pub fn user_message(&self) -> &str {
        match self {
            Self::Business {
                message: Some(message),
                ..
            } => message,
            Self::Business { message: None, .. } => GENERIC_FAILURE_MESSAGE,
            Self::Transport(_) => NETWORK_FAILURE_MESSAGE,
            Self::Validation(_) => VALIDATION_FAILURE_MESSAGE,
        }
    }

    /// Per-field messages, for validation failures only
    pub fn field_errors(&self) -> Option<&ValidationResult> {
        match self {
            Self::Validation(result) => Some(result),
            _ => None,
        }
    }
}
