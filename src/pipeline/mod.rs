//! Form submission pipeline
//!
//! Validate → serialize → submit → report. Every stage is independent of the
//! terminal UI; the app only feeds field values in and renders the report.

mod error;
mod kind;
mod orchestrator;
mod serialize;
mod validate;
mod values;

pub use error::NETWORK_FAILURE_MESSAGE;
pub use kind::FormKind;
pub use orchestrator::{begin, PipelinePhase, SubmissionReport, SubmitAttempt, SubmitControl};
pub use serialize::{serialize, SubmissionPayload};
pub use validate::{
    validate, ValidationResult, COMMITMENT_FIELD, COMMITMENT_MESSAGE, EMAIL_FIELD,
    REQUIRED_MESSAGE, YEAR_FIELD,
};
pub use values::FieldValues;
