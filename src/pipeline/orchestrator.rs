//! Submission orchestration: in-flight guard, validation gate and outcome
//! interpretation
//!
//! A submit action goes through [`begin`], which either refuses (the form
//! already has a request outstanding), reports field errors, or hands back a
//! [`PendingSubmission`]. The pending submission owns the form's
//! [`InFlightGuard`] and hands it on to the [`SubmissionReport`]. The control
//! stays disabled until whoever applies the report drops it, and dropping the
//! submission or the report on any other path restores it as well.

use super::error::SubmissionError;
use super::{serialize, validate, FieldValues, FormKind, SubmissionPayload};
use crate::api::SubmitTransport;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Label of a submit control while its request is outstanding
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelinePhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Success,
    Failed,
}

impl PipelinePhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Invalid => "invalid",
            Self::Submitting => "submitting",
            Self::Success => "sent",
            Self::Failed => "failed",
        }
    }
}

/// Submit button of one form instance, carrying its in-flight flag
#[derive(Debug, Clone)]
pub struct SubmitControl {
    kind: FormKind,
    in_flight: Arc<AtomicBool>,
}

impl SubmitControl {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// False while a request from this form is outstanding
    pub fn is_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }

    /// Current button label
    pub fn label(&self) -> &'static str {
        if self.is_enabled() {
            self.kind.submit_label()
        } else {
            SUBMITTING_LABEL
        }
    }

    /// Claim the control; `None` when it is already claimed
    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: Arc::clone(&self.in_flight),
            })
    }
}

/// Holds a submit control disabled until dropped
#[derive(Debug)]
pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Result of a submit action before any network activity
#[derive(Debug)]
pub enum SubmitAttempt {
    /// A request from this form is still outstanding; nothing happened
    Busy,
    /// Validation failed; no request was made. Always
    /// [`SubmissionError::Validation`].
    Invalid(SubmissionError),
    /// Validation passed; the payload is ready to send
    Started(PendingSubmission),
}

/// A validated submission waiting to be sent
#[derive(Debug)]
pub struct PendingSubmission {
    kind: FormKind,
    payload: SubmissionPayload,
    guard: InFlightGuard,
}

/// Data returned by the API for an accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub id: Option<String>,
    pub server_message: Option<String>,
    /// Any other fields of the response body
    pub fields: Map<String, Value>,
}

/// Final result of one submission, delivered back to the UI
#[derive(Debug)]
pub struct SubmissionReport {
    pub kind: FormKind,
    pub result: Result<Accepted, SubmissionError>,
    /// Keeps the form's submit control disabled until the report is applied
    pub guard: InFlightGuard,
}

impl SubmissionReport {
    pub fn phase(&self) -> PipelinePhase {
        match self.result {
            Ok(_) => PipelinePhase::Success,
            Err(_) => PipelinePhase::Failed,
        }
    }
}

/// Start a submit cycle for `kind`.
///
/// Claims `control`, validates `values` and builds the payload. The claim is
/// released right away unless the result is [`SubmitAttempt::Started`], in
/// which case it travels with the submission and then its report.
pub fn begin(kind: FormKind, values: &FieldValues, control: &SubmitControl) -> SubmitAttempt {
    let Some(guard) = control.try_acquire() else {
        tracing::debug!(%kind, "submit ignored, request already in flight");
        return SubmitAttempt::Busy;
    };

    tracing::debug!(%kind, fields = ?values.names().collect::<Vec<_>>(), "validating form");
    let validation = validate(kind, values);
    if !validation.valid() {
        tracing::debug!(
            %kind,
            fields = ?validation.fields().collect::<Vec<_>>(),
            "form failed validation"
        );
        return SubmitAttempt::Invalid(SubmissionError::Validation(validation));
    }

    let payload = serialize(kind, values);
    tracing::info!(%kind, path = kind.endpoint(), "submitting form");

    SubmitAttempt::Started(PendingSubmission {
        kind,
        payload,
        guard,
    })
}

impl PendingSubmission {
    /// Send the payload once and interpret the answer for this form's kind
    pub async fn resolve<T>(self, transport: &T) -> SubmissionReport
    where
        T: SubmitTransport + ?Sized,
    {
        let Self {
            kind,
            payload,
            guard,
        } = self;

        let result = match transport.submit(kind.endpoint(), &payload).await {
            Ok(outcome) if kind.is_accepted(&outcome) => {
                tracing::info!(%kind, id = ?outcome.id, "submission accepted");
                Ok(Accepted {
                    id: outcome.id,
                    server_message: outcome.message,
                    fields: outcome.fields,
                })
            }
            Ok(outcome) => {
                tracing::warn!(
                    %kind,
                    status = outcome.status,
                    message = ?outcome.message,
                    "submission rejected"
                );
                Err(SubmissionError::Business {
                    status: outcome.status,
                    message: outcome.message,
                })
            }
            Err(err) => {
                tracing::error!(%kind, error = %err, "submission transport failed");
                Err(SubmissionError::Transport(err))
            }
        };

        SubmissionReport {
            kind,
            result,
            guard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockSubmitTransport, SubmissionOutcome, TransportError};
    use crate::pipeline::error::{GENERIC_FAILURE_MESSAGE, NETWORK_FAILURE_MESSAGE};
    use crate::pipeline::REQUIRED_MESSAGE;

    fn outcome(status: u16, body: serde_json::Value) -> SubmissionOutcome {
        SubmissionOutcome::from_response(status, body)
    }

    fn contact_values() -> FieldValues {
        [("name", "Ada"), ("email", "ada@example.org"), ("message", "Hello")]
            .into_iter()
            .collect()
    }

    fn malformed() -> TransportError {
        TransportError::MalformedBody {
            url: "https://api.example.org/api/contact".to_string(),
            source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
        }
    }

    fn started(attempt: SubmitAttempt) -> PendingSubmission {
        match attempt {
            SubmitAttempt::Started(pending) => pending,
            other => panic!("expected a started submission, got {other:?}"),
        }
    }

    mod control {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_control_is_enabled() {
            let control = SubmitControl::new(FormKind::Contact);
            assert!(control.is_enabled());
            assert_eq!(control.label(), "Send Message");
        }

        #[test]
        fn test_guard_disables_until_dropped() {
            let control = SubmitControl::new(FormKind::Registration);
            let guard = control.try_acquire().unwrap();

            assert!(!control.is_enabled());
            assert_eq!(control.label(), SUBMITTING_LABEL);
            assert!(control.try_acquire().is_none());

            drop(guard);
            assert!(control.is_enabled());
            assert_eq!(control.label(), "Submit Registry");
        }

        #[test]
        fn test_clones_share_the_flag() {
            let control = SubmitControl::new(FormKind::Requirement);
            let clone = control.clone();
            let _guard = control.try_acquire().unwrap();
            assert!(!clone.is_enabled());
        }
    }

    mod begin {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_values_release_the_control() {
            let control = SubmitControl::new(FormKind::Contact);

            let attempt = begin(FormKind::Contact, &FieldValues::new(), &control);

            let SubmitAttempt::Invalid(err) = attempt else {
                panic!("expected validation failure");
            };
            let result = err.field_errors().unwrap();
            assert_eq!(result.error_for("name"), Some(REQUIRED_MESSAGE));
            assert!(control.is_enabled());
        }

        #[test]
        fn test_requirement_without_commitment_is_invalid() {
            let values: FieldValues = FormKind::Requirement
                .required_fields()
                .iter()
                .map(|f| (*f, "x"))
                .collect();
            let control = SubmitControl::new(FormKind::Requirement);

            let SubmitAttempt::Invalid(err) = begin(FormKind::Requirement, &values, &control)
            else {
                panic!("expected validation failure");
            };
            let result = err.field_errors().unwrap();
            assert_eq!(result.fields().collect::<Vec<_>>(), vec!["commitment"]);
        }

        #[test]
        fn test_second_submit_while_pending_is_busy() {
            let control = SubmitControl::new(FormKind::Contact);
            let pending = started(begin(FormKind::Contact, &contact_values(), &control));

            assert!(!control.is_enabled());
            assert!(matches!(
                begin(FormKind::Contact, &contact_values(), &control),
                SubmitAttempt::Busy
            ));

            drop(pending);
            assert!(control.is_enabled());
        }

        #[test]
        fn test_other_forms_are_independent() {
            let contact = SubmitControl::new(FormKind::Contact);
            let registration = SubmitControl::new(FormKind::Registration);
            let _pending = started(begin(FormKind::Contact, &contact_values(), &contact));

            let values: FieldValues = [
                ("brand", "Yamaha"),
                ("model", "U1"),
                ("type", "Upright"),
                ("condition", "Good"),
                ("city", "Austin"),
            ]
            .into_iter()
            .collect();
            assert!(matches!(
                begin(FormKind::Registration, &values, &registration),
                SubmitAttempt::Started(_)
            ));
        }
    }

    mod resolve {
        use super::*;
        use pretty_assertions::assert_eq;
        use serde_json::json;

        #[tokio::test]
        async fn test_registration_success() {
            let values: FieldValues = [
                ("brand", "Yamaha"),
                ("model", "U1"),
                ("serial", ""),
                ("year", "1990"),
                ("type", "Upright"),
                ("condition", "Good"),
                ("city", "Austin"),
            ]
            .into_iter()
            .collect();
            let expected = serialize(FormKind::Registration, &values);

            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .withf(move |path, payload| path == "/api/registration" && *payload == expected)
                .times(1)
                .returning(|_, _| Ok(outcome(201, json!({"id": "42", "message": "ok"}))));

            let control = SubmitControl::new(FormKind::Registration);
            let pending = started(begin(FormKind::Registration, &values, &control));
            let report = pending.resolve(&transport).await;
            assert!(!control.is_enabled());

            assert_eq!(report.phase(), PipelinePhase::Success);
            assert_eq!(
                report.result.unwrap(),
                Accepted {
                    id: Some("42".to_string()),
                    server_message: Some("ok".to_string()),
                    fields: Map::new(),
                }
            );
            drop(report.guard);
            assert!(control.is_enabled());
        }

        #[tokio::test]
        async fn test_registration_without_id_fails() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .returning(|_, _| Ok(outcome(200, json!({"message": "Saved?"}))));

            let values: FieldValues = [
                ("brand", "Yamaha"),
                ("model", "U1"),
                ("type", "Upright"),
                ("condition", "Good"),
                ("city", "Austin"),
            ]
            .into_iter()
            .collect();
            let control = SubmitControl::new(FormKind::Registration);
            let report = started(begin(FormKind::Registration, &values, &control))
                .resolve(&transport)
                .await;

            let err = report.result.unwrap_err();
            assert_eq!(err.user_message(), "Saved?");
        }

        #[tokio::test]
        async fn test_business_failure_without_message_uses_fallback() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .returning(|_, _| Ok(outcome(500, json!({}))));

            let control = SubmitControl::new(FormKind::Contact);
            let report = started(begin(FormKind::Contact, &contact_values(), &control))
                .resolve(&transport)
                .await;

            assert_eq!(report.phase(), PipelinePhase::Failed);
            assert_eq!(
                report.result.unwrap_err().user_message(),
                GENERIC_FAILURE_MESSAGE
            );
        }

        #[tokio::test]
        async fn test_empty_message_uses_fallback() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .returning(|_, _| Ok(outcome(422, json!({"message": ""}))));

            let control = SubmitControl::new(FormKind::Contact);
            let report = started(begin(FormKind::Contact, &contact_values(), &control))
                .resolve(&transport)
                .await;

            assert_eq!(
                report.result.unwrap_err().user_message(),
                GENERIC_FAILURE_MESSAGE
            );
        }

        #[tokio::test]
        async fn test_empty_id_and_message_are_not_accepted() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .returning(|_, _| Ok(outcome(200, json!({"id": "", "message": ""}))));

            let control = SubmitControl::new(FormKind::Contact);
            let report = started(begin(FormKind::Contact, &contact_values(), &control))
                .resolve(&transport)
                .await;
            assert_eq!(report.phase(), PipelinePhase::Failed);

            let values: FieldValues = [
                ("brand", "Yamaha"),
                ("model", "U1"),
                ("type", "Upright"),
                ("condition", "Good"),
                ("city", "Austin"),
            ]
            .into_iter()
            .collect();
            let control = SubmitControl::new(FormKind::Registration);
            let report = started(begin(FormKind::Registration, &values, &control))
                .resolve(&transport)
                .await;
            assert_eq!(report.phase(), PipelinePhase::Failed);
        }

        #[tokio::test]
        async fn test_contact_network_failure_restores_control() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .times(1)
                .returning(|_, _| Err(malformed()));

            let control = SubmitControl::new(FormKind::Contact);
            let pending = started(begin(FormKind::Contact, &contact_values(), &control));
            assert!(!control.is_enabled());

            let report = pending.resolve(&transport).await;

            assert!(matches!(
                report.result,
                Err(SubmissionError::Transport(TransportError::MalformedBody { .. }))
            ));
            assert_eq!(
                report.result.as_ref().unwrap_err().user_message(),
                NETWORK_FAILURE_MESSAGE
            );
            assert!(!control.is_enabled());

            drop(report);
            assert!(control.is_enabled());
            assert_eq!(control.label(), "Send Message");
        }

        #[tokio::test]
        async fn test_requirement_accepts_empty_success_body() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .withf(|path, _| path == "/api/requirements")
                .returning(|_, _| Ok(outcome(200, json!({}))));

            let values: FieldValues = [
                ("school-name", "Lincoln High"),
                ("current-pianos", "1"),
                ("preferred-type", "Upright"),
                ("teacher-name", "Ms. Rivera"),
                ("background", "Choir"),
                ("commitment", "on"),
            ]
            .into_iter()
            .collect();
            let control = SubmitControl::new(FormKind::Requirement);
            let report = started(begin(FormKind::Requirement, &values, &control))
                .resolve(&transport)
                .await;

            assert_eq!(report.phase(), PipelinePhase::Success);
        }

        #[test]
        fn test_resolve_blocking() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_submit()
                .returning(|_, _| Ok(outcome(200, json!({"message": "Thanks"}))));

            let control = SubmitControl::new(FormKind::Contact);
            let pending = started(begin(FormKind::Contact, &contact_values(), &control));
            let report = tokio_test::block_on(pending.resolve(&transport));

            assert_eq!(report.kind, FormKind::Contact);
            assert!(report.result.is_ok());
        }
    }
}
