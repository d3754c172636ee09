//! Interpreted API responses

use serde_json::{Map, Value};

/// Result of one request: HTTP status class plus the body's fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionOutcome {
    /// True for a 2xx status, regardless of what the body claims
    pub ok: bool,
    /// Raw HTTP status code
    pub status: u16,
    /// Identifier of the created record, if the body carried a non-empty one
    pub id: Option<String>,
    /// Human-readable message from the body; an empty string counts as absent
    pub message: Option<String>,
    /// Remaining body fields
    pub fields: Map<String, Value>,
}

impl SubmissionOutcome {
    /// Build an outcome from a status code and an already-parsed body.
    ///
    /// The body's own `success` flag is discarded; the status class wins.
    pub fn from_response(status: u16, body: Value) -> Self {
        let mut fields = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let id = fields
            .remove("id")
            .and_then(|v| match v {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|id| !id.is_empty());
        let message = fields
            .remove("message")
            .and_then(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .filter(|message| !message.is_empty());
        fields.remove("success");

        Self {
            ok: (200..300).contains(&status),
            status,
            id,
            message,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_with_message() {
        let outcome = SubmissionOutcome::from_response(404, json!({"message": "bad"}));
        assert!(!outcome.ok);
        assert_eq!(outcome.message.as_deref(), Some("bad"));
        assert!(outcome.id.is_none());
    }

    #[test]
    fn test_created_with_id() {
        let outcome = SubmissionOutcome::from_response(201, json!({"id": "123", "message": "ok"}));
        assert!(outcome.ok);
        assert_eq!(outcome.id.as_deref(), Some("123"));
        assert_eq!(outcome.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let outcome = SubmissionOutcome::from_response(200, json!({"id": 42}));
        assert_eq!(outcome.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_body_success_flag_does_not_override_status() {
        let failed = SubmissionOutcome::from_response(500, json!({"success": true}));
        assert!(!failed.ok);

        let passed = SubmissionOutcome::from_response(200, json!({"success": false}));
        assert!(passed.ok);
        assert!(!passed.fields.contains_key("success"));
    }

    #[test]
    fn test_other_fields_are_kept() {
        let outcome = SubmissionOutcome::from_response(200, json!({"id": 1, "school": "Lincoln"}));
        assert_eq!(outcome.fields.get("school"), Some(&json!("Lincoln")));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let outcome = SubmissionOutcome::from_response(200, json!({"id": "", "message": ""}));
        assert!(outcome.ok);
        assert!(outcome.id.is_none());
        assert!(outcome.message.is_none());
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        let outcome = SubmissionOutcome::from_response(200, json!(["unexpected"]));
        assert!(outcome.ok);
        assert!(outcome.fields.is_empty());
        assert!(outcome.id.is_none());
    }
}
