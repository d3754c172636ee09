//! Submission flows and their fixed per-flow properties

use crate::api::SubmissionOutcome;

/// Which of the three submission flows a form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Piano donor registration
    Registration,
    /// School application for an instrument
    Requirement,
    /// General contact message
    Contact,
}

impl FormKind {
    /// All flows, in sidebar order
    pub const ALL: [FormKind; 3] = [Self::Registration, Self::Requirement, Self::Contact];

    /// API path the payload is posted to
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Registration => "/api/registration",
            Self::Requirement => "/api/requirements",
            Self::Contact => "/api/contact",
        }
    }

    /// Fields that must be non-blank after trimming
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Registration => &["brand", "model", "type", "condition", "city"],
            Self::Requirement => &[
                "school-name",
                "current-pianos",
                "preferred-type",
                "teacher-name",
                "background",
            ],
            Self::Contact => &["name", "email", "message"],
        }
    }

    /// Label of the submit control while no request is outstanding
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Registration => "Submit Registry",
            Self::Requirement => "Submit Application",
            Self::Contact => "Send Message",
        }
    }

    /// Form title shown in the view header
    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration => "Donate a Piano",
            Self::Requirement => "School Application",
            Self::Contact => "Contact Us",
        }
    }

    /// Text shown in the success notification
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Registration => {
                "Thank you for registering your piano! A specialist will contact you within 48 hours for assessment."
            }
            Self::Requirement | Self::Contact => "Submission successful",
        }
    }

    /// Whether the API accepted the submission.
    ///
    /// Each endpoint signals acceptance differently:
    /// - registration answers with the new record's `id`
    /// - requirements only carry the success flag, which mirrors the HTTP status class
    /// - contact answers with an `id` or a `message`
    pub fn is_accepted(&self, outcome: &SubmissionOutcome) -> bool {
        match self {
            Self::Registration => outcome.ok && outcome.id.is_some(),
            Self::Requirement => outcome.ok,
            Self::Contact => outcome.ok && (outcome.id.is_some() || outcome.message.is_some()),
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Registration => "registration",
            Self::Requirement => "requirement",
            Self::Contact => "contact",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ok: bool, id: Option<&str>, message: Option<&str>) -> SubmissionOutcome {
        SubmissionOutcome {
            ok,
            status: if ok { 200 } else { 400 },
            id: id.map(str::to_string),
            message: message.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(FormKind::Registration.endpoint(), "/api/registration");
        assert_eq!(FormKind::Requirement.endpoint(), "/api/requirements");
        assert_eq!(FormKind::Contact.endpoint(), "/api/contact");
    }

    #[test]
    fn test_registration_needs_id() {
        let kind = FormKind::Registration;
        assert!(kind.is_accepted(&outcome(true, Some("42"), Some("ok"))));
        assert!(!kind.is_accepted(&outcome(true, None, Some("ok"))));
        assert!(!kind.is_accepted(&outcome(false, Some("42"), Some("ok"))));
    }

    #[test]
    fn test_requirement_accepts_bare_success() {
        let kind = FormKind::Requirement;
        assert!(kind.is_accepted(&outcome(true, None, None)));
        assert!(!kind.is_accepted(&outcome(false, None, Some("bad"))));
    }

    #[test]
    fn test_contact_needs_id_or_message() {
        let kind = FormKind::Contact;
        assert!(kind.is_accepted(&outcome(true, Some("7"), None)));
        assert!(kind.is_accepted(&outcome(true, None, Some("thanks"))));
        assert!(!kind.is_accepted(&outcome(true, None, None)));
        assert!(!kind.is_accepted(&outcome(false, Some("7"), Some("thanks"))));
    }

    #[test]
    fn test_display() {
        assert_eq!(FormKind::Requirement.to_string(), "requirement");
    }
}
