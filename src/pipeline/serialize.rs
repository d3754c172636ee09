//! Projection of form values onto the API's request bodies

use super::validate::YEAR_FIELD;
use super::{FieldValues, FormKind};
use serde::Serialize;

/// Year sent when the form leaves it blank or unparsable
pub const DEFAULT_YEAR: i32 = 2020;

/// Fixed value of `info6` once the commitment checkbox passed validation
pub const COMMITMENT_ACCEPTED: &str = "Maintenance commitment accepted";

/// Body of `POST /api/registration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub manufacturer: String,
    pub model: String,
    pub serial: String,
    pub year: i32,
    pub height: String,
    pub finish: String,
    pub color_wood: String,
    pub city_state: String,
    pub access: String,
}

/// Body of `POST /api/requirements`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementPayload {
    pub info1: String,
    pub info2: String,
    pub info3: String,
    pub info4: String,
    pub info5: String,
    pub info6: String,
}

/// Body of `POST /api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Request body for one submission, serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubmissionPayload {
    Registration(RegistrationPayload),
    Requirement(RequirementPayload),
    Contact(ContactPayload),
}

impl SubmissionPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Registration(_) => FormKind::Registration,
            Self::Requirement(_) => FormKind::Requirement,
            Self::Contact(_) => FormKind::Contact,
        }
    }
}

/// Build the request body for `kind`. Never fails: missing values become
/// empty strings and the year falls back to [`DEFAULT_YEAR`].
pub fn serialize(kind: FormKind, values: &FieldValues) -> SubmissionPayload {
    let text = |name: &str| values.get_or_empty(name).to_string();

    match kind {
        FormKind::Registration => SubmissionPayload::Registration(RegistrationPayload {
            manufacturer: text("brand"),
            model: text("model"),
            serial: text("serial"),
            year: values
                .get(YEAR_FIELD)
                .and_then(|y| y.trim().parse().ok())
                .unwrap_or(DEFAULT_YEAR),
            height: text("type"),
            finish: text("condition"),
            color_wood: text("color_wood"),
            city_state: text("city"),
            access: text("access"),
        }),
        FormKind::Requirement => SubmissionPayload::Requirement(RequirementPayload {
            info1: text("school-name"),
            info2: text("current-pianos"),
            info3: text("preferred-type"),
            info4: text("teacher-name"),
            info5: text("background"),
            info6: COMMITMENT_ACCEPTED.to_string(),
        }),
        FormKind::Contact => SubmissionPayload::Contact(ContactPayload {
            name: text("name"),
            email: text("email"),
            message: text("message"),
        }),
    }
}
