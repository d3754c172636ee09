//! Field-level validation of submitted forms

use super::{FieldValues, FormKind};
use chrono::Datelike;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const YEAR_MESSAGE: &str = "Please enter a valid year";
pub const COMMITMENT_MESSAGE: &str = "You must agree to maintain the instrument";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Registration field holding the manufacturing year
pub const YEAR_FIELD: &str = "year";
/// Requirement checkbox for the maintenance commitment
pub const COMMITMENT_FIELD: &str = "commitment";
/// Contact field holding the reply address
pub const EMAIL_FIELD: &str = "email";

/// Oldest manufacturing year accepted
const MIN_YEAR: i32 = 1800;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Field errors of one validation pass, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: IndexMap<String, String>,
}

impl ValidationResult {
    /// True when no field failed
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Names of the failing fields
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    fn reject(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }
}

/// Validate `values` against the rules of `kind` using today's year
pub fn validate(kind: FormKind, values: &FieldValues) -> ValidationResult {
    validate_at(kind, values, chrono::Local::now().year())
}

/// Validate with an explicit upper bound for the year check
pub fn validate_at(kind: FormKind, values: &FieldValues, current_year: i32) -> ValidationResult {
    let mut result = ValidationResult::default();

    for field in kind.required_fields() {
        if values.non_blank(field).is_none() {
            result.reject(field, REQUIRED_MESSAGE);
        }
    }

    match kind {
        FormKind::Registration => {
            if let Some(year) = values.non_blank(YEAR_FIELD) {
                if !is_valid_year(year, current_year) {
                    result.reject(YEAR_FIELD, YEAR_MESSAGE);
                }
            }
        }
        FormKind::Requirement => {
            if !values.is_checked(COMMITMENT_FIELD) {
                result.reject(COMMITMENT_FIELD, COMMITMENT_MESSAGE);
            }
        }
        FormKind::Contact => {
            if let Some(email) = values.non_blank(EMAIL_FIELD) {
                if !is_valid_email(email) {
                    result.reject(EMAIL_FIELD, EMAIL_MESSAGE);
                }
            }
        }
    }

    result
}

fn is_valid_year(raw: &str, current_year: i32) -> bool {
    raw.parse::<i32>()
        .is_ok_and(|year| (MIN_YEAR..=current_year).contains(&year))
}

fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}
