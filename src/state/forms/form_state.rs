//! Form state management and form structs

use super::field::FormField;
use crate::pipeline::{
    FieldValues, FormKind, PipelinePhase, SubmitControl, ValidationResult, COMMITMENT_FIELD,
    EMAIL_FIELD, YEAR_FIELD,
};

const PIANO_TYPES: &[&str] = &["Upright", "Baby Grand", "Grand", "Digital"];
const CONDITIONS: &[&str] = &["Excellent", "Good", "Fair", "Needs Work"];
const PREFERRED_TYPES: &[&str] = &["Upright", "Grand", "Digital", "No Preference"];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons on a form's buttons row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    Cancel,
    #[default]
    Submit,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Cancel => Self::Submit,
            Self::Submit => Self::Cancel,
        }
    }
}

/// A form-level error shown above the fields. Success is reported by the
/// notification dialog instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
}

impl FormMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One submission form: its fields, submit control and last feedback
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    pub selected_button: FormButton,
    pub control: SubmitControl,
    pub errors: ValidationResult,
    pub message: Option<FormMessage>,
    pub phase: PipelinePhase,
}

impl SubmissionForm {
    pub fn new(kind: FormKind) -> Self {
        let fields = match kind {
            FormKind::Registration => vec![
                FormField::text("brand", "Brand / Manufacturer", false).required(),
                FormField::text("model", "Model", false).required(),
                FormField::text("serial", "Serial Number", false),
                FormField::text(YEAR_FIELD, "Year", false),
                FormField::choice("type", "Piano Type", PIANO_TYPES).required(),
                FormField::choice("condition", "Condition", CONDITIONS).required(),
                FormField::text("color_wood", "Color / Wood", false),
                FormField::text("city", "City & State", false).required(),
                FormField::text("access", "Access Details", true),
            ],
            FormKind::Requirement => vec![
                FormField::text("school-name", "School Full Name", false).required(),
                FormField::text("current-pianos", "Current Number of Pianos", false).required(),
                FormField::choice("preferred-type", "Preferred Piano Type", PREFERRED_TYPES)
                    .required(),
                FormField::text("teacher-name", "Contact Teacher Name", false).required(),
                FormField::text("background", "Background & Impact Statement", true).required(),
                FormField::checkbox(
                    COMMITMENT_FIELD,
                    "We commit to maintaining and tuning the instrument",
                )
                .required(),
            ],
            FormKind::Contact => vec![
                FormField::text("name", "Name", false).required(),
                FormField::text(EMAIL_FIELD, "Email", false).required(),
                FormField::text("message", "Message", true).required(),
            ],
        };

        Self {
            kind,
            fields,
            active_field_index: 0,
            selected_button: FormButton::default(),
            control: SubmitControl::new(kind),
            errors: ValidationResult::default(),
            message: None,
            phase: PipelinePhase::Idle,
        }
    }

    /// Index of the buttons row
    pub fn buttons_row(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.buttons_row()
    }

    /// Current values, as a browser would submit them
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .filter_map(|f| f.submitted_value().map(|v| (f.name, v)))
            .collect()
    }

    /// Field by name, mutable
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Inline error for a field, if any
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.error_for(name)
    }

    /// Any user edit returns the form to idle
    pub fn touch(&mut self) {
        if self.phase != PipelinePhase::Submitting {
            self.phase = PipelinePhase::Idle;
        }
    }

    /// Reset every field and all feedback
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
        self.errors = ValidationResult::default();
        self.message = None;
    }
}

impl Form for SubmissionForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.buttons_row());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        // The buttons row has no FormField
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
