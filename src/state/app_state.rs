//! Application state definitions

use super::forms::SubmissionForm;
use super::notification::SuccessNotification;
use crate::pipeline::FormKind;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Registration,
    Requirement,
    Contact,
}

impl View {
    /// Views in sidebar order
    pub const ALL: [View; 4] = [Self::Home, Self::Registration, Self::Requirement, Self::Contact];

    /// The form shown by this view, if any
    pub fn form_kind(&self) -> Option<FormKind> {
        match self {
            Self::Home => None,
            Self::Registration => Some(FormKind::Registration),
            Self::Requirement => Some(FormKind::Requirement),
            Self::Contact => Some(FormKind::Contact),
        }
    }

    pub fn for_kind(kind: FormKind) -> Self {
        match kind {
            FormKind::Registration => Self::Registration,
            FormKind::Requirement => Self::Requirement,
            FormKind::Contact => Self::Contact,
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Registration => "Donate",
            Self::Requirement => "Schools",
            Self::Contact => "Contact",
        }
    }

    /// Position in the sidebar
    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Registration => 1,
            Self::Requirement => 2,
            Self::Contact => 3,
        }
    }
}

/// The three forms, one instance each
#[derive(Debug, Clone)]
pub struct Forms {
    pub registration: SubmissionForm,
    pub requirement: SubmissionForm,
    pub contact: SubmissionForm,
}

impl Default for Forms {
    fn default() -> Self {
        Self {
            registration: SubmissionForm::new(FormKind::Registration),
            requirement: SubmissionForm::new(FormKind::Requirement),
            contact: SubmissionForm::new(FormKind::Contact),
        }
    }
}

impl Forms {
    pub fn get(&self, kind: FormKind) -> &SubmissionForm {
        match kind {
            FormKind::Registration => &self.registration,
            FormKind::Requirement => &self.requirement,
            FormKind::Contact => &self.contact,
        }
    }

    pub fn get_mut(&mut self, kind: FormKind) -> &mut SubmissionForm {
        match kind {
            FormKind::Registration => &mut self.registration,
            FormKind::Requirement => &mut self.requirement,
            FormKind::Contact => &mut self.contact,
        }
    }

    /// Forms with a request outstanding
    pub fn in_flight(&self) -> impl Iterator<Item = FormKind> + '_ {
        FormKind::ALL
            .into_iter()
            .filter(|kind| !self.get(*kind).control.is_enabled())
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Forms
    pub forms: Forms,

    // Overlays
    pub notification: Option<SuccessNotification>,
    pub error_queue: VecDeque<String>,
}

impl AppState {
    /// Form of the current view
    pub fn active_form(&self) -> Option<&SubmissionForm> {
        self.current_view.form_kind().map(|kind| self.forms.get(kind))
    }

    /// Switch view; a visible success notification is dismissed
    pub fn show_view(&mut self, view: View) {
        if self.notification.take().is_some() {
            tracing::debug!(?view, "navigation dismissed success notification");
        }
        self.current_view = view;
    }

    /// Open a success notification, replacing any visible one
    pub fn open_notification(&mut self, notification: SuccessNotification) {
        self.notification = Some(notification);
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
