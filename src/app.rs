//! Application state and core logic

use crate::api::{ApiClient, SubmitTransport};
use crate::config::TuiConfig;
use crate::pipeline::{self, FormKind, PipelinePhase, SubmissionReport, SubmitAttempt};
use crate::state::{AppState, Form, FormButton, FormMessage, SuccessNotification, View};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// API origin shown in the status bar
    pub api_base: String,
    /// Transport used by every submission
    transport: Arc<dyn SubmitTransport>,
    /// Finished submissions, sent back from their tasks
    report_tx: mpsc::UnboundedSender<SubmissionReport>,
    report_rx: mpsc::UnboundedReceiver<SubmissionReport>,
    /// How long success notifications stay open
    notification_duration: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to the configured API
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = ApiClient::new(config.api_base(), config.request_timeout())
            .context("failed to build HTTP client")?;
        tracing::info!(api_base = client.base_url(), "using submission API");

        Ok(Self::with_transport(
            Arc::new(client),
            config.api_base().to_string(),
            config.notification_duration(),
        ))
    }

    /// Create an App around an arbitrary transport
    pub fn with_transport(
        transport: Arc<dyn SubmitTransport>,
        api_base: String,
        notification_duration: Duration,
    ) -> Self {
        let (report_tx, report_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api_base,
            transport,
            report_tx,
            report_rx,
            notification_duration,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Apply finished submissions and expire the success notification.
    /// Called once per UI loop iteration.
    pub fn tick(&mut self) {
        while let Ok(report) = self.report_rx.try_recv() {
            self.apply_report(report);
        }

        if self
            .state
            .notification
            .as_ref()
            .is_some_and(SuccessNotification::is_expired)
        {
            tracing::debug!("success notification expired");
            self.state.show_view(View::default());
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Handle error dialog dismissal first (modal)
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Success dialog is modal too; closing it early returns home
        if self.state.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.show_view(View::default());
            }
            return;
        }

        match self.state.current_view.form_kind() {
            None => self.handle_home_key(key),
            Some(kind) => self.handle_form_key(kind, key),
        }
    }

    /// Navigate to a view
    pub fn navigate(&mut self, view: View) {
        self.state.show_view(view);
    }

    /// Handle keys in Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c) => {
                if let Some(view) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| View::ALL.get(i))
                {
                    self.navigate(*view);
                }
            }
            _ => {}
        }
    }

    /// Handle keys in a form view
    fn handle_form_key(&mut self, kind: FormKind, key: KeyEvent) {
        let submit_modifier = key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);
        if key.code == KeyCode::Char('s') && submit_modifier {
            self.submit_form(kind);
            return;
        }

        let form = self.state.forms.get_mut(kind);
        match key.code {
            KeyCode::Esc => {
                self.navigate(View::default());
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left | KeyCode::Right if form.is_buttons_row_active() => {
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(field) = form.get_active_field_mut() {
                    field.cycle(key.code == KeyCode::Right);
                    form.touch();
                }
            }
            KeyCode::Enter if form.is_buttons_row_active() => match form.selected_button {
                FormButton::Submit => self.submit_form(kind),
                FormButton::Cancel => self.navigate(View::default()),
            },
            KeyCode::Enter => {
                let multiline = form
                    .get_field(form.active_field())
                    .is_some_and(|f| f.is_multiline);
                if multiline {
                    if let Some(field) = form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                    form.touch();
                } else {
                    form.next_field();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                    form.touch();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                    form.touch();
                }
            }
            _ => {}
        }
    }

    /// Run the submission pipeline for one form.
    ///
    /// Every submit path (shortcut and submit button) lands here. The request
    /// runs on its own task; its report comes back through [`App::tick`].
    pub fn submit_form(&mut self, kind: FormKind) {
        let form = self.state.forms.get_mut(kind);
        let values = form.values();
        form.phase = PipelinePhase::Validating;

        match pipeline::begin(kind, &values, &form.control) {
            SubmitAttempt::Busy => {
                form.phase = PipelinePhase::Submitting;
            }
            SubmitAttempt::Invalid(err) => {
                form.errors = err.field_errors().cloned().unwrap_or_default();
                form.message = Some(FormMessage::error(err.user_message()));
                form.phase = PipelinePhase::Invalid;
            }
            SubmitAttempt::Started(pending) => {
                form.errors = Default::default();
                form.message = None;
                form.phase = PipelinePhase::Submitting;

                let transport = Arc::clone(&self.transport);
                let report_tx = self.report_tx.clone();
                tokio::spawn(async move {
                    let report = pending.resolve(transport.as_ref()).await;
                    if report_tx.send(report).is_err() {
                        tracing::debug!(%kind, "submission finished after shutdown");
                    }
                });
            }
        }
    }

    /// Present the result of a finished submission.
    ///
    /// The form's submit control is released only after the form has been
    /// cleared or given its failure message.
    pub fn apply_report(&mut self, report: SubmissionReport) {
        let phase = report.phase();
        let SubmissionReport {
            kind,
            result,
            guard,
        } = report;
        let form = self.state.forms.get_mut(kind);
        form.phase = phase;

        tracing::debug!(%kind, phase = phase.label(), "applying submission report");

        match result {
            Ok(accepted) => {
                tracing::debug!(
                    id = ?accepted.id,
                    server_message = ?accepted.server_message,
                    extra = ?accepted.fields,
                    "showing success notification"
                );
                form.clear();
                self.state
                    .open_notification(SuccessNotification::new(kind, self.notification_duration));
            }
            Err(err) => {
                form.message = Some(FormMessage::error(err.user_message()));
            }
        }

        drop(guard);
    }

    /// Wait for the next finished submission
    #[cfg(test)]
    async fn next_report(&mut self) -> SubmissionReport {
        self.report_rx
            .recv()
            .await
            .expect("report channel stays open while the app lives")
    }
}
