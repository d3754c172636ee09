//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.active_form() {
        None => home::draw(frame, main_area, app),
        Some(form) => forms::draw_submission_form(frame, main_area, form),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Overlays, error dialog on top
    if let Some(notification) = &app.state.notification {
        render_success_dialog(frame, notification);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
