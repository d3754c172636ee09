//! Success notification dialog

use super::base::{key_span, render_dialog, DialogConfig};
use crate::state::SuccessNotification;
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

const SUCCESS_TITLE: &str = "Submission Successful!";

/// Render the success notification with its countdown
pub fn render_success_dialog(frame: &mut Frame, notification: &SuccessNotification) {
    let hint = vec![
        Span::styled(
            format!("Closing in {}s", notification.remaining_secs()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  ·  "),
        key_span("Enter"),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: SUCCESS_TITLE,
            title_color: Color::Green,
            border_color: Color::Green,
            message: &notification.message,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
