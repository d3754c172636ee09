//! Submission form rendering (fields plus action panel)

use super::field_renderer::{draw_field, draw_message, field_height};
use crate::state::{Form, FormButton, SubmissionForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw a submission form with its action sidebar
pub fn draw_submission_form(frame: &mut Frame, area: Rect, form: &SubmissionForm) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], form);
    draw_action_panel(frame, main_chunks[1], form);
}

/// Draw the message line and as many fields as fit, keeping the active one visible
fn draw_fields(frame: &mut Frame, area: Rect, form: &SubmissionForm) {
    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(format!(" {} ", form.kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Message
            Constraint::Min(0),    // Fields
        ])
        .horizontal_margin(1)
        .split(inner);

    if let Some(message) = &form.message {
        draw_message(frame, chunks[0], message);
    }

    let fields_area = chunks[1];
    let first = first_visible(form, fields_area.height);
    let mut y = fields_area.y;
    for (index, field) in form.fields.iter().enumerate().skip(first) {
        let height = field_height(field);
        if y + height > fields_area.bottom() {
            break;
        }
        let field_area = Rect {
            x: fields_area.x,
            y,
            width: fields_area.width,
            height,
        };
        draw_field(
            frame,
            field_area,
            field,
            form.active_field() == index,
            form.error_for(field.name),
        );
        y += height;
    }
}

/// Index of the first field to draw so the focused one fits in `available` rows
fn first_visible(form: &SubmissionForm, available: u16) -> usize {
    let target = form.active_field().min(form.fields.len().saturating_sub(1));
    let mut first = 0;
    let mut used: u16 = form.fields[..=target].iter().map(field_height).sum();
    while used > available && first < target {
        used -= field_height(&form.fields[first]);
        first += 1;
    }
    first
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, form: &SubmissionForm) {
    let is_focused = form.is_buttons_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Cancel
            Constraint::Min(0),
        ])
        .split(inner_area);

    // Label switches to "Submitting..." while a request is outstanding
    render_action_button(
        frame,
        button_chunks[0],
        form.control.label(),
        is_focused && form.selected_button == FormButton::Submit,
        form.control.is_enabled(),
        Color::Green,
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Cancel",
        is_focused && form.selected_button == FormButton::Cancel,
        true,
        Color::Gray,
    );
}
