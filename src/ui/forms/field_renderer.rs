//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField, FormMessage};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        6
    } else {
        3
    }
}

/// Draw a form field; an inline error turns the border red and is shown
/// along the bottom edge
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let value_style = match (&field.value, is_active) {
        (FieldValue::Choice { selected: None, .. }, _) => Style::default().fg(Color::DarkGray),
        (_, true) => Style::default().fg(Color::White),
        (_, false) => Style::default().fg(Color::Gray),
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    // Only free text gets a cursor
    let cursor = if is_active && field.is_text() { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, value_style),
            cursor_span,
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the form-level message line
pub fn draw_message(frame: &mut Frame, area: Rect, message: &FormMessage) {
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let paragraph = Paragraph::new(Line::from(Span::styled(message.text.as_str(), style)))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
