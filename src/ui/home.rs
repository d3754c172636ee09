//! Home view

use crate::app::App;
use crate::pipeline::FormKind;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TAGLINE: &str = "Connecting unused pianos with schools that need them.";

/// Draw the landing page: what the service does and where each form lives
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" ClavisNova ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tagline
            Constraint::Min(0),    // Entries
        ])
        .margin(1)
        .split(inner);

    let tagline = Paragraph::new(Line::from(Span::styled(
        TAGLINE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(tagline, chunks[0]);

    let mut lines = Vec::new();
    for kind in FormKind::ALL {
        let view = View::for_kind(kind);
        let mut entry = vec![
            Span::styled(
                format!(" {} ", view.index() + 1),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" "),
            Span::styled(kind.title(), Style::default().fg(Color::Cyan)),
        ];
        if !app.state.forms.get(kind).control.is_enabled() {
            entry.push(Span::styled(
                "  (sending...)",
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(entry));
        lines.push(Line::from(Span::styled(
            format!("     {}", description(kind)),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
}

fn description(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Registration => "Register a piano you would like to donate.",
        FormKind::Requirement => "Apply on behalf of a school that needs a piano.",
        FormKind::Contact => "Send the team a question or a note.",
    }
}
