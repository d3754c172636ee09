//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::pipeline::PipelinePhase;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)]; // Top padding (flex)
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Bottom padding (flex)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for view in View::ALL {
        let idx = view.index();
        let key = (idx + 1).to_string();
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &key,
            view.label(),
            app.state.current_view == view,
            true,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Any request outstanding
    let busy: Vec<String> = app.state.forms.in_flight().map(|k| k.to_string()).collect();
    if busy.is_empty() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::styled(" ◌ ", Style::default().fg(Color::Yellow)));
    }

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(form) = app.state.active_form() {
        if form.phase != PipelinePhase::Idle {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                form.phase.label(),
                Style::default().fg(phase_color(form.phase)),
            ));
        }
    }

    if !busy.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("sending {}", busy.join(", ")),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.api_base.as_str(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let quit_width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_width),
        y: area.height.saturating_sub(1),
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn phase_color(phase: PipelinePhase) -> Color {
    match phase {
        PipelinePhase::Success => Color::Green,
        PipelinePhase::Invalid | PipelinePhase::Failed => Color::Red,
        _ => Color::Yellow,
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Home => "1-4:nav  q:quit".to_string(),
        View::Registration | View::Requirement | View::Contact => format!(
            "Tab:next  ←/→:choose  Space:check  {SUBMIT_SHORTCUT}:submit  Esc:back"
        ),
    }
}
