//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![];

    // Validity indicator
    let validity = if form.is_valid() {
        Span::styled(" ● valid ", Style::default().fg(Color::Green))
    } else {
        let count = form.validation().error_count();
        Span::styled(
            format!(" ○ {count} error(s) "),
            Style::default().fg(Color::Red),
        )
    };
    spans.push(validity);

    spans.push(Span::raw("| "));
    spans.push(Span::styled(
        format!("submitted: {}", form.submissions()),
        Style::default().fg(Color::Gray),
    ));

    // Status message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
