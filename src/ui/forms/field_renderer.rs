//! Field rendering utilities for forms

use crate::state::{FieldError, FieldValue};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by one field: bordered input plus one error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a single-line input with its validation error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Option<&FieldValue>,
    error: Option<&FieldError>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = match (is_active, error.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let raw = value.map(|v| v.display_value()).unwrap_or_default();
    let display_str = if raw.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        raw
    };
    let cursor = if is_active { "▌" } else { "" };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, chunks[0]);

    if let Some(error) = error {
        let message = Paragraph::new(Span::styled(
            format!(" {}", error.message),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw help text with key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
