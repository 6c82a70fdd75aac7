//! Dialog showing the payload of the last delivered submission

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submitted payload centered on the screen
pub fn render_submitted_dialog(frame: &mut Frame, payload_json: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to continue editing"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: payload_json,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
