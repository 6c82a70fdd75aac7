//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding) as usize;

    // Word-wrap the message
    let wrapped_lines = wrap_text(config.message, max_line_width);
    let line_count = wrapped_lines.len();

    // Calculate dialog dimensions
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .max(config.title.len()) as u16;
    let dialog_width = (content_width + padding + 2) // +2 for borders
        .min(config.max_width)
        .min(area.width);

    // Height: title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 }; // blank + hint
    let dialog_height = (2 + line_count as u16 + hint_lines + 2) // +2 for borders
        .max(5)
        .min(area.height);

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    // Never draw outside the frame; content is cut off in tiny terminals
    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    }
    .intersection(area);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    // Build content
    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width, keeping each line's indentation
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let indent_len = paragraph.len() - paragraph.trim_start().len();
        let indent = &paragraph[..indent_len];

        let mut current_line = indent.to_string();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && current_line.len() > indent_len {
                lines.push(current_line);
                current_line = indent.to_string();
            }
            if current_line.len() > indent_len {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if current_line.len() > indent_len {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_keeps_json_indentation() {
        let lines = wrap_text("{\n  \"age\": 18\n}", 40);
        assert_eq!(lines, vec!["{", "  \"age\": 18", "}"]);
    }

    #[test]
    fn test_wrap_breaks_long_lines() {
        let lines = wrap_text("alpha beta gamma", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    mod render {
        use super::*;
        use pretty_assertions::assert_eq;
        use ratatui::{backend::TestBackend, Terminal};

        const PAYLOAD: &str =
            "{\n  \"name\": \"Alice\",\n  \"age\": 18,\n  \"gender\": \"F\",\n  \"year\": 1990\n}";

        fn draw(width: u16, height: u16) -> Terminal<TestBackend> {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| {
                    render_dialog(
                        frame,
                        DialogConfig {
                            title: "Submitted",
                            title_color: Color::Green,
                            border_color: Color::Green,
                            message: PAYLOAD,
                            hint: Some(vec![Span::raw("Press Enter")]),
                            max_width: 60,
                        },
                    )
                })
                .unwrap();
            terminal
        }

        fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
            let buffer = terminal.backend().buffer();
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(""))
                .collect()
        }

        #[test]
        fn test_dialog_fits_short_terminal() {
            let terminal = draw(40, 8);
            assert_eq!(terminal.backend().buffer().area.height, 8);
            assert!(row(&terminal, 0).contains('┌'));
            assert!(row(&terminal, 7).contains('└'));
        }

        #[test]
        fn test_dialog_fits_narrow_terminal() {
            let terminal = draw(10, 3);
            assert_eq!(terminal.backend().buffer().area.width, 10);
            assert!(row(&terminal, 0).starts_with('┌'));
        }

        #[test]
        fn test_dialog_centered_when_room() {
            let terminal = draw(80, 30);
            assert!(!row(&terminal, 0).contains('┌'));
            assert!(row(&terminal, 9).contains('┌'));
            assert!(row(&terminal, 10).contains("Submitted"));
        }
    }
}
