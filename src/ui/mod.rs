//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_person_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Submitted dialog overlays everything
    if let Some(payload) = &app.state.submitted_dialog {
        components::render_submitted_dialog(frame, payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        render_sized(app, 70, 30)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_fields_and_errors() {
        let app = App::new(TuiConfig::default(), Some("schema")).unwrap();
        let screen = render(&app);
        assert!(screen.contains("Name"));
        assert!(screen.contains("Birth Year"));
        assert!(screen.contains("String must contain at least 3 character(s)"));
        assert!(screen.contains("Submit"));
        assert!(screen.contains("error(s)"));
    }

    #[test]
    fn test_renders_valid_status() {
        let mut app = App::new(TuiConfig::default(), Some("uncontrolled")).unwrap();
        app.state.form.set_value("age", "30").unwrap();
        app.state.form.set_value("year", "1994").unwrap();
        let screen = render(&app);
        assert!(screen.contains("valid"));
        assert!(screen.contains("uncontrolled"));
    }

    #[test]
    fn test_renders_submitted_dialog() {
        let mut app = App::new(TuiConfig::default(), Some("schema")).unwrap();
        app.state.submitted_dialog = Some("{\n  \"name\": \"Alice\"\n}".to_string());
        let screen = render(&app);
        assert!(screen.contains("Submitted"));
        assert!(screen.contains("\"name\": \"Alice\""));
    }

    #[test]
    fn test_submitted_dialog_in_small_terminal() {
        let mut app = App::new(TuiConfig::default(), Some("schema")).unwrap();
        for (field, value) in [("name", "Alice"), ("age", "18"), ("gender", "F"), ("year", "1990")] {
            app.state.form.set_value(field, value).unwrap();
        }
        app.dispatch(crate::state::FormEvent::SubmitRequested).unwrap();
        assert!(app.state.submitted_dialog.is_some());

        let screen = render_sized(&app, 40, 8);
        assert_eq!(screen.lines().count(), 8);
        assert!(screen.contains("Submitted"));
    }
}
