//! Person form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{PRESET_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::PERSON_FIELDS;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the person form: one row per field, the submit button and help text
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let form = &state.form;

    let mut constraints: Vec<Constraint> = PERSON_FIELDS
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(format!(" Person ({}) ", state.schema_source.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (idx, &name) in PERSON_FIELDS.iter().enumerate() {
        let label = form
            .schema()
            .field(name)
            .map(|f| f.display_label())
            .unwrap_or(name);
        draw_field(
            frame,
            chunks[idx],
            label,
            form.value(name),
            form.error(name),
            state.active_form_field == idx,
        );
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[PERSON_FIELDS.len()]);
    render_button(
        frame,
        button_row[0],
        "Submit",
        state.is_submit_row_active(),
        form.can_submit(),
    );

    draw_help_text(
        frame,
        chunks[chunks.len() - 1],
        &[
            ("Tab", "next field"),
            (SUBMIT_SHORTCUT, "submit"),
            (RESET_SHORTCUT, "clear"),
            (PRESET_SHORTCUT, "preset"),
            ("Esc", "quit"),
        ],
    );
}
