//! Person Form TUI - a schema-validated person form in the terminal
//!
//! Collects name, age, gender and birth year, shows per-field validation
//! errors as you type, and logs the typed values on a valid submit.

mod app;
mod config;
mod platform;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::{TuiConfig, LOG_FILE_NAME, PRESET_ENV};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = TuiConfig::load()?;

    // Initialize logging to a file; stderr would draw over the alternate screen
    let log_dir = config.log_dir();
    fs::create_dir_all(&log_dir)?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&log_dir)?;
    let (log_writer, log_guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer),
        )
        .init();

    // Fail fast on schema problems before touching the terminal
    let env_preset = std::env::var(PRESET_ENV).ok();
    let mut app = App::new(config, env_preset.as_deref())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("{err:?}");
        drop(log_guard);
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!(
        submissions = app.state.form.submissions(),
        "person form closed"
    );
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Events are handled one at a time, in delivery order
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Global quit: Ctrl+C
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }

            app.handle_key(key)?;
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
