//! ClavisNova TUI - terminal front end for the ClavisNova piano donation service
//!
//! Donors register pianos, schools apply for one, and anyone can send a
//! message. Each form runs the same validate, serialize, submit pipeline
//! against the ClavisNova API.

mod api;
mod app;
mod config;
mod pipeline;
mod platform;
mod state;
mod telemetry;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// How often the UI redraws and applies finished submissions
const TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // A broken config file is reported in the UI, not fatal
    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (TuiConfig::default(), Some(format!("Config error: {err:#}"))),
    };
    let config = config.with_env();

    telemetry::init(config.log_path().as_deref());

    let mut app = App::new(&config)?;
    if let Some(message) = config_error {
        tracing::warn!("{message}");
        app.push_error(message);
    }

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
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Polling blocks this thread; submissions run on the runtime's workers
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        if app.should_quit() {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
