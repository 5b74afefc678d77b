//! Tubesmith terminal entry point
//!
//! Loads configuration (the provider credential is required and checked
//! before the terminal is touched), sets up the terminal, and runs the App.

use std::io;

use anyhow::Context;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use tubesmith_core::StudioConfig;
use tubesmith_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't corrupt the TUI; silence by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Missing credential is a fatal startup condition
    let config = StudioConfig::from_env().context("startup configuration")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
