use pomotui::app::App;
use pomotui::cli::Args;
use pomotui::config::Config;
use pomotui::event_loop::run_app;
use pomotui::logging;

use std::io;
use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();

    // Check if we're in a proper terminal
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("pomotui must be run in an interactive terminal");
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init(&config.logging, &logging::log_dir()?)?;
    info!(
        focus = config.durations.focus_minutes,
        brk = config.durations.break_minutes,
        "starting pomotui"
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode - are you in a terminal?")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config);

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal (always try to restore even on error)
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        error!("exited with error: {:#}", e);
    } else {
        info!("pomotui exited");
    }
    result
}
