use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use shelfscan::cli::Cli;
use shelfscan::config::AppConfig;
use shelfscan::core::catalog::{Catalog, Session};
use shelfscan::core::logging;
use shelfscan::tui::app::AppState;
use shelfscan::tui::theme::ThemeMode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load_from(&cli.config_path()) {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            logging::print_warning("Ignoring config file, using defaults");
            eprintln!("{:?}", miette::Report::new(e));
            AppConfig::default()
        }
    };
    cli.apply(&mut config);

    // Logging (file only: the TUI owns the terminal)
    let _log_guard = logging::init_tui(&config.log_dir());
    log::info!("{} v{} starting", shelfscan::NAME, shelfscan::VERSION);

    // Catalog problems are fatal and reported before raw mode
    let catalog = match Catalog::load(config.catalog.path.as_deref()) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            log::error!("Failed to load catalog: {e}");
            logging::print_error("Could not load the catalog");
            eprintln!("{:?}", miette::Report::new(e));
            return ExitCode::FAILURE;
        }
    };

    let session = Session::new(catalog, config.page_size())
        .with_dedupe_on_load_more(config.catalog.dedupe_on_load_more);

    match run_tui(&config, session).await {
        Ok(()) => {
            log::info!("Shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal error: {e}");
            logging::print_error(&format!("Terminal error: {e}"));
            ExitCode::FAILURE
        }
    }
}

async fn run_tui(config: &AppConfig, session: Session) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(
        session,
        ThemeMode::from_name(&config.tui.theme),
        event_rx,
        event_tx,
    );
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms.max(1)))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
