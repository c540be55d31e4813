//! cw-careers binary entry point.
//!
//! Parses options, sets up logging, then either runs a headless command or
//! initializes the terminal in raw mode, runs the TUI event loop and restores
//! the terminal state on exit.
//!
use std::fs::File;
use std::io::Stdout;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cw_careers::api::HttpUserApi;
use cw_careers::app::keymap::Keymap;
use cw_careers::app::worker::ThreadExecutor;
use cw_careers::app::{self, AppState, Theme};
use cw_careers::cli::{self, Cli, Command};

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_file_logging(cli: &Cli) -> Result<()> {
    let file = File::create(&cli.log_file)
        .with_context(|| format!("open log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let api = HttpUserApi::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))
        .context("build HTTP client")?;

    match &cli.command {
        Some(Command::List { search }) => {
            init_stderr_logging();
            cli::run_list(&api, search, &mut std::io::stdout().lock())
        }
        Some(Command::Show { id }) => {
            init_stderr_logging();
            cli::run_show(&api, *id, &mut std::io::stdout().lock())
        }
        None => {
            init_file_logging(&cli)?;
            info!(api_url = api.base_url(), "starting TUI");
            let theme = Theme::load_or_init(&cli.theme);
            let keymap = Keymap::load_or_init(&cli.keymap);
            let executor = ThreadExecutor::new(Arc::new(api));
            let mut state = AppState::new(Box::new(executor), theme, keymap);

            let mut terminal = init_terminal().context("init terminal")?;
            let res = app::run(&mut terminal, &mut state);
            restore_terminal(&mut terminal);
            info!("exiting");
            res
        }
    }
}

/// Program entry point: report any top-level error to stderr.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("cw-careers: {err:#}");
        std::process::exit(1);
    }
}
