#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use coreum_ft::api::ApiClient;
use coreum_ft::cli::{Cli, Verbosity};
use coreum_ft::config::Config;
use coreum_ft::controller::FormController;
use coreum_ft::storage::FileStore;
use coreum_ft::tui::{App, AppError};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = start(&Cli::parse())?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

/// Resolves config, starts logging and wires the client and store into an
/// [`App`].
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn start(cli: &Cli) -> Result<App<ApiClient, FileStore>, AppError> {
    let config = Config::load(cli)?;
    init_logging(&config.log_file()?, &cli.verbose)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let api = ApiClient::new(&config.api_url)?;
    let store = match &config.store_path {
        Some(path) => FileStore::with_path(path)?,
        None => FileStore::new()?,
    };
    info!(api_url = %api.base_url(), store = %store.path().display(), "starting");

    Ok(App::new(FormController::new(api, store), runtime))
}

/// Sends `tracing` output to `path`; the terminal belongs to the UI.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn init_logging(path: &Path, verbosity: &Verbosity) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(path)?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity.to_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_env_filter(env_filter)
        .finish()
        .try_init()?;
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
