//! gridline - A responsive dashboard for the terminal.
//!
//! This is the main binary that loads the configuration, sets up logging
//! and launches the TUI application.

use anyhow::Context;
use gridline_config::{
    Config,
    persistence::{LOG_FILE_NAME, log_dir},
};
use gridline_protocol::dummy::sample_dashboard;
use gridline_tui::{App, terminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when the configuration does not set one.
const DEFAULT_LOG_FILTER: &str = "gridline=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = Config::load()
        .await
        .context("failed to load configuration")?;

    // Must outlive the app so buffered log lines are flushed on exit.
    let _guard = init_logging(&config);
    tracing::info!(
        %source,
        platform = %config.display.platform,
        font_scale = config.display.font_scale,
        pixel_ratio = config.display.pixel_ratio,
        refresh_ms = config.refresh.delay_ms,
        "configuration loaded"
    );

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(sample_dashboard(), config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends `tracing` output to the log file; the terminal belongs to the UI.
///
/// Logging is skipped, with a note on stderr, when no log directory is
/// available.
fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let dir = match log_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("gridline: logging disabled: {err}");
            return None;
        }
    };
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("gridline: logging disabled: {}: {err}", dir.display());
        return None;
    }

    let directive = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("gridline: invalid log filter {directive:?}: {err}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
