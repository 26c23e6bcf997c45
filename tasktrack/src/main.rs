//! `Tasktrack`: in-memory task tracker with a console menu.
//!
//! Tasks live only for the duration of the session. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/tasktrack/config.toml`).
//!
//! ```bash
//! cargo run --bin tasktrack
//!
//! # Default new tasks to high priority and log debug output
//! cargo run --bin tasktrack -- --default-priority high --log-level debug
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use tasktrack::config::{AppConfig, CliArgs};
use tasktrack::console::Menu;
use tasktrack::tasks::TaskManager;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Logs go to a file; stdout belongs to the menu.
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(
        default_priority = %config.default_priority,
        datetime_format = %config.datetime_format,
        "tasktrack starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(TaskManager::new(), config, stdin.lock(), stdout.lock());
    let result = menu.run();

    tracing::info!("tasktrack exiting");
    result
}

/// Initialize file-based logging.
///
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("tasktrack.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}
