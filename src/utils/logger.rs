//! Logging initialization.
//!
//! Logs go to a file so they never draw over the TUI. Each run gets its own
//! timestamped file under `<cache dir>/hist-finder/logs/`.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show debug and higher level logs (includes every ranking pass)
//! - `RUST_LOG=info` - Show info and higher level logs (default)
//! - `RUST_LOG=warn` - Show warnings and errors only
//! - `RUST_LOG=error` - Show errors only

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directory the log files are written to.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("hist-finder").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// File name for a run started now, e.g. `hist-finder.2024-12-06-14-30-25.log`.
fn log_file_name() -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    format!("hist-finder.{}.log", timestamp)
}

/// Initialize the logging system.
///
/// Returns the writer guard; keep it alive until exit so buffered lines are
/// flushed. On failure a warning goes to stderr (the TUI is not up yet) and
/// the program runs without logs.
pub fn init_logging() -> Option<WorkerGuard> {
    init_logging_in(&log_dir())
}

fn init_logging_in(dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Warning: Failed to create logs directory {}: {}", dir.display(), e);
        return None;
    }

    let log_path = dir.join(log_file_name());
    let log_file = match fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", log_path.display(), e);
            return None;
        }
    };

    // Non-blocking so a slow disk never stalls key handling
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
        return None;
    }

    tracing::info!("Logging initialized - writing to {}", log_path.display());
    Some(guard)
}
