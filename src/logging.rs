//! Tracing setup
//!
//! `RUST_LOG` overrides the default filter. The TUI logs to a file so log
//! lines never land on the alternate screen.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Name of the log file written by [`init_file`]
pub const LOG_FILE: &str = "wordle.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}

/// Log to `<dir>/wordle.log`, creating the directory if needed
///
/// # Errors
/// Returns an I/O error if the directory or file cannot be created.
pub fn init_file(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let log_file = File::create(dir.join(LOG_FILE))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
