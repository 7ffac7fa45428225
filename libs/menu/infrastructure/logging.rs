//! Logging initialization
//!
//! The UI owns the terminal while it runs, so log output goes to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Build the log filter: `RUST_LOG` when set, `level` otherwise
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()))
}

/// Build a subscriber that appends plain-text records to the file at `path`
pub fn file_subscriber(
    path: impl AsRef<Path>,
    level: &str,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .finish())
}

/// Initialize tracing, appending to the file at `path`
pub fn init_tracing_to_file(path: impl AsRef<Path>, level: &str) -> Result<()> {
    file_subscriber(path, level)?
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
