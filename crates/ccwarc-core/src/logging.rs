//! Logging init: file under XDG state dir, or stderr as a fallback.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ccwarc=debug,ccwarc_core=debug";
const LOG_FILE_NAME: &str = "ccwarc.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Creates `dir` if needed and opens `dir/ccwarc.log` for appending.
fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok((path, file))
}

/// Initialize structured logging to `~/.local/state/ccwarc/ccwarc.log`.
/// Returns Err when the file cannot be opened so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ccwarc")?;
    let (path, file) = open_log_file(&xdg_dirs.get_state_home())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::info!("ccwarc logging initialized at {}", path.display());
    Ok(path)
}

pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
